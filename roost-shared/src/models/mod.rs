pub mod booking;
pub mod profile;
pub mod property;

pub use booking::{Booking, BookingStatus, BookingWithProperty, NewBooking};
pub use profile::Profile;
pub use property::{Coordinates, Location, LocationInput, Property};

use serde::{Deserialize, Deserializer};

/// Backends hand out ids either as strings or as bare numbers (json-server
/// does both). Both are normalised to a string.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
