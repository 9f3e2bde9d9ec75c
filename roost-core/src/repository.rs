use async_trait::async_trait;
use roost_shared::{Booking, BookingWithProperty, NewBooking, Profile, Property};

pub type RepoError = Box<dyn std::error::Error + Send + Sync>;
pub type RepoResult<T> = Result<T, RepoError>;

/// Booking store: the only collaborator the booking flow writes to.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking and return the stored record.
    async fn create(&self, booking: &NewBooking) -> RepoResult<BookingWithProperty>;

    /// All bookings, each joined with its property when it can be resolved.
    async fn list(&self) -> RepoResult<Vec<BookingWithProperty>>;
}

/// Read-only property catalogue.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn list_properties(&self) -> RepoResult<Vec<Property>>;

    async fn get_property(&self, id: &str) -> RepoResult<Option<Property>>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_profile(&self) -> RepoResult<Profile>;
}

/// Convenience used by stores that hold plain `Booking` records.
pub fn join_property(booking: Booking, properties: &[Property]) -> BookingWithProperty {
    let property = properties.iter().find(|p| p.id == booking.property_id).cloned();
    BookingWithProperty::new(booking, property)
}
