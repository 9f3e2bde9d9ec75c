use super::property::Property;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Booking lifecycle status as stored by the backend.
///
/// Unrecognised values are kept verbatim in `Other` so they survive a
/// round-trip and can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    Finished,
    Other(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::Finished => "finished",
            BookingStatus::Other(s) => s,
        }
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "pending" => BookingStatus::Pending,
            "confirmed" => BookingStatus::Confirmed,
            "cancelled" => BookingStatus::Cancelled,
            "completed" => BookingStatus::Completed,
            "finished" => BookingStatus::Finished,
            _ => BookingStatus::Other(s),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload posted to the backend to create a booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub property_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
}

impl NewBooking {
    pub fn pending(
        property_id: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            check_in_date: check_in,
            check_out_date: check_out,
            status: BookingStatus::Pending,
        }
    }
}

/// A stored booking. Dates stay as the raw strings the backend returned;
/// display code formats them leniently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "super::deserialize_id")]
    pub property_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub check_in_date: Option<String>,
    #[serde(default)]
    pub check_out_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingWithProperty {
    #[serde(flatten)]
    pub booking: Booking,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<Property>,
}

impl BookingWithProperty {
    pub fn new(booking: Booking, property: Option<Property>) -> Self {
        Self { booking, property }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_booking_wire_format() {
        let request = NewBooking::pending(
            "p1",
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "propertyId": "p1",
                "checkInDate": "2025-07-01",
                "checkOutDate": "2025-07-04",
                "status": "pending"
            })
        );
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let json = r#"{ "id": 3, "propertyId": "p9", "status": "On-Hold" }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id, "3");
        assert_eq!(booking.status, Some(BookingStatus::Other("On-Hold".into())));
        assert!(booking.check_in_date.is_none());
    }

    #[test]
    fn test_numeric_property_id() {
        let json = r#"[
            { "id": 1, "propertyId": 4, "checkInDate": "2025-05-01", "checkOutDate": "2025-05-03" },
            { "id": 2, "propertyId": "p1" }
        ]"#;
        let bookings: Vec<Booking> = serde_json::from_str(json).unwrap();
        assert_eq!(bookings[0].property_id, "4");
        assert_eq!(bookings[1].property_id, "p1");
    }

    #[test]
    fn test_status_parsing_ignores_case() {
        assert_eq!(BookingStatus::from("CONFIRMED".to_string()), BookingStatus::Confirmed);
    }

    #[test]
    fn test_booking_with_embedded_property() {
        let json = r#"
            {
                "id": "b1",
                "propertyId": "p1",
                "checkInDate": "2025-07-01",
                "checkOutDate": "2025-07-04",
                "status": "pending",
                "property": { "id": "p1", "title": "Beach hut" }
            }
        "#;
        let item: BookingWithProperty = serde_json::from_str(json).unwrap();
        assert_eq!(item.booking.status, Some(BookingStatus::Pending));
        assert_eq!(item.property.unwrap().title.as_deref(), Some("Beach hut"));
    }
}
