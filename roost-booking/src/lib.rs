pub mod client;
pub mod history;
pub mod listing;
pub mod sheet;
pub mod submit;

#[cfg(test)]
pub(crate) mod testing;

pub use client::BookingClient;
pub use history::{BookingCard, BookingHistory};
pub use listing::{Category, PropertyList};
pub use sheet::{BookingSheet, CalendarDay, ConfirmButton, SheetListener, SheetSettings, SheetView};
pub use submit::{booking_request, BookingConfirmation, BookingSubmitter};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("{0}")]
    Validation(String),

    #[error("Booking failed: {0}")]
    SubmissionFailed(String),

    #[error("A booking is already being submitted")]
    AlreadySubmitting,

    #[error("The booking sheet is closed")]
    SheetClosed,

    #[error("Failed to load bookings: {0}")]
    LoadFailed(String),

    #[error("Failed to load properties: {0}")]
    PropertiesUnavailable(String),
}
