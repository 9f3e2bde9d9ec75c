use crate::BookingError;
use chrono::NaiveDate;
use roost_calendar::DateRangeSelection;
use roost_core::BookingRepository;
use roost_shared::NewBooking;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

pub const DATES_REQUIRED: &str = "Please select both check-in and check-out dates";

/// What the sheet hands to its owner once a booking went through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub location: String,
    pub property_id: String,
}

/// Build the pending booking for a completed selection.
pub fn booking_request(
    selection: &DateRangeSelection,
    property_id: &str,
) -> Result<NewBooking, BookingError> {
    let (check_in, check_out) = selection
        .range()
        .ok_or_else(|| BookingError::Validation(DATES_REQUIRED.to_string()))?;
    Ok(NewBooking::pending(property_id, check_in, check_out))
}

/// Sends completed selections to the booking store.
#[derive(Clone)]
pub struct BookingSubmitter {
    repo: Arc<dyn BookingRepository>,
}

impl BookingSubmitter {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    /// Submit the selection as a pending booking.
    ///
    /// An incomplete selection is rejected before the store is contacted.
    /// Otherwise the store is called exactly once; failures are not retried.
    pub async fn confirm_booking(
        &self,
        selection: &DateRangeSelection,
        property_id: &str,
        location: &str,
    ) -> Result<BookingConfirmation, BookingError> {
        let request = booking_request(selection, property_id)?;

        let stored = self.repo.create(&request).await.map_err(|e| {
            error!(property_id, "Booking failed: {}", e);
            BookingError::SubmissionFailed(e.to_string())
        })?;

        info!(
            booking_id = %stored.booking.id,
            property_id,
            check_in = %request.check_in_date,
            check_out = %request.check_out_date,
            "Booking created"
        );

        Ok(BookingConfirmation {
            check_in: request.check_in_date,
            check_out: request.check_out_date,
            location: location.to_string(),
            property_id: request.property_id,
        })
    }
}
