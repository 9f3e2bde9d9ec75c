use crate::BookingError;
use roost_core::format::{format_currency, format_date_range, format_location};
use roost_core::status::{status_label, status_tone, StatusTone};
use roost_core::BookingRepository;
use roost_shared::BookingWithProperty;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

const UNTITLED: &str = "Property Name Not Available";

/// One row of the "My Bookings" list, ready to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingCard {
    pub booking_id: String,
    pub property_id: String,
    pub title: String,
    pub price: String,
    pub location: Option<String>,
    pub dates: String,
    pub status: String,
    pub tone: StatusTone,
    pub thumbnail: Option<String>,
}

impl BookingCard {
    fn render(item: &BookingWithProperty, currency: &str) -> Self {
        let booking = &item.booking;
        let property = item.property.as_ref();
        let status = booking.status.as_ref().map(|s| s.as_str());

        Self {
            booking_id: booking.id.clone(),
            property_id: booking.property_id.clone(),
            title: property
                .and_then(|p| p.title.clone())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNTITLED.to_string()),
            price: format_currency(property.and_then(|p| p.price), currency),
            location: format_location(property.and_then(|p| p.location.as_ref())),
            dates: format_date_range(
                booking.check_in_date.as_deref(),
                booking.check_out_date.as_deref(),
            ),
            status: status_label(status),
            tone: status_tone(status),
            thumbnail: property.and_then(|p| p.images.first().cloned()),
        }
    }
}

/// The user's bookings as last fetched from the store.
pub struct BookingHistory {
    repo: Arc<dyn BookingRepository>,
    currency: String,
    bookings: Vec<BookingWithProperty>,
}

impl BookingHistory {
    pub fn new(repo: Arc<dyn BookingRepository>, currency: impl Into<String>) -> Self {
        Self {
            repo,
            currency: currency.into(),
            bookings: Vec::new(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Fetch the bookings again. On failure the previous list is kept.
    pub async fn refresh(&mut self) -> Result<usize, BookingError> {
        match self.repo.list().await {
            Ok(bookings) => {
                info!(count = bookings.len(), "Loaded bookings");
                self.bookings = bookings;
                Ok(self.bookings.len())
            }
            Err(e) => {
                error!("Failed to fetch bookings: {}", e);
                Err(BookingError::LoadFailed(e.to_string()))
            }
        }
    }

    pub fn bookings(&self) -> &[BookingWithProperty] {
        &self.bookings
    }

    pub fn cards(&self) -> Vec<BookingCard> {
        self.bookings
            .iter()
            .map(|item| BookingCard::render(item, &self.currency))
            .collect()
    }

    /// "1 reservation", "3 reservations".
    pub fn summary(&self) -> String {
        match self.bookings.len() {
            1 => "1 reservation".to_string(),
            n => format!("{} reservations", n),
        }
    }
}
