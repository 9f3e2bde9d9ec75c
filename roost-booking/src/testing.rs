use async_trait::async_trait;
use roost_core::{BookingRepository, RepoResult};
use roost_shared::{Booking, BookingWithProperty, NewBooking};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Booking repository double that records every create call.
#[derive(Default)]
pub struct RecordingRepo {
    pub fail_with: Option<String>,
    pub delay: Option<Duration>,
    pub created: Mutex<Vec<NewBooking>>,
    pub listed: Mutex<Vec<BookingWithProperty>>,
    pub list_calls: AtomicUsize,
}

impl RecordingRepo {
    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Default::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn create_calls(&self) -> usize {
        self.created.lock().unwrap().len()
    }
}

#[async_trait]
impl BookingRepository for RecordingRepo {
    async fn create(&self, booking: &NewBooking) -> RepoResult<BookingWithProperty> {
        self.created.lock().unwrap().push(booking.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(reason) = &self.fail_with {
            return Err(reason.clone().into());
        }
        let stored = Booking {
            id: format!("b{}", self.create_calls()),
            property_id: booking.property_id.clone(),
            user_id: None,
            check_in_date: Some(booking.check_in_date.to_string()),
            check_out_date: Some(booking.check_out_date.to_string()),
            status: Some(booking.status.clone()),
        };
        Ok(BookingWithProperty::new(stored, None))
    }

    async fn list(&self) -> RepoResult<Vec<BookingWithProperty>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = &self.fail_with {
            return Err(reason.clone().into());
        }
        Ok(self.listed.lock().unwrap().clone())
    }
}
