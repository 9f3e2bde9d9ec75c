use crate::submit::{booking_request, BookingConfirmation, BookingSubmitter};
use crate::BookingError;
use chrono::NaiveDate;
use roost_calendar::{
    CalendarError, CalendarTheme, DateRangeSelection, HighlightRole, SelectionPhase,
};
use roost_core::format::format_short_date;
use roost_store::app_config::BookingConfig;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Notifications the booking sheet sends to whoever presented it.
pub trait SheetListener: Send + Sync {
    fn on_confirmed(&self, confirmation: &BookingConfirmation);
    fn on_closed(&self);
}

#[derive(Debug, Clone)]
pub struct SheetSettings {
    /// How long a confirmed selection stays visible before it is cleared.
    pub reset_delay: Duration,
    pub theme: CalendarTheme,
}

impl SheetSettings {
    pub fn from_config(booking: &BookingConfig, theme: &CalendarTheme) -> Self {
        Self {
            reset_delay: booking.reset_delay(),
            theme: theme.clone(),
        }
    }
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            reset_delay: Duration::from_millis(300),
            theme: CalendarTheme::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmButton {
    pub label: &'static str,
    pub enabled: bool,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub role: HighlightRole,
    pub background: String,
    pub text: String,
}

/// Everything needed to paint the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetView {
    pub location: String,
    pub check_in_label: String,
    pub check_out_label: String,
    pub prompt: &'static str,
    pub confirm_button: ConfirmButton,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Default)]
struct SheetState {
    selection: DateRangeSelection,
    open: bool,
    submitting: bool,
    /// Bumped whenever a session starts or ends. Work started in an older
    /// session must not touch the current one.
    session: u64,
}

/// Headless booking sheet: the calendar selection of one property, its
/// confirm action, and the open/closed lifecycle.
pub struct BookingSheet {
    submitter: BookingSubmitter,
    listener: Arc<dyn SheetListener>,
    property_id: String,
    location: String,
    settings: SheetSettings,
    state: Arc<Mutex<SheetState>>,
}

fn lock(state: &Mutex<SheetState>) -> MutexGuard<'_, SheetState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl BookingSheet {
    pub fn new(
        submitter: BookingSubmitter,
        listener: Arc<dyn SheetListener>,
        property_id: impl Into<String>,
        location: impl Into<String>,
        settings: SheetSettings,
    ) -> Self {
        Self {
            submitter,
            listener,
            property_id: property_id.into(),
            location: location.into(),
            settings,
            state: Arc::new(Mutex::new(SheetState::default())),
        }
    }

    pub fn open(&self) {
        let mut state = lock(&self.state);
        state.open = true;
        state.session += 1;
        state.selection = DateRangeSelection::new();
        debug!(property_id = %self.property_id, "booking sheet opened");
    }

    pub fn is_open(&self) -> bool {
        lock(&self.state).open
    }

    pub fn is_submitting(&self) -> bool {
        lock(&self.state).submitting
    }

    pub fn selection(&self) -> DateRangeSelection {
        lock(&self.state).selection
    }

    /// Feed a calendar tap into the selection. Taps on a closed sheet are
    /// ignored.
    pub fn tap_day(&self, day: NaiveDate) -> DateRangeSelection {
        let mut state = lock(&self.state);
        if state.open {
            state.selection = state.selection.on_day_tapped(day);
        } else {
            debug!(%day, "tap on closed booking sheet ignored");
        }
        state.selection
    }

    pub fn tap_day_str(&self, day: &str) -> Result<DateRangeSelection, CalendarError> {
        let day = roost_calendar::parse_day(day)?;
        Ok(self.tap_day(day))
    }

    pub fn reset(&self) {
        lock(&self.state).selection = DateRangeSelection::new();
    }

    /// Close the sheet, discarding the selection.
    pub fn dismiss(&self) {
        {
            let mut state = lock(&self.state);
            if !state.open {
                return;
            }
            state.open = false;
            state.session += 1;
            state.selection = DateRangeSelection::new();
        }
        self.listener.on_closed();
    }

    /// Submit the current selection.
    ///
    /// Only one submission may be in flight, and only an open sheet submits.
    /// On success the listener is told
    /// about the booking, the sheet closes and the selection is cleared after
    /// the configured delay. On failure the selection is kept for a retry.
    ///
    /// If the sheet was dismissed while the store call was pending, the
    /// result is still returned but the listener is not notified.
    pub async fn confirm(&self) -> Result<BookingConfirmation, BookingError> {
        let (selection, session) = {
            let mut state = lock(&self.state);
            if state.submitting {
                return Err(BookingError::AlreadySubmitting);
            }
            if !state.open {
                return Err(BookingError::SheetClosed);
            }
            booking_request(&state.selection, &self.property_id)?;
            state.submitting = true;
            (state.selection, state.session)
        };

        let result = self
            .submitter
            .confirm_booking(&selection, &self.property_id, &self.location)
            .await;

        let still_current = {
            let mut state = lock(&self.state);
            state.submitting = false;
            let current = state.open && state.session == session;
            if current && result.is_ok() {
                state.open = false;
            }
            current
        };

        let confirmation = result?;

        if !still_current {
            warn!(
                property_id = %self.property_id,
                "booking completed after the sheet was dismissed"
            );
            return Ok(confirmation);
        }

        self.listener.on_confirmed(&confirmation);
        self.listener.on_closed();
        self.schedule_reset(session);
        info!(property_id = %self.property_id, "booking confirmed");

        Ok(confirmation)
    }

    fn schedule_reset(&self, session: u64) {
        let state = Arc::clone(&self.state);
        let delay = self.settings.reset_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = lock(&state);
            if state.session == session {
                state.selection = DateRangeSelection::new();
            }
        });
    }

    pub fn view(&self) -> SheetView {
        let (selection, submitting) = {
            let state = lock(&self.state);
            (state.selection, state.submitting)
        };

        let label = |day: Option<NaiveDate>| match day {
            Some(d) => format_short_date(&d.to_string()),
            None => "Select date".to_string(),
        };

        let prompt = match selection.phase() {
            SelectionPhase::AwaitingCheckIn => "Select your check-in date",
            SelectionPhase::AwaitingCheckOut => "Select your check-out date",
        };

        let theme = &self.settings.theme;
        let days = selection
            .highlighted_days_iter()
            .map(|(date, highlight)| CalendarDay {
                date,
                role: highlight.role,
                background: theme.background(highlight.color).to_string(),
                text: theme.text(highlight.color).to_string(),
            })
            .collect();

        SheetView {
            location: self.location.clone(),
            check_in_label: label(selection.check_in()),
            check_out_label: label(selection.check_out()),
            prompt,
            confirm_button: ConfirmButton {
                label: if submitting { "Creating Booking..." } else { "Confirm Booking" },
                enabled: selection.range().is_some() && !submitting,
                loading: submitting,
            },
            days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRepo;
    use roost_calendar::parse_day;

    #[derive(Default)]
    struct Recorder {
        confirmed: Mutex<Vec<BookingConfirmation>>,
        closed: Mutex<usize>,
    }

    impl SheetListener for Recorder {
        fn on_confirmed(&self, confirmation: &BookingConfirmation) {
            self.confirmed.lock().unwrap().push(confirmation.clone());
        }

        fn on_closed(&self) {
            *self.closed.lock().unwrap() += 1;
        }
    }

    fn sheet(repo: Arc<RecordingRepo>, listener: Arc<Recorder>) -> BookingSheet {
        let sheet = BookingSheet::new(
            BookingSubmitter::new(repo),
            listener,
            "p1",
            "Manhattan, New York, United States",
            SheetSettings::default(),
        );
        sheet.open();
        sheet
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirm_notifies_and_resets_after_delay() {
        let repo = Arc::new(RecordingRepo::default());
        let listener = Arc::new(Recorder::default());
        let sheet = sheet(repo.clone(), listener.clone());

        sheet.tap_day_str("2025-07-01").unwrap();
        sheet.tap_day_str("2025-07-04").unwrap();
        let confirmation = sheet.confirm().await.unwrap();

        assert_eq!(confirmation.check_in, parse_day("2025-07-01").unwrap());
        assert_eq!(confirmation.check_out, parse_day("2025-07-04").unwrap());
        assert_eq!(confirmation.property_id, "p1");
        assert_eq!(repo.create_calls(), 1);
        assert_eq!(listener.confirmed.lock().unwrap().as_slice(), &[confirmation]);
        assert_eq!(*listener.closed.lock().unwrap(), 1);
        assert!(!sheet.is_open());

        // Still visible while the success state is shown.
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(sheet.selection().range().is_some());

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(sheet.selection().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirm_after_success_does_not_resubmit() {
        let repo = Arc::new(RecordingRepo::default());
        let listener = Arc::new(Recorder::default());
        let sheet = sheet(repo.clone(), listener.clone());

        sheet.tap_day_str("2025-07-01").unwrap();
        sheet.tap_day_str("2025-07-04").unwrap();
        sheet.confirm().await.unwrap();
        assert!(!sheet.is_open());

        // The range is still on screen until the reset fires.
        assert!(sheet.selection().range().is_some());
        assert_eq!(sheet.confirm().await, Err(BookingError::SheetClosed));
        assert_eq!(repo.create_calls(), 1);
        assert_eq!(listener.confirmed.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_confirm_on_dismissed_sheet_is_rejected() {
        let repo = Arc::new(RecordingRepo::default());
        let sheet = sheet(repo.clone(), Arc::new(Recorder::default()));

        sheet.tap_day_str("2025-07-01").unwrap();
        sheet.tap_day_str("2025-07-04").unwrap();
        sheet.dismiss();

        assert_eq!(sheet.confirm().await, Err(BookingError::SheetClosed));
        assert_eq!(repo.create_calls(), 0);
    }

    #[tokio::test]
    async fn test_confirm_without_check_out_is_rejected_locally() {
        let repo = Arc::new(RecordingRepo::default());
        let listener = Arc::new(Recorder::default());
        let sheet = sheet(repo.clone(), listener.clone());

        sheet.tap_day_str("2025-07-01").unwrap();
        let err = sheet.confirm().await.unwrap_err();

        assert!(matches!(err, BookingError::Validation(_)));
        assert_eq!(repo.create_calls(), 0);
        assert!(!sheet.is_submitting());
        assert_eq!(sheet.selection().check_in(), parse_day("2025-07-01").ok());
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_selection() {
        let repo = Arc::new(RecordingRepo::failing("503 Service Unavailable"));
        let listener = Arc::new(Recorder::default());
        let sheet = sheet(repo.clone(), listener.clone());

        sheet.tap_day_str("2025-07-01").unwrap();
        sheet.tap_day_str("2025-07-04").unwrap();
        let err = sheet.confirm().await.unwrap_err();

        assert!(matches!(err, BookingError::SubmissionFailed(_)));
        assert!(sheet.is_open());
        assert!(!sheet.is_submitting());
        assert_eq!(
            sheet.selection().range(),
            Some((parse_day("2025-07-01").unwrap(), parse_day("2025-07-04").unwrap()))
        );
        assert!(listener.confirmed.lock().unwrap().is_empty());
        assert_eq!(*listener.closed.lock().unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_confirm_while_in_flight_is_rejected() {
        let repo = Arc::new(RecordingRepo::slow(Duration::from_secs(2)));
        let listener = Arc::new(Recorder::default());
        let sheet = Arc::new(sheet(repo.clone(), listener.clone()));

        sheet.tap_day_str("2025-07-01").unwrap();
        sheet.tap_day_str("2025-07-04").unwrap();

        let first = tokio::spawn({
            let sheet = Arc::clone(&sheet);
            async move { sheet.confirm().await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(sheet.is_submitting());
        assert!(sheet.view().confirm_button.loading);
        assert_eq!(sheet.confirm().await, Err(BookingError::AlreadySubmitting));

        assert!(first.await.unwrap().is_ok());
        assert_eq!(repo.create_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_during_submission_suppresses_notifications() {
        let repo = Arc::new(RecordingRepo::slow(Duration::from_secs(1)));
        let listener = Arc::new(Recorder::default());
        let sheet = Arc::new(sheet(repo.clone(), listener.clone()));

        sheet.tap_day_str("2025-07-01").unwrap();
        sheet.tap_day_str("2025-07-04").unwrap();

        let pending = tokio::spawn({
            let sheet = Arc::clone(&sheet);
            async move { sheet.confirm().await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        sheet.dismiss();

        let result = pending.await.unwrap();
        assert!(result.is_ok());
        assert!(listener.confirmed.lock().unwrap().is_empty());
        assert_eq!(*listener.closed.lock().unwrap(), 1);
        assert!(!sheet.is_submitting());
    }

    #[test]
    fn test_taps_on_closed_sheet_are_ignored() {
        let repo = Arc::new(RecordingRepo::default());
        let listener = Arc::new(Recorder::default());
        let sheet = sheet(repo, listener.clone());

        sheet.dismiss();
        sheet.dismiss();
        assert_eq!(*listener.closed.lock().unwrap(), 1);

        let selection = sheet.tap_day(parse_day("2025-07-01").unwrap());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_view_follows_selection() {
        let repo = Arc::new(RecordingRepo::default());
        let sheet = sheet(repo, Arc::new(Recorder::default()));

        let view = sheet.view();
        assert_eq!(view.check_in_label, "Select date");
        assert_eq!(view.prompt, "Select your check-in date");
        assert!(!view.confirm_button.enabled);
        assert_eq!(view.confirm_button.label, "Confirm Booking");
        assert!(view.days.is_empty());

        sheet.tap_day_str("2025-06-10").unwrap();
        let view = sheet.view();
        assert_eq!(view.check_in_label, "Jun 10");
        assert_eq!(view.check_out_label, "Select date");
        assert_eq!(view.prompt, "Select your check-out date");
        assert_eq!(view.days.len(), 1);
        assert_eq!(view.days[0].role, HighlightRole::SingleSelected);

        sheet.tap_day_str("2025-06-13").unwrap();
        let view = sheet.view();
        assert_eq!(view.check_out_label, "Jun 13");
        assert!(view.confirm_button.enabled);
        let roles: Vec<_> = view.days.iter().map(|d| d.role).collect();
        assert_eq!(
            roles,
            vec![
                HighlightRole::Start,
                HighlightRole::Middle,
                HighlightRole::Middle,
                HighlightRole::End
            ]
        );
        assert_eq!(view.days[0].background, "#007AFF");
        assert_eq!(view.days[1].background, "#E3F2FD");
        assert_eq!(view.days[1].text, "#007AFF");

        sheet.reset();
        assert!(sheet.view().days.is_empty());
    }
}
