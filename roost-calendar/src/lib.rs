pub mod selection;
pub mod theme;

pub use selection::{DateRangeSelection, DayHighlight, HighlightRole, SelectionPhase};
pub use theme::{CalendarTheme, ColorToken};

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Malformed calendar day: {0:?} (expected YYYY-MM-DD)")]
    MalformedDate(String),
}

/// Parse a day as emitted by the calendar widget (`YYYY-MM-DD`).
pub fn parse_day(input: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| CalendarError::MalformedDate(input.to_string()))
}
