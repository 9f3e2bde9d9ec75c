use crate::theme::ColorToken;
use crate::{parse_day, CalendarError};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::trace;

/// Which end of the range the next tapped day sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionPhase {
    AwaitingCheckIn,
    AwaitingCheckOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HighlightRole {
    Start,
    Middle,
    End,
    SingleSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayHighlight {
    pub role: HighlightRole,
    pub color: ColorToken,
}

impl DayHighlight {
    fn for_role(role: HighlightRole) -> Self {
        let color = match role {
            HighlightRole::Middle => ColorToken::PrimaryTint,
            _ => ColorToken::Primary,
        };
        Self { role, color }
    }
}

/// Check-in/check-out selection on the booking calendar.
///
/// Transitions (see [`DateRangeSelection::on_day_tapped`]):
///
/// ```text
/// Empty ──tap──▶ HasCheckIn ──tap after check-in──▶ HasRange
///                  ▲    │                              │
///                  └────┘ tap on/before check-in       │
///                  ▲                                   │
///                  └───────────────tap─────────────────┘
/// ```
///
/// Highlights are derived from the variant on every call, so they always
/// agree with the selected dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateRangeSelection {
    #[default]
    Empty,
    HasCheckIn {
        check_in: NaiveDate,
    },
    /// `check_out` is always strictly after `check_in`.
    HasRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

impl DateRangeSelection {
    pub fn new() -> Self {
        Self::Empty
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        match *self {
            Self::Empty => None,
            Self::HasCheckIn { check_in } | Self::HasRange { check_in, .. } => Some(check_in),
        }
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        match *self {
            Self::HasRange { check_out, .. } => Some(check_out),
            _ => None,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        match self {
            Self::HasCheckIn { .. } => SelectionPhase::AwaitingCheckOut,
            Self::Empty | Self::HasRange { .. } => SelectionPhase::AwaitingCheckIn,
        }
    }

    /// Both ends chosen.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            Self::HasRange { check_in, check_out } => Some((check_in, check_out)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Apply a tap on `tapped`.
    ///
    /// While awaiting check-out, a day after the check-in completes the
    /// range. Anything else (awaiting check-in, or a day on or before the
    /// current check-in) starts over with `tapped` as the new check-in.
    pub fn on_day_tapped(self, tapped: NaiveDate) -> Self {
        match self {
            Self::HasCheckIn { check_in } if tapped > check_in => Self::HasRange {
                check_in,
                check_out: tapped,
            },
            Self::HasCheckIn { check_in } => {
                trace!(%check_in, %tapped, "tap on or before check-in, restarting selection");
                Self::HasCheckIn { check_in: tapped }
            }
            Self::Empty | Self::HasRange { .. } => Self::HasCheckIn { check_in: tapped },
        }
    }

    /// Like [`on_day_tapped`](Self::on_day_tapped) for the `YYYY-MM-DD`
    /// string the calendar widget reports. A malformed day leaves the
    /// selection as it was.
    pub fn on_day_tapped_str(self, tapped: &str) -> Result<Self, CalendarError> {
        Ok(self.on_day_tapped(parse_day(tapped)?))
    }

    pub fn reset(self) -> Self {
        Self::Empty
    }

    /// Highlighted days in calendar order.
    pub fn highlighted_days_iter(&self) -> impl Iterator<Item = (NaiveDate, DayHighlight)> {
        let bounds = match *self {
            Self::Empty => None,
            Self::HasCheckIn { check_in } => Some((check_in, check_in)),
            Self::HasRange { check_in, check_out } => Some((check_in, check_out)),
        };

        bounds.into_iter().flat_map(|(start, end)| {
            start
                .iter_days()
                .take_while(move |day| *day <= end)
                .map(move |day| {
                    let role = if start == end {
                        HighlightRole::SingleSelected
                    } else if day == start {
                        HighlightRole::Start
                    } else if day == end {
                        HighlightRole::End
                    } else {
                        HighlightRole::Middle
                    };
                    (day, DayHighlight::for_role(role))
                })
        })
    }

    pub fn highlighted_days(&self) -> BTreeMap<NaiveDate, DayHighlight> {
        self.highlighted_days_iter().collect()
    }
}
