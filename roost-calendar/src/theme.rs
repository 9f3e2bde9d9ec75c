use serde::{Deserialize, Serialize};

/// Colour slot a highlighted day is painted with. Resolved to concrete
/// colours through a [`CalendarTheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    /// Check-in/check-out ends and a lone selected day.
    Primary,
    /// Nights between check-in and check-out.
    PrimaryTint,
}

/// Palette of the booking calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarTheme {
    pub selected_day_background: String,
    pub selected_day_text: String,
    pub range_background: String,
    pub range_text: String,
    pub today_text: String,
    pub day_text: String,
    pub disabled_text: String,
    pub month_text: String,
    pub day_header_text: String,
    pub arrow: String,
}

impl Default for CalendarTheme {
    fn default() -> Self {
        Self {
            selected_day_background: "#007AFF".to_string(),
            selected_day_text: "#ffffff".to_string(),
            range_background: "#E3F2FD".to_string(),
            range_text: "#007AFF".to_string(),
            today_text: "#007AFF".to_string(),
            day_text: "#1E3A8A".to_string(),
            disabled_text: "#94A3B8".to_string(),
            month_text: "#1E3A8A".to_string(),
            day_header_text: "#2563EB".to_string(),
            arrow: "#007AFF".to_string(),
        }
    }
}

impl CalendarTheme {
    pub fn background(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::Primary => &self.selected_day_background,
            ColorToken::PrimaryTint => &self.range_background,
        }
    }

    pub fn text(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::Primary => &self.selected_day_text,
            ColorToken::PrimaryTint => &self.range_text,
        }
    }
}
