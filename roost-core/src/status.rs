use serde::Serialize;

/// Colour family of the status badge shown on a booking card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Success,
    Warning,
    Info,
    Danger,
    Neutral,
}

pub fn status_tone(status: Option<&str>) -> StatusTone {
    match status.map(str::to_ascii_lowercase).as_deref() {
        Some("confirmed") => StatusTone::Success,
        Some("pending") => StatusTone::Warning,
        Some("completed") | Some("finished") => StatusTone::Info,
        Some("cancelled") => StatusTone::Danger,
        _ => StatusTone::Neutral,
    }
}

/// Capitalised status for display; "Unknown" when missing.
pub fn status_label(status: Option<&str>) -> String {
    let Some(status) = status.filter(|s| !s.is_empty()) else {
        return "Unknown".to_string();
    };
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Unknown".to_string(),
    }
}
