use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use super::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
    InProgress,
}

impl AppointmentStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "upcoming" => Some(AppointmentStatus::Upcoming),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            "in-progress" => Some(AppointmentStatus::InProgress),
            _ => None,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            AppointmentStatus::Upcoming => Tone::Primary,
            AppointmentStatus::InProgress => Tone::Warning,
            AppointmentStatus::Completed => Tone::Success,
            AppointmentStatus::Cancelled => Tone::Destructive,
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "Upcoming",
            AppointmentStatus::InProgress => "In Session",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }

    /// Shown in the "upcoming" list rather than the history
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Upcoming | AppointmentStatus::InProgress
        )
    }
}

/// Tone for a free-form status label, neutral when unrecognised
pub fn status_tone(raw: &str) -> Tone {
    AppointmentStatus::parse(raw)
        .map(|status| status.tone())
        .unwrap_or(Tone::Muted)
}

#[derive(Debug, Clone, Serialize)]
pub struct Appointment {
    pub id: u32,
    pub provider: &'static str,
    pub specialty: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub duration_min: u32,
    pub status: AppointmentStatus,
    pub meeting_link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailableSlot {
    pub time: &'static str,
    pub available: bool,
}

/// "14:30" -> "2:30 PM"; input that is not HH:MM is returned unchanged
pub fn format_time(raw: &str) -> String {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map(|time| time.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_twelve_hour() {
        assert_eq!(format_time("14:30"), "2:30 PM");
        assert_eq!(format_time("09:15"), "9:15 AM");
        assert_eq!(format_time("12:00"), "12:00 PM");
        assert_eq!(format_time("00:05"), "12:05 AM");
    }

    #[test]
    fn test_format_time_passthrough() {
        assert_eq!(format_time("soon"), "soon");
    }

    #[test]
    fn test_status_lookup_falls_back_to_muted() {
        assert_eq!(status_tone("upcoming"), Tone::Primary);
        assert_eq!(status_tone("in-progress"), Tone::Warning);
        assert_eq!(status_tone("completed"), Tone::Success);
        assert_eq!(status_tone("cancelled"), Tone::Destructive);
        assert_eq!(status_tone("scheduled"), Tone::Muted);
    }

    #[test]
    fn test_active_statuses() {
        assert!(AppointmentStatus::Upcoming.is_active());
        assert!(AppointmentStatus::InProgress.is_active());
        assert!(!AppointmentStatus::Completed.is_active());
        assert!(!AppointmentStatus::Cancelled.is_active());
    }
}
