use chrono::NaiveDateTime;
use serde::Serialize;

use super::Tone;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    HeartRate,
    BloodPressure,
    OxygenSaturation,
    Temperature,
    Weight,
}

impl VitalKind {
    pub fn label(&self) -> &'static str {
        match self {
            VitalKind::HeartRate => "heart rate",
            VitalKind::BloodPressure => "blood pressure",
            VitalKind::OxygenSaturation => "oxygen saturation",
            VitalKind::Temperature => "temperature",
            VitalKind::Weight => "weight",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            VitalKind::HeartRate => "♥",
            VitalKind::OxygenSaturation => "◍",
            VitalKind::Temperature => "°",
            VitalKind::BloodPressure | VitalKind::Weight => "∿",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalStatus {
    Normal,
    High,
    Low,
    Critical,
}

impl VitalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VitalStatus::Normal => "normal",
            VitalStatus::High => "high",
            VitalStatus::Low => "low",
            VitalStatus::Critical => "critical",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            VitalStatus::Normal => Tone::Success,
            VitalStatus::High | VitalStatus::Low => Tone::Warning,
            VitalStatus::Critical => Tone::Destructive,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VitalReading {
    pub id: u32,
    pub kind: VitalKind,
    pub value: &'static str,
    pub unit: &'static str,
    pub timestamp: &'static str,
    pub status: VitalStatus,
    pub notes: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    pub fn glyph(&self) -> &'static str {
        match self {
            TrendDirection::Up => "↑",
            TrendDirection::Down => "↓",
            TrendDirection::Stable => "→",
        }
    }
}

/// Hardcoded trend card; not derived from the readings list
#[derive(Debug, Clone, Copy)]
pub struct VitalTrend {
    pub kind: VitalKind,
    pub title: &'static str,
    pub current: &'static str,
    pub unit: &'static str,
    pub badge: &'static str,
    pub direction: TrendDirection,
    pub change: &'static str,
}

/// Whether a trend direction is good news for this vital
pub fn trend_tone(kind: VitalKind, direction: TrendDirection) -> Tone {
    match (kind, direction) {
        (VitalKind::HeartRate, TrendDirection::Down) => Tone::Success,
        (VitalKind::HeartRate, TrendDirection::Up) => Tone::Warning,
        (VitalKind::BloodPressure, TrendDirection::Down) => Tone::Success,
        (VitalKind::BloodPressure, _) => Tone::Warning,
        (VitalKind::OxygenSaturation, TrendDirection::Up) => Tone::Success,
        _ => Tone::Muted,
    }
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok()
}

/// Time-of-day for the readings list, e.g. "2:30:00 PM"
pub fn format_reading_time(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|ts| ts.format("%-I:%M:%S %p").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Full local date and time, e.g. "1/15/2024, 2:30:00 PM"
pub fn format_reading_datetime(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|ts| ts.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lookup() {
        assert_eq!(VitalStatus::Normal.tone(), Tone::Success);
        assert_eq!(VitalStatus::Low.tone(), Tone::Warning);
        assert_eq!(VitalStatus::High.tone(), Tone::Warning);
        assert_eq!(VitalStatus::Critical.tone(), Tone::Destructive);
    }

    #[test]
    fn test_trend_tone() {
        assert_eq!(
            trend_tone(VitalKind::HeartRate, TrendDirection::Down),
            Tone::Success
        );
        assert_eq!(
            trend_tone(VitalKind::HeartRate, TrendDirection::Stable),
            Tone::Muted
        );
        assert_eq!(
            trend_tone(VitalKind::BloodPressure, TrendDirection::Stable),
            Tone::Warning
        );
        assert_eq!(
            trend_tone(VitalKind::OxygenSaturation, TrendDirection::Down),
            Tone::Muted
        );
        assert_eq!(
            trend_tone(VitalKind::Temperature, TrendDirection::Up),
            Tone::Muted
        );
    }

    #[test]
    fn test_format_reading_time() {
        assert_eq!(format_reading_time("2024-01-15T14:30:00"), "2:30:00 PM");
        assert_eq!(format_reading_time("2024-01-15T09:00:00"), "9:00:00 AM");
        assert_eq!(
            format_reading_datetime("2024-01-15T14:25:00"),
            "1/15/2024, 2:25:00 PM"
        );
        assert_eq!(format_reading_time("yesterday"), "yesterday");
    }
}
