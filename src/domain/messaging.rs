use chrono::NaiveDateTime;
use serde::Serialize;

use super::vitals::parse_timestamp;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    Patient,
    Provider,
}

#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub size: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: u32,
    pub sender: SenderRole,
    pub sender_name: &'static str,
    pub content: &'static str,
    pub timestamp: &'static str,
    pub read: bool,
    pub urgent: bool,
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    pub id: u32,
    pub provider_name: &'static str,
    pub provider_title: &'static str,
    pub specialty: &'static str,
    pub last_message: &'static str,
    pub last_message_time: &'static str,
    pub unread_count: u32,
    pub online: bool,
}

impl Conversation {
    /// Avatar fallback: first letter of every word in the provider name
    pub fn initials(&self) -> String {
        self.provider_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    pub fn presence(&self) -> &'static str {
        if self.online {
            "Online"
        } else {
            "Last seen 2 hours ago"
        }
    }
}

/// Same day: "02:30 PM"; one day back: "Yesterday"; otherwise the date
pub fn format_relative(raw: &str, now: NaiveDateTime) -> String {
    let Some(ts) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let days = (now - ts).num_seconds().div_euclid(SECONDS_PER_DAY);
    match days {
        0 => ts.format("%I:%M %p").to_string(),
        1 => "Yesterday".to_string(),
        _ => ts.format("%-m/%-d/%Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> NaiveDateTime {
        parse_timestamp(raw).expect("valid timestamp")
    }

    #[test]
    fn test_relative_same_day() {
        let now = at("2024-01-15T18:00:00");
        assert_eq!(format_relative("2024-01-15T14:30:00", now), "02:30 PM");
    }

    #[test]
    fn test_relative_yesterday_and_older() {
        let now = at("2024-01-15T18:00:00");
        assert_eq!(format_relative("2024-01-14T16:45:00", now), "Yesterday");
        assert_eq!(format_relative("2024-01-10T09:00:00", now), "1/10/2024");
    }

    #[test]
    fn test_relative_future_shows_date() {
        let now = at("2024-01-15T08:00:00");
        assert_eq!(format_relative("2024-01-15T14:30:00", now), "1/15/2024");
    }

    #[test]
    fn test_initials() {
        let conversation = Conversation {
            id: 2,
            provider_name: "Lisa Chen, RN",
            provider_title: "Lisa Chen",
            specialty: "Cardiac Rehabilitation Nurse",
            last_message: "",
            last_message_time: "2024-01-15T09:15:00",
            unread_count: 2,
            online: false,
        };
        assert_eq!(conversation.initials(), "LCR");
        assert_eq!(conversation.presence(), "Last seen 2 hours ago");
    }
}
