//! Closed set of dashboard sections reachable from the navigation panel

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier that did not match any section
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

/// Top-level sections, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Appointments,
    Exercise,
    Vitals,
    Messages,
    Profile,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Appointments,
        Section::Exercise,
        Section::Vitals,
        Section::Messages,
        Section::Profile,
    ];

    /// Stable identifier used by the router, the CLI and the command bar
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Appointments => "appointments",
            Section::Exercise => "exercise",
            Section::Vitals => "vitals",
            Section::Messages => "messages",
            Section::Profile => "profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Appointments => "Appointments",
            Section::Exercise => "Exercise Log",
            Section::Vitals => "Vital Signs",
            Section::Messages => "Messages",
            Section::Profile => "Profile",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Section::Dashboard => "Overview & health status",
            Section::Appointments => "Video consultations",
            Section::Exercise => "Track your progress",
            Section::Vitals => "Monitor your health",
            Section::Messages => "Secure communication",
            Section::Profile => "Personal settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard | Section::Vitals => "♥",
            Section::Appointments => "◷",
            Section::Exercise => "≈",
            Section::Messages => "✉",
            Section::Profile => "☺",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Section::Dashboard => '1',
            Section::Appointments => '2',
            Section::Exercise => '3',
            Section::Vitals => '4',
            Section::Messages => '5',
            Section::Profile => '6',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.shortcut() == c)
    }

    pub fn index(&self) -> usize {
        Section::ALL
            .iter()
            .position(|section| section == self)
            .unwrap_or(0)
    }

    pub fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn prev(&self) -> Section {
        Section::ALL[(self.index() + Section::ALL.len() - 1) % Section::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.id() == needle)
            .ok_or_else(|| UnknownSection(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert_eq!(" Vitals ".parse::<Section>(), Ok(Section::Vitals));
    }

    #[test]
    fn test_parse_unknown_id() {
        assert_eq!(
            "billing".parse::<Section>(),
            Err(UnknownSection("billing".to_string()))
        );
    }

    #[test]
    fn test_shortcuts_are_unique() {
        for section in Section::ALL {
            assert_eq!(Section::from_shortcut(section.shortcut()), Some(section));
        }
        assert_eq!(Section::from_shortcut('7'), None);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Section::Profile.next(), Section::Dashboard);
        assert_eq!(Section::Dashboard.prev(), Section::Profile);
        assert_eq!(Section::default(), Section::Dashboard);
    }
}
