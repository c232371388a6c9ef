//! Actions that modules return to the shell

use super::Section;

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Mount another section
    Navigate(Section),

    /// Show notification in status bar
    Notify(String, NotifyLevel),
}

impl Action {
    pub fn info(text: impl Into<String>) -> Self {
        Action::Notify(text.into(), NotifyLevel::Info)
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Action::Notify(text.into(), NotifyLevel::Warn)
    }
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
}
