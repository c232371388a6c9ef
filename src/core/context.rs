//! Shared context passed to modules

use chrono::{Local, NaiveDateTime};

pub const DEFAULT_PATIENT_NAME: &str = "Sarah";

/// Read-mostly state every section view may consult
#[derive(Debug, Clone)]
pub struct Context {
    /// Name shown in the dashboard greeting
    pub patient_name: String,

    /// Wall clock used for relative timestamps, refreshed every tick
    pub now: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            patient_name: DEFAULT_PATIENT_NAME.to_string(),
            now: Local::now().naive_local(),
        }
    }
}

impl Context {
    pub fn new(patient_name: impl Into<String>, now: NaiveDateTime) -> Self {
        let patient_name = patient_name.into();
        let patient_name = if patient_name.trim().is_empty() {
            DEFAULT_PATIENT_NAME.to_string()
        } else {
            patient_name
        };
        Self { patient_name, now }
    }

    pub fn refresh_clock(&mut self) {
        self.now = Local::now().naive_local();
    }
}
