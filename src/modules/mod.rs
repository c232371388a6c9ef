//! Section views
//!
//! Each view implements the Module trait and handles its own:
//! - Key input processing
//! - Sample data and local state
//! - Rendering
//!
//! Views:
//! - dashboard: welcome banner, weekly progress, upcoming visits, quick actions
//! - appointments: upcoming/recent visits and the schedule form
//! - exercise: workout plan, timer and weekly stats
//! - vitals: trend cards, reading entry and recent readings
//! - messages: conversations, thread and composer
//! - profile: placeholder

pub mod appointments;
pub mod dashboard;
pub mod exercise;
pub mod messages;
pub mod profile;
pub mod vitals;

pub use appointments::AppointmentScheduler;
pub use dashboard::Dashboard;
pub use exercise::ExerciseTracker;
pub use messages::SecureMessaging;
pub use profile::ProfilePlaceholder;
pub use vitals::VitalsMonitor;
