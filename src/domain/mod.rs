//! Sample-record types shown by the section views
//!
//! Every categorical field is a closed enum with a total lookup into a
//! display [`Tone`]. Raw strings that fail to parse render with
//! [`Tone::Muted`].

pub mod appointment;
pub mod exercise;
pub mod messaging;
pub mod vitals;

/// Semantic display colour, resolved to a terminal style by `ui::theme`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Destructive,
    Muted,
}
