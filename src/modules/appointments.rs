//! Appointment scheduler - upcoming/past consultations and a booking form

use chrono::Duration;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use serde::Serialize;
use tracing::{info, warn};

use crate::core::{Action, Context, Module, Section};
use crate::domain::appointment::{
    format_time, parse_date, Appointment, AppointmentStatus, AvailableSlot,
};
use crate::domain::Tone;
use crate::ui::{card, theme};

pub const DEFAULT_DATE: &str = "2024-01-15";

pub const PROVIDERS: [&str; 3] = [
    "Dr. Martinez - Cardiologist",
    "Lisa Chen, RN - Cardiac Rehab",
    "Dr. Johnson - Cardiologist",
];

pub const APPOINTMENT_TYPES: [&str; 4] = [
    "Follow-up Consultation",
    "Exercise Program Review",
    "Medication Review",
    "General Check-up",
];

pub fn sample_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            provider: "Dr. Meet",
            specialty: "physiotherapist",
            kind: "Follow-up Consultation",
            date: "2024-01-15",
            time: "14:30",
            duration_min: 30,
            status: AppointmentStatus::Upcoming,
            meeting_link: Some("https://meet.cardiorehab.com/dr-martinez-123"),
        },
        Appointment {
            id: 2,
            provider: "Hethvi Soni, RN",
            specialty: "physiotherapist",
            kind: "Exercise Program Review",
            date: "2024-01-16",
            time: "10:00",
            duration_min: 45,
            status: AppointmentStatus::Upcoming,
            meeting_link: None,
        },
        Appointment {
            id: 3,
            provider: "Dr. Riya",
            specialty: "physiotherapist",
            kind: "Monthly Check-up",
            date: "2024-01-10",
            time: "09:15",
            duration_min: 30,
            status: AppointmentStatus::Completed,
            meeting_link: None,
        },
    ]
}

pub fn sample_slots() -> Vec<AvailableSlot> {
    [
        ("09:00", true),
        ("09:30", false),
        ("10:00", true),
        ("10:30", true),
        ("11:00", false),
        ("14:00", true),
        ("14:30", true),
        ("15:00", false),
        ("15:30", true),
    ]
    .into_iter()
    .map(|(time, available)| AvailableSlot { time, available })
    .collect()
}

/// What "Book Appointment" would submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub provider: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub date: String,
    pub time: &'static str,
}

pub struct AppointmentScheduler {
    appointments: Vec<Appointment>,
    slots: Vec<AvailableSlot>,
    selected_date: String,
    provider_index: usize,
    type_index: usize,
    slot_cursor: usize,
    selected_slot: Option<usize>,
}

impl Default for AppointmentScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentScheduler {
    pub fn new() -> Self {
        Self {
            appointments: sample_appointments(),
            slots: sample_slots(),
            selected_date: DEFAULT_DATE.to_string(),
            provider_index: 0,
            type_index: 0,
            slot_cursor: 0,
            selected_slot: None,
        }
    }

    /// Upcoming and in-session appointments
    pub fn upcoming(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| appointment.status.is_active())
    }

    /// Completed appointments
    pub fn history(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| appointment.status == AppointmentStatus::Completed)
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    pub fn provider(&self) -> &'static str {
        PROVIDERS[self.provider_index]
    }

    pub fn appointment_type(&self) -> &'static str {
        APPOINTMENT_TYPES[self.type_index]
    }

    pub fn selected_slot(&self) -> Option<&AvailableSlot> {
        self.selected_slot.and_then(|idx| self.slots.get(idx))
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.slots.len();
        if len == 0 {
            return;
        }
        self.slot_cursor = if forward {
            (self.slot_cursor + 1) % len
        } else {
            (self.slot_cursor + len - 1) % len
        };
    }

    /// Pick the slot under the cursor; unavailable slots are refused
    pub fn select_slot(&mut self) -> Action {
        let Some(slot) = self.slots.get(self.slot_cursor) else {
            return Action::None;
        };
        if !slot.available {
            return Action::warn(format!("{} is not available", format_time(slot.time)));
        }
        self.selected_slot = Some(self.slot_cursor);
        Action::None
    }

    pub fn shift_date(&mut self, days: i64) {
        if let Some(date) = parse_date(&self.selected_date)
            .and_then(|date| date.checked_add_signed(Duration::days(days)))
        {
            self.selected_date = date.format("%Y-%m-%d").to_string();
        }
    }

    pub fn cycle_provider(&mut self) {
        self.provider_index = (self.provider_index + 1) % PROVIDERS.len();
    }

    pub fn cycle_type(&mut self) {
        self.type_index = (self.type_index + 1) % APPOINTMENT_TYPES.len();
    }

    pub fn booking_request(&self) -> Option<BookingRequest> {
        self.selected_slot().map(|slot| BookingRequest {
            provider: self.provider(),
            kind: self.appointment_type(),
            date: self.selected_date.clone(),
            time: slot.time,
        })
    }

    /// Logs the would-be booking; nothing is added to the schedule
    pub fn book(&self) -> Action {
        let Some(request) = self.booking_request() else {
            return Action::warn("Pick an available time first");
        };
        match serde_json::to_string(&request) {
            Ok(payload) => info!(%payload, "booking requested"),
            Err(err) => warn!(error = %err, "failed to encode booking request"),
        }
        Action::info(format!(
            "Booking requested: {} on {} at {}",
            request.provider,
            request.date,
            format_time(request.time)
        ))
    }

    pub fn join_call(&self) -> Action {
        let Some(appointment) = self
            .upcoming()
            .find(|appointment| appointment.status == AppointmentStatus::Upcoming)
        else {
            return Action::None;
        };
        let link = appointment.meeting_link.unwrap_or("link pending");
        info!(provider = appointment.provider, link, "join call requested");
        Action::info(format!("Joining {}: {}", appointment.provider, link))
    }
}

impl Module for AppointmentScheduler {
    fn section(&self) -> Section {
        Section::Appointments
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(true);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(false);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select_slot(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.shift_date(1);
                Action::None
            }
            KeyCode::Char('-') => {
                self.shift_date(-1);
                Action::None
            }
            KeyCode::Char('p') => {
                self.cycle_provider();
                Action::None
            }
            KeyCode::Char('t') => {
                self.cycle_type();
                Action::None
            }
            KeyCode::Char('b') => self.book(),
            KeyCode::Char('v') => self.join_call(),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &Context) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Appointments", theme::heading())),
                Line::from(Span::styled(
                    "Manage your telehealth consultations",
                    theme::muted(),
                )),
            ]),
            rows[0],
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
            .split(rows[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(6)])
            .split(columns[0]);
        self.render_upcoming(frame, left[0]);
        self.render_history(frame, left[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(14), Constraint::Length(5)])
            .split(columns[1]);
        self.render_form(frame, right[0]);
        render_quick_actions(frame, right[1]);
    }

    fn key_hints(&self) -> &'static str {
        "j/k slot  enter pick  p provider  t type  +/- date  b book  v join"
    }
}

impl AppointmentScheduler {
    fn render_upcoming(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled("Your scheduled consultations", theme::muted())),
            Line::from(""),
        ];
        for appointment in self.upcoming() {
            lines.push(Line::from(vec![
                Span::styled(
                    appointment.provider,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                theme::badge(appointment.specialty, Tone::Muted),
                Span::raw(" "),
                theme::badge(appointment.status.badge(), appointment.status.tone()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", appointment.kind),
                theme::muted(),
            )));
            lines.push(Line::from(format!(
                "  ◷ {}  {} ({} min)",
                appointment.date,
                format_time(appointment.time),
                appointment.duration_min
            )));
            let mut controls = vec![Span::raw("  ")];
            match appointment.status {
                AppointmentStatus::Upcoming => {
                    controls.push(theme::button("Join Video Call", true));
                    controls.push(Span::raw(" "));
                    controls.push(theme::button("Call Provider", true));
                }
                AppointmentStatus::InProgress => {
                    controls.push(theme::button("Rejoin Session", true));
                }
                _ => {}
            }
            controls.push(Span::raw(" "));
            controls.push(theme::button("Reschedule", true));
            controls.push(Span::raw(" "));
            controls.push(Span::styled("[Cancel]", theme::tone_style(Tone::Destructive)));
            lines.push(Line::from(controls));
            lines.push(Line::from(""));
        }
        frame.render_widget(
            Paragraph::new(lines).block(card("◷ Upcoming Appointments")),
            area,
        );
    }

    fn render_history(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            "Your consultation history",
            theme::muted(),
        ))];
        for appointment in self.history() {
            lines.push(Line::from(vec![
                Span::styled(
                    appointment.provider,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                theme::badge(appointment.status.badge(), appointment.status.tone()),
                Span::raw(" "),
                theme::button("View Notes", true),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "  {} · {} at {}",
                    appointment.kind,
                    appointment.date,
                    format_time(appointment.time)
                ),
                theme::muted(),
            )));
        }
        frame.render_widget(
            Paragraph::new(lines).block(card("Recent Appointments")),
            area,
        );
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled("Book your next consultation", theme::muted())),
            Line::from(vec![
                Span::styled("Provider  ", theme::muted()),
                Span::raw(self.provider()),
                Span::styled("  p", theme::key()),
            ]),
            Line::from(vec![
                Span::styled("Type      ", theme::muted()),
                Span::raw(self.appointment_type()),
                Span::styled("  t", theme::key()),
            ]),
            Line::from(vec![
                Span::styled("Date      ", theme::muted()),
                Span::raw(self.selected_date.clone()),
                Span::styled("  +/-", theme::key()),
            ]),
            Line::from(Span::styled("Available Times", theme::muted())),
        ];

        for (row, pair) in self.slots.chunks(2).enumerate() {
            let mut spans = Vec::new();
            for (col, slot) in pair.iter().enumerate() {
                let idx = row * 2 + col;
                spans.push(self.slot_span(idx, slot));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(theme::button(
            "b Book Appointment",
            self.selected_slot.is_some(),
        )));

        frame.render_widget(Paragraph::new(lines).block(card("Schedule New")), area);
    }

    fn slot_span(&self, idx: usize, slot: &AvailableSlot) -> Span<'static> {
        let label = format!(" {:>8} ", format_time(slot.time));
        let mut style = if !slot.available {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
        } else if self.selected_slot == Some(idx) {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        if idx == self.slot_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Span::styled(label, style)
    }
}

fn render_quick_actions(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("☺ View Provider Profiles"),
        Line::from("◷ Set Appointment Reminders"),
        Line::from("▦ Sync with Calendar"),
    ];
    frame.render_widget(Paragraph::new(lines).block(card("Quick Actions")), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_partitions() {
        let scheduler = AppointmentScheduler::new();
        let upcoming: Vec<u32> = scheduler.upcoming().map(|a| a.id).collect();
        let history: Vec<u32> = scheduler.history().map(|a| a.id).collect();
        assert_eq!(upcoming, vec![1, 2]);
        assert_eq!(history, vec![3]);
    }

    #[test]
    fn test_unavailable_slot_is_refused() {
        let mut scheduler = AppointmentScheduler::new();
        scheduler.move_cursor(true); // 09:30, unavailable
        let action = scheduler.select_slot();
        assert!(matches!(action, Action::Notify(_, _)));
        assert!(scheduler.selected_slot().is_none());

        scheduler.move_cursor(true); // 10:00
        assert_eq!(scheduler.select_slot(), Action::None);
        assert_eq!(scheduler.selected_slot().map(|s| s.time), Some("10:00"));
    }

    #[test]
    fn test_cursor_wraps() {
        let mut scheduler = AppointmentScheduler::new();
        scheduler.move_cursor(false);
        scheduler.select_slot();
        assert_eq!(scheduler.selected_slot().map(|s| s.time), Some("15:30"));
    }

    #[test]
    fn test_shift_date_crosses_month() {
        let mut scheduler = AppointmentScheduler::new();
        for _ in 0..17 {
            scheduler.shift_date(1);
        }
        assert_eq!(scheduler.selected_date(), "2024-02-01");
        scheduler.shift_date(-1);
        assert_eq!(scheduler.selected_date(), "2024-01-31");
    }

    #[test]
    fn test_booking_requires_slot_and_is_inert() {
        let mut scheduler = AppointmentScheduler::new();
        assert!(scheduler.booking_request().is_none());
        assert_eq!(scheduler.book(), Action::warn("Pick an available time first"));

        scheduler.cycle_provider();
        scheduler.cycle_type();
        scheduler.select_slot();
        let request = scheduler.booking_request().expect("slot picked");
        assert_eq!(request.provider, "Lisa Chen, RN - Cardiac Rehab");
        assert_eq!(request.kind, "Exercise Program Review");
        assert_eq!(request.time, "09:00");

        scheduler.book();
        assert_eq!(scheduler.upcoming().count(), 2);
    }

    #[test]
    fn test_join_uses_meeting_link() {
        let scheduler = AppointmentScheduler::new();
        let action = scheduler.join_call();
        assert!(
            matches!(action, Action::Notify(text, _) if text.contains("meet.cardiorehab.com"))
        );
    }
}
