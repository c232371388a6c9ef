//! Dashboard summary - greeting, weekly progress and shortcuts

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;
use tracing::info;

use crate::core::{Action, Context, Module, Section};
use crate::domain::appointment::status_tone;
use crate::domain::exercise::WeeklyStats;
use crate::domain::Tone;
use crate::ui::{card, theme};

/// Appointment as listed on the dashboard; status is a free-form label
#[derive(Debug, Clone)]
pub struct UpcomingVisit {
    pub id: u32,
    pub provider: &'static str,
    pub kind: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct RecentVital {
    pub label: &'static str,
    pub value: &'static str,
    pub unit: &'static str,
    pub badge: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy)]
pub struct QuickAction {
    pub label: &'static str,
    pub target: Section,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Start Video Call",
        target: Section::Appointments,
    },
    QuickAction {
        label: "Log Exercise",
        target: Section::Exercise,
    },
    QuickAction {
        label: "Send Message",
        target: Section::Messages,
    },
    QuickAction {
        label: "Track Vitals",
        target: Section::Vitals,
    },
];

pub fn upcoming_visits() -> Vec<UpcomingVisit> {
    vec![
        UpcomingVisit {
            id: 1,
            provider: "Dr. Martinez",
            kind: "Cardiology Follow-up",
            date: "Today",
            time: "2:30 PM",
            status: "upcoming",
        },
        UpcomingVisit {
            id: 2,
            provider: "Lisa Chen, RN",
            kind: "Exercise Review",
            date: "Tomorrow",
            time: "10:00 AM",
            status: "scheduled",
        },
    ]
}

pub fn recent_vitals() -> [RecentVital; 3] {
    [
        RecentVital {
            label: "Heart Rate",
            value: "68",
            unit: "bpm",
            badge: "Normal",
            tone: Tone::Secondary,
        },
        RecentVital {
            label: "Blood Pressure",
            value: "118/75",
            unit: "mmHg",
            badge: "Normal",
            tone: Tone::Primary,
        },
        RecentVital {
            label: "Oxygen Saturation",
            value: "98",
            unit: "%",
            badge: "Excellent",
            tone: Tone::Accent,
        },
    ]
}

pub fn weekly_progress() -> WeeklyStats {
    WeeklyStats {
        total_minutes: 127,
        goal_minutes: 150,
        workouts_completed: 5,
        calories_burned: 890,
        streak_days: 5,
    }
}

pub struct Dashboard {
    visits: Vec<UpcomingVisit>,
    vitals: [RecentVital; 3],
    progress: WeeklyStats,
    selected_action: usize,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            visits: upcoming_visits(),
            vitals: recent_vitals(),
            progress: weekly_progress(),
            selected_action: 0,
        }
    }

    pub fn selected_action(&self) -> QuickAction {
        QUICK_ACTIONS[self.selected_action]
    }

    pub fn next_action(&mut self) {
        self.selected_action = (self.selected_action + 1) % QUICK_ACTIONS.len();
    }

    pub fn prev_action(&mut self) {
        self.selected_action =
            (self.selected_action + QUICK_ACTIONS.len() - 1) % QUICK_ACTIONS.len();
    }
}

impl Module for Dashboard {
    fn section(&self) -> Section {
        Section::Dashboard
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                self.next_action();
                Action::None
            }
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.prev_action();
                Action::None
            }
            KeyCode::Enter => {
                let action = self.selected_action();
                info!(action = action.label, section = %action.target, "quick action");
                Action::Navigate(action.target)
            }
            KeyCode::Char('v') => match self.visits.first() {
                Some(visit) => {
                    info!(provider = visit.provider, "join call requested");
                    Action::info(format!("Joining video call with {}…", visit.provider))
                }
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(6),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(area);

        self.render_banner(frame, rows[0], ctx);

        let stats = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[1]);
        self.render_weekly_progress(frame, stats[0]);
        self.render_next_appointment(frame, stats[1]);
        self.render_heart_rate(frame, stats[2]);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);
        self.render_upcoming(frame, main[0]);
        self.render_vitals(frame, main[1]);

        self.render_quick_actions(frame, rows[3]);
    }

    fn key_hints(&self) -> &'static str {
        "←/→ quick action  enter open  v join call"
    }
}

impl Dashboard {
    fn render_banner(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("Welcome back, {}!", ctx.patient_name),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  ♥", Style::default().fg(Color::Red)),
            ]),
            Line::from("Let's continue your heart health journey"),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_weekly_progress(&self, frame: &mut Frame, area: Rect) {
        let block = card("Weekly Progress").border_style(theme::tone_style(Tone::Success));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("Exercise Minutes "),
                Span::styled(
                    format!(
                        "{}/{}",
                        self.progress.total_minutes, self.progress.goal_minutes
                    ),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])),
            rows[0],
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(theme::tone_style(Tone::Success))
                .ratio(self.progress.goal_ratio()),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("★ ", theme::tone_style(Tone::Warning)),
                Span::styled(
                    format!("{} day streak!", self.progress.streak_days),
                    theme::muted(),
                ),
            ])),
            rows[2],
        );
    }

    fn render_next_appointment(&self, frame: &mut Frame, area: Rect) {
        let block = card("Next Appointment").border_style(theme::tone_style(Tone::Primary));
        let lines = match self.visits.first() {
            Some(visit) => vec![
                Line::from(Span::styled(
                    visit.provider,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(visit.kind, theme::muted())),
                Line::from(vec![
                    theme::badge(format!("{} at {}", visit.date, visit.time), Tone::Muted),
                    Span::raw(" "),
                    theme::button("v Join", true),
                ]),
            ],
            None => vec![Line::from(Span::styled("Nothing scheduled", theme::muted()))],
        };
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_heart_rate(&self, frame: &mut Frame, area: Rect) {
        let block = card("Heart Rate").border_style(theme::tone_style(Tone::Secondary));
        let heart = self.vitals[0];
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    heart.value,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {}", heart.unit), theme::muted()),
            ]),
            Line::from(vec![
                theme::badge(heart.badge, Tone::Success),
                Span::styled(" Last reading: 2 hours ago", theme::muted()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_upcoming(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled("Your scheduled telehealth sessions", theme::muted())),
            Line::from(""),
        ];
        for visit in &self.visits {
            let mut head = vec![
                Span::styled(visit.provider, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                theme::badge(visit.status, status_tone(visit.status)),
            ];
            if visit.status == "upcoming" {
                head.push(Span::raw(" "));
                head.push(theme::button("Join Now", true));
            }
            head.push(Span::raw(" "));
            head.push(theme::button("Details", true));
            lines.push(Line::from(head));
            lines.push(Line::from(Span::styled(format!("  {}", visit.kind), theme::muted())));
            lines.push(Line::from(format!("  {} at {}", visit.date, visit.time)));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(theme::button("Schedule New Appointment", true)));

        let block = card("◷ Upcoming Appointments");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_vitals(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled("Your latest health measurements", theme::muted())),
            Line::from(""),
        ];
        for vital in &self.vitals {
            lines.push(Line::from(vec![
                Span::raw(format!("{:<18}", vital.label)),
                Span::styled(
                    format!("{:>7}", vital.value),
                    theme::tone_style(vital.tone).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {:<5} ", vital.unit)),
                theme::badge(vital.badge, Tone::Success),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(theme::button("Record New Vitals", true)));

        let block = card("∿ Recent Vital Signs");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_quick_actions(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (idx, action) in QUICK_ACTIONS.iter().enumerate() {
            let style = if idx == self.selected_action {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!(" {} ", action.label), style));
            spans.push(Span::raw("  "));
        }
        let block = card("Quick Actions");
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quick_action_cycle_and_navigate() {
        let mut dashboard = Dashboard::new();
        let mut ctx = Context::default();
        assert_eq!(dashboard.selected_action().target, Section::Appointments);

        dashboard.handle_key(press(KeyCode::Right), &mut ctx);
        dashboard.handle_key(press(KeyCode::Right), &mut ctx);
        assert_eq!(
            dashboard.handle_key(press(KeyCode::Enter), &mut ctx),
            Action::Navigate(Section::Messages)
        );

        dashboard.handle_key(press(KeyCode::Left), &mut ctx);
        dashboard.handle_key(press(KeyCode::Left), &mut ctx);
        dashboard.handle_key(press(KeyCode::Left), &mut ctx);
        assert_eq!(dashboard.selected_action().target, Section::Vitals);
    }

    #[test]
    fn test_join_is_inert_notification() {
        let mut dashboard = Dashboard::new();
        let mut ctx = Context::default();
        let action = dashboard.handle_key(press(KeyCode::Char('v')), &mut ctx);
        assert!(matches!(action, Action::Notify(text, _) if text.contains("Dr. Martinez")));
    }

    #[test]
    fn test_sample_statuses() {
        let visits = upcoming_visits();
        assert_eq!(status_tone(visits[0].status), Tone::Primary);
        assert_eq!(status_tone(visits[1].status), Tone::Muted);
    }
}
