//! Vital signs monitor: trend cards, reading entry form and recent readings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use serde::Serialize;
use tracing::{info, warn};

use crate::core::{Action, Context, Module, Section};
use crate::domain::vitals::{
    format_reading_datetime, format_reading_time, trend_tone, TrendDirection, VitalKind,
    VitalReading, VitalStatus, VitalTrend,
};
use crate::domain::Tone;
use crate::ui::{card, theme};

pub fn vital_trends() -> [VitalTrend; 4] {
    [
        VitalTrend {
            kind: VitalKind::HeartRate,
            title: "Heart Rate",
            current: "68",
            unit: "bpm",
            badge: "Normal",
            direction: TrendDirection::Down,
            change: "4 from last reading",
        },
        VitalTrend {
            kind: VitalKind::BloodPressure,
            title: "Blood Pressure",
            current: "118/75",
            unit: "mmHg",
            badge: "Normal",
            direction: TrendDirection::Down,
            change: "Improved",
        },
        VitalTrend {
            kind: VitalKind::OxygenSaturation,
            title: "Oxygen Sat",
            current: "98",
            unit: "%",
            badge: "Excellent",
            direction: TrendDirection::Up,
            change: "+1% from last",
        },
        VitalTrend {
            kind: VitalKind::Temperature,
            title: "Temperature",
            current: "98.6",
            unit: "°F",
            badge: "Normal",
            direction: TrendDirection::Up,
            change: "+0.2° from morning",
        },
    ]
}

pub fn recent_readings() -> Vec<VitalReading> {
    let reading = |id, kind, value, unit, timestamp| VitalReading {
        id,
        kind,
        value,
        unit,
        timestamp,
        status: VitalStatus::Normal,
        notes: None,
    };
    vec![
        reading(1, VitalKind::HeartRate, "68", "bpm", "2024-01-15T14:30:00"),
        reading(2, VitalKind::BloodPressure, "118/75", "mmHg", "2024-01-15T14:25:00"),
        reading(3, VitalKind::OxygenSaturation, "98", "%", "2024-01-15T14:20:00"),
        reading(4, VitalKind::Temperature, "98.6", "°F", "2024-01-15T09:00:00"),
    ]
}

/// Editable input of the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    HeartRate,
    Systolic,
    Diastolic,
    Oxygen,
    Temperature,
}

/// One row of the entry form, saved as a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    HeartRate,
    BloodPressure,
    Oxygen,
    Temperature,
}

impl FormRow {
    pub const ALL: [FormRow; 4] = [
        FormRow::HeartRate,
        FormRow::BloodPressure,
        FormRow::Oxygen,
        FormRow::Temperature,
    ];

    pub fn kind(&self) -> VitalKind {
        match self {
            FormRow::HeartRate => VitalKind::HeartRate,
            FormRow::BloodPressure => VitalKind::BloodPressure,
            FormRow::Oxygen => VitalKind::OxygenSaturation,
            FormRow::Temperature => VitalKind::Temperature,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormRow::HeartRate => "Heart Rate (bpm)",
            FormRow::BloodPressure => "Blood Pressure",
            FormRow::Oxygen => "Oxygen Saturation (%)",
            FormRow::Temperature => "Temperature (°F)",
        }
    }

    /// Every field here must be filled before the row can be saved
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormRow::HeartRate => &[Field::HeartRate],
            FormRow::BloodPressure => &[Field::Systolic, Field::Diastolic],
            FormRow::Oxygen => &[Field::Oxygen],
            FormRow::Temperature => &[Field::Temperature],
        }
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::HeartRate => "Enter heart rate",
        Field::Systolic => "Systolic",
        Field::Diastolic => "Diastolic",
        Field::Oxygen => "Enter SpO2",
        Field::Temperature => "Enter temperature",
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VitalInputs {
    pub heart_rate: String,
    pub systolic_bp: String,
    pub diastolic_bp: String,
    pub oxygen_saturation: String,
    pub temperature: String,
    /// Tracked alongside the others but has no form row
    pub weight: String,
}

impl VitalInputs {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::HeartRate => &self.heart_rate,
            Field::Systolic => &self.systolic_bp,
            Field::Diastolic => &self.diastolic_bp,
            Field::Oxygen => &self.oxygen_saturation,
            Field::Temperature => &self.temperature,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::HeartRate => &mut self.heart_rate,
            Field::Systolic => &mut self.systolic_bp,
            Field::Diastolic => &mut self.diastolic_bp,
            Field::Oxygen => &mut self.oxygen_saturation,
            Field::Temperature => &mut self.temperature,
        }
    }

    pub fn can_save(&self, row: FormRow) -> bool {
        row.fields().iter().all(|field| !self.get(*field).is_empty())
    }

    fn clear(&mut self, row: FormRow) {
        for field in row.fields() {
            self.get_mut(*field).clear();
        }
    }
}

#[derive(Serialize)]
struct SavedReading<'a> {
    kind: VitalKind,
    inputs: &'a VitalInputs,
}

pub struct VitalsMonitor {
    trends: [VitalTrend; 4],
    readings: Vec<VitalReading>,
    inputs: VitalInputs,
    row: usize,
    active_input: Option<Field>,
}

impl Default for VitalsMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl VitalsMonitor {
    pub fn new() -> Self {
        Self {
            trends: vital_trends(),
            readings: recent_readings(),
            inputs: VitalInputs::default(),
            row: 0,
            active_input: None,
        }
    }

    pub fn inputs(&self) -> &VitalInputs {
        &self.inputs
    }

    pub fn active_input(&self) -> Option<Field> {
        self.active_input
    }

    pub fn focused_row(&self) -> FormRow {
        FormRow::ALL[self.row.min(FormRow::ALL.len() - 1)]
    }

    pub fn focus_row(&mut self, row: FormRow) {
        self.row = FormRow::ALL.iter().position(|r| *r == row).unwrap_or(0);
        self.active_input = None;
    }

    pub fn start_editing(&mut self) {
        self.active_input = self.focused_row().fields().first().copied();
    }

    pub fn type_char(&mut self, ch: char) {
        if let Some(field) = self.active_input {
            if ch.is_ascii_digit() || ch == '.' {
                self.inputs.get_mut(field).push(ch);
            }
        }
    }

    /// Log the would-be reading and reset the row; nothing is recorded
    pub fn save(&mut self) -> Action {
        let row = self.focused_row();
        if !self.inputs.can_save(row) {
            return Action::warn(format!("Enter {} before saving", row.kind().label()));
        }
        let saved = SavedReading {
            kind: row.kind(),
            inputs: &self.inputs,
        };
        match serde_json::to_string(&saved) {
            Ok(payload) => info!(%payload, "vital reading saved"),
            Err(err) => warn!(%err, "failed to encode vital reading"),
        }
        self.inputs.clear(row);
        self.active_input = None;
        Action::info(format!("Saved {} reading", row.kind().label()))
    }

    fn handle_editing_key(&mut self, key: KeyEvent, field: Field) -> Action {
        match key.code {
            KeyCode::Esc => self.active_input = None,
            KeyCode::Enter => return self.save(),
            KeyCode::Backspace => {
                self.inputs.get_mut(field).pop();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.active_input = Some(match field {
                    Field::Systolic => Field::Diastolic,
                    Field::Diastolic => Field::Systolic,
                    other => other,
                });
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.type_char(ch)
            }
            _ => {}
        }
        Action::None
    }
}

impl Module for VitalsMonitor {
    fn section(&self) -> Section {
        Section::Vitals
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        if let Some(field) = self.active_input {
            return self.handle_editing_key(key, field);
        }
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.row + 1 < FormRow::ALL.len() {
                    self.row += 1;
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.row = self.row.saturating_sub(1);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                self.start_editing();
                Action::None
            }
            KeyCode::Char('h') => {
                info!("full reading history requested");
                Action::info("Full history is not available yet")
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &Context) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Vital Signs", theme::heading())),
                Line::from(Span::styled(
                    "Monitor and track your health metrics",
                    theme::muted(),
                )),
            ]),
            rows[0],
        );

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[1]);
        for (trend, slot) in self.trends.iter().zip(cards.iter()) {
            render_trend(frame, *slot, trend);
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
            .split(rows[2]);
        self.render_form(frame, columns[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(columns[1]);
        self.render_readings(frame, side[0]);
        render_alerts(frame, side[1]);
    }

    fn captures_input(&self) -> bool {
        self.active_input.is_some()
    }

    fn key_hints(&self) -> &'static str {
        if self.active_input.is_some() {
            "digits edit  Tab systolic/diastolic  Enter save  Esc stop editing"
        } else {
            "j/k row  Enter edit  h history"
        }
    }
}

fn trend_accent(kind: VitalKind) -> Tone {
    match kind {
        VitalKind::HeartRate => Tone::Secondary,
        VitalKind::BloodPressure => Tone::Primary,
        VitalKind::OxygenSaturation => Tone::Accent,
        VitalKind::Temperature | VitalKind::Weight => Tone::Warning,
    }
}

fn render_trend(frame: &mut Frame, area: Rect, trend: &VitalTrend) {
    let accent = trend_accent(trend.kind);
    let block = card(trend.title).border_style(theme::tone_style(accent));
    let lines = vec![
        Line::from(vec![
            Span::styled(
                trend.current,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}  ", trend.unit), theme::muted()),
            theme::badge(trend.badge, VitalStatus::Normal.tone()),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} ", trend.direction.glyph()),
                theme::tone_style(trend_tone(trend.kind, trend.direction)),
            ),
            Span::styled(trend.change, theme::muted()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

impl VitalsMonitor {
    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let block = card("+ Record New Readings");
        let focused = self.focused_row();
        let mut lines = vec![
            Line::from(Span::styled(
                "Enter your latest vital sign measurements",
                theme::muted(),
            )),
            Line::from(""),
        ];

        for row in FormRow::ALL {
            let is_focused = row == focused;
            let marker = if is_focused { "▶ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker, theme::key()),
                Span::styled(
                    format!("{} ", row.kind().icon()),
                    theme::tone_style(trend_accent(row.kind())),
                ),
                Span::styled(
                    row.label(),
                    if is_focused {
                        theme::selected()
                    } else {
                        Style::default()
                    },
                ),
            ]));

            let mut inputs = vec![Span::raw("    ")];
            for field in row.fields() {
                inputs.push(self.input_span(*field));
                inputs.push(Span::raw(" "));
            }
            inputs.push(theme::button("Save", self.inputs.can_save(row)));
            lines.push(Line::from(inputs));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("⚠ ", theme::tone_style(Tone::Warning)),
            Span::styled(
                "Recording Guidelines",
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            "  Record your vitals at the same time daily for consistency.",
            theme::muted(),
        )));
        lines.push(Line::from(Span::styled(
            "  Contact your care team immediately if you notice unusual readings or symptoms.",
            theme::muted(),
        )));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn input_span(&self, field: Field) -> Span<'static> {
        let value = self.inputs.get(field);
        let editing = self.active_input == Some(field);
        let text = match (value.is_empty(), editing) {
            (true, false) => format!("[{:<18}]", placeholder(field)),
            (_, true) => format!("[{:<18}]", format!("{value}▏")),
            (false, false) => format!("[{value:<18}]"),
        };
        let style = if editing {
            theme::selected()
        } else if value.is_empty() {
            theme::muted()
        } else {
            Style::default()
        };
        Span::styled(text, style)
    }

    fn render_readings(&self, frame: &mut Frame, area: Rect) {
        let block = card("Recent Readings");
        let mut lines = vec![Line::from(Span::styled(
            "Your latest measurements",
            theme::muted(),
        ))];
        for reading in &self.readings {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", reading.kind.icon()), theme::muted()),
                Span::styled(
                    capitalize(reading.kind.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    reading.value,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {} ", reading.unit), theme::muted()),
                theme::badge(reading.status.label(), reading.status.tone()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", format_reading_time(reading.timestamp)),
                theme::muted(),
            )));
        }
        if let Some(latest) = self.readings.first() {
            lines.push(Line::from(Span::styled(
                format!("Last entry {}", format_reading_datetime(latest.timestamp)),
                theme::muted(),
            )));
        }
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn render_alerts(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("✓ ", theme::tone_style(Tone::Success)),
            Span::styled(
                "All readings normal",
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled("  Keep up the great work!", theme::muted())),
        Line::from(vec![
            Span::styled("♥ ", theme::tone_style(Tone::Primary)),
            Span::styled("Reminder", Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            "  Take evening medication at 8 PM",
            theme::muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(card("Health Alerts")), area);
}

fn capitalize(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
