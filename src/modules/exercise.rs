//! Exercise tracker - today's workout plan, timer toggle and weekly stats

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;
use tracing::info;

use crate::core::{Action, Context, Module, Section};
use crate::domain::exercise::{
    summarize, Difficulty, Exercise, ExerciseCategory, Intensity, ProgressSummary, RecentWorkout,
    TimerState, WeeklyStats, WorkoutPlan,
};
use crate::domain::Tone;
use crate::ui::widgets::MiniSparkline;
use crate::ui::{card, theme};

pub fn todays_workout() -> WorkoutPlan {
    let exercise = |id, name, category, duration_min, intensity, calories, completed| Exercise {
        id,
        name,
        category,
        duration_min,
        intensity,
        calories,
        completed,
        date: "2024-01-15",
    };
    WorkoutPlan {
        id: 1,
        name: "Cardiac Recovery - Week 3",
        description: "Low-impact cardiovascular exercises designed for heart health recovery",
        difficulty: Difficulty::Intermediate,
        total_duration_min: 45,
        exercises: vec![
            exercise(1, "Warm-up Walk", ExerciseCategory::Cardio, 5, Intensity::Low, 25, true),
            exercise(
                2,
                "Stationary Cycling",
                ExerciseCategory::Cardio,
                20,
                Intensity::Moderate,
                120,
                true,
            ),
            exercise(3, "Arm Exercises", ExerciseCategory::Strength, 10, Intensity::Low, 40, false),
            exercise(
                4,
                "Cool-down Stretches",
                ExerciseCategory::Flexibility,
                10,
                Intensity::Low,
                20,
                false,
            ),
        ],
    }
}

pub fn weekly_stats() -> WeeklyStats {
    WeeklyStats {
        total_minutes: 127,
        goal_minutes: 150,
        workouts_completed: 5,
        calories_burned: 890,
        streak_days: 5,
    }
}

pub fn recent_workouts() -> Vec<RecentWorkout> {
    vec![
        RecentWorkout {
            date: "2024-01-14",
            duration_min: 30,
            label: "Cardio Recovery",
            calories: 180,
        },
        RecentWorkout {
            date: "2024-01-13",
            duration_min: 25,
            label: "Flexibility Focus",
            calories: 95,
        },
        RecentWorkout {
            date: "2024-01-12",
            duration_min: 35,
            label: "Low-Impact Strength",
            calories: 210,
        },
    ]
}

pub struct ExerciseTracker {
    plan: WorkoutPlan,
    stats: WeeklyStats,
    recent: Vec<RecentWorkout>,
    cursor: usize,
    timer: TimerState,
    /// Reset on every start; nothing advances it
    elapsed_secs: u32,
    /// Exercises marked complete in this session, on top of the plan's flags
    marked_complete: BTreeSet<u32>,
}

impl Default for ExerciseTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseTracker {
    pub fn new() -> Self {
        Self {
            plan: todays_workout(),
            stats: weekly_stats(),
            recent: recent_workouts(),
            cursor: 0,
            timer: TimerState::Idle,
            elapsed_secs: 0,
            marked_complete: BTreeSet::new(),
        }
    }

    pub fn plan(&self) -> &WorkoutPlan {
        &self.plan
    }

    pub fn timer(&self) -> TimerState {
        self.timer
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn selected(&self) -> Option<&Exercise> {
        self.plan.exercises.get(self.cursor)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.plan.exercises.len() {
            self.cursor = index;
        }
    }

    pub fn is_completed(&self, exercise: &Exercise) -> bool {
        exercise.completed || self.marked_complete.contains(&exercise.id)
    }

    /// Recomputed from the effective completed flags on every call
    pub fn progress(&self) -> ProgressSummary {
        summarize(
            self.plan
                .exercises
                .iter()
                .map(|exercise| (exercise, self.is_completed(exercise))),
        )
    }

    /// Start/stop the timer for an exercise; completed exercises have no timer
    pub fn toggle_timer(&mut self, exercise_id: u32) -> Action {
        let Some(exercise) = self.plan.exercises.iter().find(|e| e.id == exercise_id) else {
            return Action::None;
        };
        if self.is_completed(exercise) {
            return Action::None;
        }
        let name = exercise.name;
        self.timer = self.timer.toggle(exercise_id);
        match self.timer {
            TimerState::Running { .. } => {
                self.elapsed_secs = 0;
                info!(exercise = name, "timer started");
                Action::info(format!("Timer started: {name}"))
            }
            TimerState::Idle => {
                info!(exercise = name, "timer stopped");
                Action::info(format!("Timer stopped: {name}"))
            }
        }
    }

    /// Flip the session-local completion mark; plan defaults stay untouched
    pub fn toggle_complete(&mut self, exercise_id: u32) -> Action {
        let Some(exercise) = self.plan.exercises.iter().find(|e| e.id == exercise_id) else {
            return Action::None;
        };
        if exercise.completed {
            return Action::None;
        }
        let name = exercise.name;
        if self.marked_complete.remove(&exercise_id) {
            info!(exercise = name, "completion mark cleared");
            return Action::info(format!("{name} marked incomplete"));
        }
        self.marked_complete.insert(exercise_id);
        if self.timer.is_running(exercise_id) {
            self.timer = TimerState::Idle;
        }
        info!(exercise = name, "exercise marked complete");
        Action::info(format!("{name} completed"))
    }
}

impl Module for ExerciseTracker {
    fn section(&self) -> Section {
        Section::Exercise
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        let len = self.plan.exercises.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Char('s') | KeyCode::Char(' ') => match self.selected().map(|e| e.id) {
                Some(id) => self.toggle_timer(id),
                None => Action::None,
            },
            KeyCode::Char('c') => match self.selected().map(|e| e.id) {
                Some(id) => self.toggle_complete(id),
                None => Action::None,
            },
            KeyCode::Char('i') => match self.selected() {
                Some(exercise) => {
                    info!(exercise = exercise.name, "instructions requested");
                    Action::info(format!("Instructions for {} coming soon", exercise.name))
                }
                None => Action::None,
            },
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
                Line::from(Span::styled("Exercise Log", theme::heading())),
                Line::from(Span::styled(
                    "Track your cardiac rehabilitation progress",
                    theme::muted(),
                )),
            ]),
            rows[0],
        );

        self.render_weekly(frame, rows[1]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
            .split(rows[2]);
        self.render_plan(frame, columns[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(columns[1]);
        self.render_today(frame, side[0]);
        self.render_recent(frame, side[1]);
    }

    fn key_hints(&self) -> &'static str {
        "j/k exercise  s start/stop timer  c mark complete  i instructions"
    }
}

impl ExerciseTracker {
    fn render_weekly(&self, frame: &mut Frame, area: Rect) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
            ])
            .split(area);

        let goal = card("Weekly Goal").border_style(theme::tone_style(Tone::Success));
        let inner = goal.inner(cards[0]);
        frame.render_widget(goal, cards[0]);
        let goal_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    self.stats.total_minutes.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("/{}min", self.stats.goal_minutes), theme::muted()),
            ])),
            goal_rows[0],
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(theme::tone_style(Tone::Success))
                .ratio(self.stats.goal_ratio()),
            goal_rows[1],
        );

        let stat = |title: &'static str, value: u32, caption: &'static str, tone: Tone| {
            Paragraph::new(vec![
                Line::from(Span::styled(
                    value.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(caption, theme::muted())),
            ])
            .block(card(title).border_style(theme::tone_style(tone)))
        };
        frame.render_widget(
            stat(
                "Workouts",
                self.stats.workouts_completed,
                "This week",
                Tone::Primary,
            ),
            cards[1],
        );
        frame.render_widget(
            stat(
                "Calories",
                self.stats.calories_burned,
                "Burned this week",
                Tone::Secondary,
            ),
            cards[2],
        );
        frame.render_widget(
            stat("Streak", self.stats.streak_days, "Days active", Tone::Accent),
            cards[3],
        );
    }

    fn render_plan(&self, frame: &mut Frame, area: Rect) {
        let block = card(self.plan.name);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let progress = self.progress();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(self.plan.description, theme::muted())),
                Line::from(vec![
                    Span::styled(
                        format!("{}% ", progress.percent()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("Complete", theme::muted()),
                    Span::styled(
                        format!(
                            "  · {} · {} min",
                            self.plan.difficulty.label(),
                            self.plan.total_duration_min
                        ),
                        theme::muted(),
                    ),
                ]),
            ]),
            rows[0],
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(theme::tone_style(Tone::Primary))
                .percent(progress.percent().min(100))
                .label(""),
            rows[1],
        );

        let mut lines = Vec::new();
        for (idx, exercise) in self.plan.exercises.iter().enumerate() {
            lines.push(Line::from(""));
            lines.extend(self.exercise_lines(idx, exercise));
        }
        frame.render_widget(Paragraph::new(lines), rows[2]);
    }

    fn exercise_lines(&self, idx: usize, exercise: &Exercise) -> Vec<Line<'static>> {
        let done = self.is_completed(exercise);
        let marker = if idx == self.cursor { "▶ " } else { "  " };
        let name_style = if done {
            theme::tone_style(Tone::Success).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let mut head = vec![
            Span::styled(marker, theme::key()),
            Span::styled(exercise.name, name_style),
            Span::raw(" "),
            theme::badge(exercise.category.label(), exercise.category.tone()),
            Span::raw(" "),
            theme::badge(exercise.intensity.label(), exercise.intensity.tone()),
        ];
        if done {
            head.push(Span::raw(" "));
            head.push(theme::badge("✓ Completed", Tone::Success));
        }

        let details = Line::from(Span::styled(
            format!(
                "    ◷ {} min   ≈ {} cal",
                exercise.duration_min, exercise.calories
            ),
            theme::muted(),
        ));

        let mut controls = vec![Span::raw("    ")];
        if !done {
            if self.timer.is_running(exercise.id) {
                controls.push(Span::styled(
                    "[■ Stop Timer]",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ));
                controls.push(Span::styled(
                    format!(" {}:{:02}", self.elapsed_secs / 60, self.elapsed_secs % 60),
                    theme::muted(),
                ));
            } else {
                controls.push(theme::button("▶ Start", true));
            }
            controls.push(Span::raw(" "));
            controls.push(theme::button("Mark Complete", true));
            controls.push(Span::raw(" "));
        }
        controls.push(Span::styled("[View Instructions]", theme::muted()));

        vec![Line::from(head), details, Line::from(controls)]
    }

    fn render_today(&self, frame: &mut Frame, area: Rect) {
        let progress = self.progress();
        let lines = vec![
            Line::from(Span::styled(
                format!("{}/{}", progress.completed, progress.total),
                theme::tone_style(Tone::Primary).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Exercises completed", theme::muted())),
            Line::from(vec![
                Span::styled(
                    format!("{} ", progress.minutes),
                    theme::tone_style(Tone::Secondary).add_modifier(Modifier::BOLD),
                ),
                Span::styled("Minutes   ", theme::muted()),
                Span::styled(
                    format!("{} ", progress.calories),
                    theme::tone_style(Tone::Accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled("Calories", theme::muted()),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(card("Today's Progress")),
            area,
        );
    }

    fn render_recent(&self, frame: &mut Frame, area: Rect) {
        let block = card("Recent Sessions");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        // Oldest first so the newest session sits on the right.
        let durations: Vec<u32> = self.recent.iter().rev().map(|w| w.duration_min).collect();
        frame.render_widget(
            MiniSparkline::new(&durations).style(theme::tone_style(Tone::Accent)),
            rows[0],
        );

        let mut lines = Vec::new();
        for workout in &self.recent {
            lines.push(Line::from(vec![
                Span::raw(format!("{:<20}", workout.label)),
                Span::styled(
                    format!("{}min", workout.duration_min),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}  {} cal", workout.date, workout.calories),
                theme::muted(),
            )));
        }
        frame.render_widget(Paragraph::new(lines), rows[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_progress() {
        let tracker = ExerciseTracker::new();
        let progress = tracker.progress();
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.minutes, 25);
        assert_eq!(progress.calories, 145);
        assert_eq!(progress.percent(), 50);
    }

    #[test]
    fn test_timer_replaces_running_exercise() {
        let mut tracker = ExerciseTracker::new();
        tracker.toggle_timer(3);
        assert!(tracker.timer().is_running(3));

        tracker.toggle_timer(4);
        assert!(tracker.timer().is_running(4));
        assert!(!tracker.timer().is_running(3));
        assert_eq!(tracker.elapsed_secs(), 0);

        tracker.toggle_timer(4);
        assert_eq!(tracker.timer(), TimerState::Idle);
    }

    #[test]
    fn test_timer_ignores_completed_exercise() {
        let mut tracker = ExerciseTracker::new();
        assert_eq!(tracker.toggle_timer(1), Action::None);
        assert_eq!(tracker.timer(), TimerState::Idle);
    }

    #[test]
    fn test_mark_complete_updates_aggregates_without_touching_plan() {
        let mut tracker = ExerciseTracker::new();
        tracker.toggle_timer(3);
        tracker.toggle_complete(3);

        let progress = tracker.progress();
        assert_eq!(progress.completed, 3);
        assert_eq!(progress.minutes, 35);
        assert_eq!(progress.calories, 185);
        assert_eq!(progress.percent(), 75);
        assert_eq!(tracker.timer(), TimerState::Idle);
        assert!(!tracker.plan().exercises[2].completed);

        tracker.toggle_complete(3);
        assert_eq!(tracker.progress().completed, 2);
    }

    #[test]
    fn test_plan_defaults_cannot_be_unmarked() {
        let mut tracker = ExerciseTracker::new();
        assert_eq!(tracker.toggle_complete(1), Action::None);
        assert_eq!(tracker.progress().completed, 2);
    }
}
