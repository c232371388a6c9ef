use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use tracing::warn;

use crate::core::{parse_command, Action, Command, Context, NotifyLevel, Section};
use crate::router::Router;
use crate::ui::layout;
use crate::ui::nav::NavPanel;

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct CommandState {
    pub input: String,
}

pub struct App {
    pub ctx: Context,
    pub router: Router,
    pub nav: NavPanel,
    pub input_mode: InputMode,
    pub command: CommandState,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Context::default(), Section::default())
    }
}

impl App {
    pub fn new(ctx: Context, initial: Section) -> Self {
        Self {
            ctx,
            router: Router::new(initial),
            nav: NavPanel::new(),
            input_mode: InputMode::Normal,
            command: CommandState::default(),
            status: None,
            help_open: false,
            should_quit: false,
        }
    }

    pub fn active_section(&self) -> Section {
        self.router.active()
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        self.ctx.refresh_clock();
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn select_section(&mut self, section: Section) {
        self.router.select(section);
    }

    /// Route one key press: shell keys first unless the view is taking text
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.input_mode == InputMode::Command {
            self.handle_command_key(key);
            return;
        }

        if self.router.view().captures_input() {
            self.forward_to_view(key);
            return;
        }

        if self.help_open {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.help_open = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.help_open = true,
            KeyCode::Char(':') => {
                self.input_mode = InputMode::Command;
                self.command.input.clear();
            }
            KeyCode::Char('m') => self.nav.toggle_collapsed(),
            KeyCode::Char('[') => self.select_section(self.active_section().prev()),
            KeyCode::Char(']') => self.select_section(self.active_section().next()),
            KeyCode::Char(ch) if Section::from_shortcut(ch).is_some() => {
                if let Some(section) = Section::from_shortcut(ch) {
                    self.select_section(section);
                }
            }
            _ => self.forward_to_view(key),
        }
    }

    /// Left click inside a frame of the given size
    pub fn handle_click(&mut self, size: Rect, column: u16, row: u16) {
        if self.help_open || self.input_mode == InputMode::Command {
            return;
        }
        let areas = layout::areas(size, self.nav.is_collapsed());
        if let Some(section) = self
            .nav
            .index_at(areas.nav, column, row)
            .and_then(|idx| self.nav.pick(idx))
        {
            self.select_section(section);
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(section) => self.select_section(section),
            Action::Notify(text, level) => self.set_status(text, level.into()),
        }
    }

    pub fn execute_command(&mut self, cmd: &Command) {
        match cmd {
            Command::Open(section) => self.select_section(*section),
            Command::Goto(id) => {
                let section = self.router.select_id(id);
                if id.parse::<Section>().is_err() {
                    self.set_status(
                        format!("Unknown section `{id}`, showing {}", section.title()),
                        StatusLevel::Warn,
                    );
                }
            }
            Command::Menu => self.nav.toggle_collapsed(),
            Command::Help => self.help_open = true,
            Command::Quit => self.should_quit = true,
            Command::Unknown(input) => {
                warn!(command = %input, "unknown command");
                self.set_status(format!("Unknown command: {input}"), StatusLevel::Error);
            }
        }
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = std::mem::take(&mut self.command.input);
        self.input_mode = InputMode::Normal;
        if input.trim().is_empty() {
            return;
        }
        self.execute_command(&parse_command(&input));
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.exit_command(),
            KeyCode::Enter => self.apply_command(),
            KeyCode::Backspace => {
                self.command.input.pop();
            }
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return;
                }
                self.command.input.push(ch);
            }
            _ => {}
        }
    }

    fn forward_to_view(&mut self, key: KeyEvent) {
        let action = self.router.view_mut().handle_key(key, &mut self.ctx);
        self.apply_action(action);
    }
}
