use crossterm::event::KeyEvent;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::core::{Action, Context, Module, Section};
use crate::ui::{card, theme};

/// Account settings are not built yet; the section only shows its heading
#[derive(Debug, Default)]
pub struct ProfilePlaceholder;

impl Module for ProfilePlaceholder {
    fn section(&self) -> Section {
        Section::Profile
    }

    fn handle_key(&mut self, _key: KeyEvent, _ctx: &mut Context) -> Action {
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &Context) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("Profile Settings", theme::heading())),
            Line::from(Span::styled(
                "Manage your account and preferences",
                theme::muted(),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(card("Profile")),
            area,
        );
    }
}
