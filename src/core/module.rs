//! Module trait implemented by every section view

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Context, Section};

/// A self-contained section view mounted by the router
pub trait Module {
    /// Section this view renders
    fn section(&self) -> Section;

    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action;

    /// Draw the view into the content area
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context);

    /// True while the view is editing text and wants every key
    fn captures_input(&self) -> bool {
        false
    }

    /// One-line key legend for the status bar
    fn key_hints(&self) -> &'static str {
        ""
    }
}
