//! Navigation panel: the fixed section list plus a local collapse toggle

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::core::Section;
use crate::ui::theme;

#[derive(Debug, Clone, Default)]
pub struct NavPanel {
    collapsed: bool,
}

impl NavPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Section behind the n-th entry
    pub fn pick(&self, index: usize) -> Option<Section> {
        Section::ALL.get(index).copied()
    }

    /// Brand, entry list and footer rows inside the panel border
    fn regions(&self, area: Rect) -> [Rect; 3] {
        let inner = panel_block().inner(area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(if self.collapsed { 0 } else { 3 }),
            ])
            .split(inner);
        [chunks[0], chunks[1], chunks[2]]
    }

    /// Entry under a terminal cell, given the panel's outer area
    pub fn index_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        let [_, entries, _] = self.regions(area);
        let inside = column >= entries.x
            && column < entries.x + entries.width
            && row >= entries.y
            && row < entries.y + entries.height;
        if !inside {
            return None;
        }
        let item_height = if self.collapsed { 1 } else { 2 };
        let index = ((row - entries.y) / item_height) as usize;
        (index < Section::ALL.len()).then_some(index)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, active: Section) {
        let [brand, entries, footer] = self.regions(area);
        f.render_widget(panel_block(), area);

        self.render_brand(f, brand);
        self.render_entries(f, entries, active);
        if !self.collapsed {
            render_system_status(f, footer);
        }
    }

    fn render_brand(&self, f: &mut Frame, area: Rect) {
        let lines = if self.collapsed {
            vec![Line::from(Span::styled(" ≡", theme::key()))]
        } else {
            vec![
                Line::from(vec![
                    Span::styled(" ♥ ", Style::default().fg(Color::Red)),
                    Span::styled(
                        "CardioRehab",
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("   m≡", theme::muted()),
                ]),
                Line::from(Span::styled("   Telehealth Platform", theme::muted())),
            ]
        };
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_entries(&self, f: &mut Frame, area: Rect, active: Section) {
        let items: Vec<ListItem> = Section::ALL
            .iter()
            .map(|section| {
                let is_active = *section == active;
                let style = if is_active {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                if self.collapsed {
                    return ListItem::new(Line::from(format!(" {} ", section.icon()))).style(style);
                }
                let text = Text::from(vec![
                    Line::from(vec![
                        Span::raw(format!(" {} ", section.shortcut())),
                        Span::raw(format!("{} ", section.icon())),
                        Span::raw(section.title()),
                    ]),
                    Line::from(Span::styled(
                        format!("     {}", section.description()),
                        if is_active {
                            style.remove_modifier(Modifier::BOLD)
                        } else {
                            theme::muted()
                        },
                    )),
                ]);
                ListItem::new(text).style(style)
            })
            .collect();

        f.render_widget(List::new(items), area);
    }
}

fn panel_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(false))
}

fn render_system_status(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(" ● ", Style::default().fg(Color::Green)),
            Span::raw("System Status"),
        ]),
        Line::from(Span::styled("   All services operational", theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_is_local_toggle() {
        let mut nav = NavPanel::new();
        assert!(!nav.is_collapsed());
        nav.toggle_collapsed();
        assert!(nav.is_collapsed());
        nav.toggle_collapsed();
        assert!(!nav.is_collapsed());
    }

    #[test]
    fn test_index_at_expanded_rows() {
        let nav = NavPanel::new();
        let area = Rect::new(0, 0, 30, 38);
        // Border plus three brand rows sit above the first entry.
        assert_eq!(nav.index_at(area, 5, 3), None);
        assert_eq!(nav.index_at(area, 5, 4), Some(0));
        assert_eq!(nav.index_at(area, 5, 5), Some(0));
        assert_eq!(nav.index_at(area, 5, 6), Some(1));
        assert_eq!(nav.index_at(area, 5, 14), Some(5));
        assert_eq!(nav.index_at(area, 5, 16), None);
        assert_eq!(nav.index_at(area, 0, 6), None);
        assert_eq!(nav.index_at(area, 40, 6), None);
    }

    #[test]
    fn test_index_at_collapsed_rows() {
        let mut nav = NavPanel::new();
        nav.toggle_collapsed();
        let area = Rect::new(0, 0, 7, 38);
        assert_eq!(nav.index_at(area, 2, 5), Some(1));
        assert_eq!(nav.index_at(area, 2, 9), Some(5));
        assert_eq!(nav.index_at(area, 2, 10), None);
    }

    #[test]
    fn test_index_at_short_panel_ignores_footer_and_border() {
        let nav = NavPanel::new();
        // 18 rows: border, brand 1-3, entries 4-13, footer 14-16, border 17.
        let area = Rect::new(0, 0, 30, 18);
        assert_eq!(nav.index_at(area, 5, 12), Some(4));
        assert_eq!(nav.index_at(area, 5, 13), Some(4));
        assert_eq!(nav.index_at(area, 5, 14), None);
        assert_eq!(nav.index_at(area, 5, 15), None);
        assert_eq!(nav.index_at(area, 5, 17), None);
        assert_eq!(nav.index_at(area, 5, 18), None);
    }

    #[test]
    fn test_pick_closed_set() {
        let nav = NavPanel::new();
        assert_eq!(nav.pick(0), Some(Section::Dashboard));
        assert_eq!(nav.pick(5), Some(Section::Profile));
        assert_eq!(nav.pick(6), None);
    }
}
