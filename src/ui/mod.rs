use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod nav;
pub mod theme;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel};
use crate::core::Section;

/// Bordered panel with a heading-styled title
pub fn card(title: &str) -> Block<'_> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(false));
    if title.is_empty() {
        block
    } else {
        block.title(Span::styled(format!(" {title} "), theme::heading()))
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size(), app.nav.is_collapsed());

    app.nav.render(f, areas.nav, app.active_section());
    app.router.view().render(f, areas.content, &app.ctx);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let section = app.active_section();
    let mut spans = vec![
        Span::styled("Patient ", theme::muted()),
        Span::raw(format!("{}  ", app.ctx.patient_name)),
        Span::styled("Section ", theme::muted()),
        Span::raw(format!("{}  ", section.title())),
    ];
    let hints = app.router.view().key_hints();
    if !hints.is_empty() {
        spans.push(Span::styled(hints, theme::muted()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Completion hint for the command bar
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("dashboard", "Open dashboard"),
        ("appointments", "Open appointments"),
        ("exercise", "Open exercise log"),
        ("vitals", "Open vital signs"),
        ("messages", "Open messages"),
        ("profile", "Open profile"),
        ("goto", "goto <section id>"),
        ("menu", "Collapse / expand navigation"),
        ("help", "Show key bindings"),
        ("quit", "Quit"),
    ];

    commands
        .into_iter()
        .find(|(cmd, _)| cmd.starts_with(&input))
        .map(|(_, desc)| desc)
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint_text = command_hint(&app.command.input)
                .unwrap_or("section name, goto <id>, menu, help, quit");
            Line::from(vec![
                Span::styled(": ", theme::key()),
                Span::raw(app.command.input.as_str()),
                Span::styled(format!("  {hint_text}"), theme::muted()),
            ])
        }
        InputMode::Normal => match app.status_text() {
            Some((text, level)) => {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", theme::muted()),
                    Span::styled(text, Style::default().fg(color)),
                ])
            }
            None => global_hints(),
        },
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn global_hints() -> Line<'static> {
    let pairs = [
        ("1-6", "section"),
        ("[ ]", "prev/next"),
        ("m", "menu"),
        (":", "command"),
        ("?", "help"),
        ("q", "quit"),
    ];
    let mut spans = Vec::new();
    for (key, label) in pairs {
        spans.push(Span::styled(key, theme::key()));
        spans.push(Span::styled(format!(" {label}  "), theme::muted()));
    }
    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = layout::centered(area, 64, 24);
    f.render_widget(Clear, popup_area);

    let mut lines = vec![Line::from("Navigation")];
    for section in Section::ALL {
        lines.push(Line::from(format!(
            "  {}          {}",
            section.shortcut(),
            section.title()
        )));
    }
    lines.extend([
        Line::from("  [ / ]      Prev/Next section"),
        Line::from("  m          Collapse navigation"),
        Line::from("  Mouse      Click a section"),
        Line::from(""),
        Line::from("Shell"),
        Line::from("  :          Command bar (goto <id>, menu, help, quit)"),
        Line::from("  Esc        Close popup / stop editing"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit (Ctrl-C always quits)"),
        Line::from(""),
        Line::from(format!(
            "{}: {}",
            app.active_section().title(),
            app.router.view().key_hints()
        )),
    ]);

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_hint_prefix() {
        assert_eq!(command_hint("vit"), Some("Open vital signs"));
        assert_eq!(command_hint("go"), Some("goto <section id>"));
        assert_eq!(command_hint(""), None);
        assert_eq!(command_hint("zzz"), None);
    }
}
