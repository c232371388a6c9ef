//! Terminal palette for semantic tones

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::domain::Tone;

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Primary => Color::Cyan,
        Tone::Secondary => Color::LightMagenta,
        Tone::Accent => Color::LightBlue,
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Destructive => Color::Red,
        Tone::Muted => Color::DarkGray,
    }
}

/// Foreground-only style, for values and icons
pub fn tone_style(tone: Tone) -> Style {
    Style::default().fg(tone_color(tone))
}

/// Filled label, e.g. a status pill
pub fn badge(label: impl Into<String>, tone: Tone) -> Span<'static> {
    let fg = match tone {
        Tone::Muted => Color::White,
        _ => Color::Black,
    };
    Span::styled(
        format!(" {} ", label.into()),
        Style::default()
            .fg(fg)
            .bg(tone_color(tone))
            .add_modifier(Modifier::BOLD),
    )
}

pub fn border(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn heading() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn key() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn selected() -> Style {
    Style::default()
        .fg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Button label, dimmed when the control is disabled
pub fn button(label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    Span::styled(format!("[{label}]"), style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muted_badge_stays_readable() {
        let span = badge("scheduled", Tone::Muted);
        assert_eq!(span.content, " scheduled ");
        assert_eq!(span.style.fg, Some(Color::White));
        assert_eq!(span.style.bg, Some(Color::DarkGray));
    }
}
