//! Single-row sparkline for short series such as session durations

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A compact inline sparkline (single line), newest value rightmost
pub struct MiniSparkline<'a> {
    data: &'a [u32],
    style: Style,
}

impl<'a> MiniSparkline<'a> {
    pub fn new(data: &'a [u32]) -> Self {
        Self {
            data,
            style: Style::default().fg(Color::Cyan),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<'a> Widget for MiniSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.data.is_empty() {
            return;
        }
        let max = series_max(self.data);
        for (i, ch) in bars(self.data, max, area.width as usize).enumerate() {
            buf.get_mut(area.x + i as u16, area.y)
                .set_char(ch)
                .set_style(self.style);
        }
    }
}

fn series_max(data: &[u32]) -> u32 {
    data.iter().copied().max().unwrap_or(1).max(1)
}

/// Last `width` values scaled onto the 8 bar glyphs
fn bars(data: &[u32], max: u32, width: usize) -> impl Iterator<Item = char> + '_ {
    let max = max.max(1) as f64;
    let start = data.len().saturating_sub(width);
    data[start..].iter().map(move |&value| {
        let scaled = ((value as f64 / max) * 7.0).round() as usize;
        BARS[scaled.min(7)]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparkline_text(data: &[u32], width: usize) -> String {
        bars(data, series_max(data), width).collect()
    }

    #[test]
    fn test_sparkline_text_scales_to_max() {
        assert_eq!(sparkline_text(&[0, 35], 8), "▁█");
        assert_eq!(sparkline_text(&[1, 2, 3, 4, 5, 6, 7, 8], 8).chars().count(), 8);
    }

    #[test]
    fn test_sparkline_text_keeps_newest() {
        assert_eq!(sparkline_text(&[7, 7, 0], 2), "█▁");
    }

    #[test]
    fn test_sparkline_text_empty() {
        assert!(sparkline_text(&[], 8).is_empty());
    }
}
