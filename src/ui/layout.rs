use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Sidebar width while expanded / collapsed
pub const NAV_WIDTH: u16 = 30;
pub const NAV_WIDTH_COLLAPSED: u16 = 7;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub nav: Rect,
    pub content: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect, nav_collapsed: bool) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(size);

    let nav_width = if nav_collapsed {
        NAV_WIDTH_COLLAPSED
    } else {
        NAV_WIDTH
    };
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(nav_width), Constraint::Min(0)])
        .split(vertical[0]);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[1]);

    UiAreas {
        size,
        nav: main_chunks[0],
        content: main_chunks[1],
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}

/// Centered popup rectangle
pub fn centered(size: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(size.width);
    let height = height.min(size.height);
    Rect {
        x: size.x + (size.width - width) / 2,
        y: size.y + (size.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_areas_split() {
        let areas = areas(Rect::new(0, 0, 120, 40), false);
        assert_eq!(areas.nav, Rect::new(0, 0, NAV_WIDTH, 38));
        assert_eq!(areas.content, Rect::new(NAV_WIDTH, 0, 120 - NAV_WIDTH, 38));
        assert_eq!(areas.status_line, Rect::new(0, 38, 120, 1));
        assert_eq!(areas.command_line, Rect::new(0, 39, 120, 1));
    }

    #[test]
    fn test_collapsed_nav_width() {
        let areas = areas(Rect::new(0, 0, 120, 40), true);
        assert_eq!(areas.nav.width, NAV_WIDTH_COLLAPSED);
    }

    #[test]
    fn test_centered_clamps_to_frame() {
        let popup = centered(Rect::new(0, 0, 40, 10), 64, 24);
        assert_eq!(popup, Rect::new(0, 0, 40, 10));
    }
}
