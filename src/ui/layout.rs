// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, computed once per frame.
pub struct AppLayout {
    pub nav: Rect,
    pub panel: Rect,
    pub sidebar: Rect,
    pub footer: Rect,
}

/// Splits the frame into the nav bar on top, the footer at the bottom, and
/// between them the active panel beside the clock/weather sidebar.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_chunks[1]);

    AppLayout {
        nav: main_chunks[0],
        panel: content_chunks[0],
        sidebar: content_chunks[1],
        footer: main_chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_frame() {
        let layout = create_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.nav, Rect::new(0, 0, 100, 3));
        assert_eq!(layout.footer, Rect::new(0, 39, 100, 1));
        assert_eq!(layout.panel.height, 36);
        assert_eq!(layout.panel.width + layout.sidebar.width, 100);
    }
}
