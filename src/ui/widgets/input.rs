// src/ui/widgets/input.rs
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};

/// Renders a single-line text field. The focused field is highlighted and
/// gets the cursor; a disabled field is dimmed.
pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    focused: bool,
    enabled: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text_style = if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string());
    let inner = block.inner(area);

    // Keep the end of a long value (and the cursor) inside the box.
    let value_width = Span::raw(value).width() as u16;
    let scroll = value_width.saturating_sub(inner.width.saturating_sub(1));

    let paragraph = Paragraph::new(value.to_string())
        .block(block)
        .style(text_style)
        .scroll((0, scroll));
    frame.render_widget(paragraph, area);

    if focused && enabled && inner.width > 0 {
        frame.set_cursor_position((inner.x + value_width - scroll, inner.y));
    }
}
