// src/ui/widgets/footer.rs

use crate::app::navigation::Panel;
use crate::app::{App, Field};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer, which lists the keys that do something right now.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = if app.records.is_confirming_clear() {
        vec![key("Y"), Span::raw(" confirm clear, "), key("N"), Span::raw(" cancel")]
    } else {
        vec![key("F1-F3"), Span::raw(" panels, "), key("Tab"), Span::raw(" next field, ")]
    };

    if !app.records.is_confirming_clear() {
        match (app.active_panel(), app.focus) {
            (_, Field::Weather) => spans.extend([key("Enter"), Span::raw(" weather, ")]),
            (Panel::Scan, _) if app.scan.is_busy() => spans.push(Span::raw("Scanning... ")),
            (Panel::Scan, _) => spans.extend([key("Enter"), Span::raw(" scan, ")]),
            _ => {}
        }
        if app.active_panel() == Panel::Database {
            spans.extend([
                key("F5"),
                Span::raw(" refresh, "),
                key("Ctrl+D"),
                Span::raw(" clear, "),
            ]);
        }
        spans.extend([key("Esc"), Span::raw(" quit")]);
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
