// src/ui/widgets/scan_panel.rs

use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};

use crate::app::{App, Field};
use crate::ui::widgets::{input::render_input, result_view::render_result};

/// Renders the scan form, its submit control and the shared result region.
pub fn render_scan_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Scan for Phishing");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // URL
            Constraint::Length(3), // Text
            Constraint::Length(1), // Button
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Result
        ])
        .split(inner);

    let enabled = !app.scan.is_busy();
    render_input(
        frame,
        chunks[0],
        "URL",
        &app.scan.url_input,
        app.focus == Field::Url,
        enabled,
    );
    render_input(
        frame,
        chunks[1],
        "Message text",
        &app.scan.text_input,
        app.focus == Field::Text,
        enabled,
    );

    let button_style = if enabled {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Gray)
    };
    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", app.scan.button_label()),
        button_style,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(button, chunks[2]);

    render_result(frame, &app.result, chunks[4]);
}
