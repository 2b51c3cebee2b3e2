// src/ui/widgets/confirm_popup.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    text::Line,
};

use crate::app::records::CLEAR_PROMPT;

/// Renders the clear-database confirmation on top of the existing UI.
///
/// `Clear` wipes the popup area first so the table underneath does not bleed
/// through.
pub fn render_confirm_popup(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from("CLEAR DATABASE".bold().yellow()),
        Line::from(""),
        Line::from(CLEAR_PROMPT),
        Line::from(""),
        Line::from(vec![
            "Y".bold().yellow(),
            Span::raw(" / Enter to confirm, "),
            "N".bold().yellow(),
            Span::raw(" / Esc to cancel"),
        ]),
    ]);

    let block = Block::default()
        .title("Confirm")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let popup_area = centered_rect(50, 40, area);

    let popup = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// Returns a `Rect` of the given percentages centered within `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
