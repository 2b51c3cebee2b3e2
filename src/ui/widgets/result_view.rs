// src/ui/widgets/result_view.rs
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph, Wrap}};

use crate::app::result::{ResultDisplay, ResultView};
use crate::core::models::OutcomeKind;

fn kind_style(kind: OutcomeKind) -> Style {
    match kind {
        OutcomeKind::Safe => Style::default().fg(Color::Green),
        OutcomeKind::Warning => Style::default().fg(Color::Yellow),
        OutcomeKind::Danger => Style::default().fg(Color::Red),
    }
}

/// Builds the result block: icon and heading, message, and a reason line
/// when there is one.
pub fn build_result_text(view: &ResultView) -> Text<'static> {
    let style = kind_style(view.kind);
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", view.kind.icon(), view.kind.heading()),
            style.bold(),
        )),
        Line::from(""),
        Line::from(view.message.clone()),
    ];
    if let Some(reason) = &view.reason {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Reason: ", Style::default().bold()),
            Span::raw(reason.clone()),
        ]));
    }
    Text::from(lines)
}

/// Renders the shared result region. Nothing is drawn until the first result.
pub fn render_result(frame: &mut Frame, display: &ResultDisplay, area: Rect) {
    let Some(view) = display.view() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(kind_style(view.kind))
        .title("Scan Result (scroll with ↑ ↓)");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = build_result_text(view);
    // Centre the block vertically when it fits and has not been scrolled.
    let height = text.height() as u16;
    let top = if display.scroll() == 0 && height < inner.height {
        (inner.height - height) / 2
    } else {
        0
    };
    let body = Rect {
        y: inner.y + top,
        height: inner.height - top,
        ..inner
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .scroll((display.scroll(), 0));
    frame.render_widget(paragraph, body);
}
