// src/ui/widgets/sidebar.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::clock::ClockTicker;
use crate::app::weather::WeatherView;
use crate::app::{App, Field};
use crate::ui::widgets::input::render_input;

/// Renders the clock and the weather widget, which stay visible on every
/// panel.
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    render_clock(frame, &app.clock, chunks[0]);
    render_weather(frame, app, chunks[1]);
}

fn render_clock(frame: &mut Frame, clock: &ClockTicker, area: Rect) {
    let text = Text::from(vec![
        Line::from(Span::raw(clock.time().to_string()).bold().cyan()),
        Line::from(clock.date().to_string()),
    ]);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Clock"));
    frame.render_widget(paragraph, area);
}

fn render_weather(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Weather");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let title = format!("City (blank: {})", app.weather.default_location());
    render_input(
        frame,
        chunks[0],
        &title,
        &app.weather.input,
        app.focus == Field::Weather,
        true,
    );

    let view = app.weather.view();
    let mut lines: Vec<Line> = Vec::new();
    for (i, line) in view.lines().into_iter().enumerate() {
        let span = Span::raw(line);
        let styled = match (view, i) {
            (WeatherView::Report { .. }, 0) => span.bold().fg(Color::White),
            (WeatherView::Report { .. }, 2) => span.fg(Color::DarkGray),
            (WeatherView::Error(_) | WeatherView::Unavailable, _) => span.fg(Color::Red),
            _ => span,
        };
        lines.push(Line::from(styled));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, chunks[1]);
}
