// src/ui/widgets/records_table.rs

use chrono::Local;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::app::records::{
    RecordTable, TableView, COLUMN_COUNT, LOAD_FAILED_MESSAGE, NO_DATA_MESSAGE,
};

const HEADERS: [&str; COLUMN_COUNT] = ["#", "URL", "Description", "Date"];

/// Renders the Database panel: the record table, its empty-state message or
/// its error row.
pub fn render_records_table(frame: &mut Frame, table: &mut RecordTable, area: Rect) {
    let title = if table.is_loading() {
        "Phishing Database (refreshing...)"
    } else {
        "Phishing Database"
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
        .style(Style::default().fg(Color::Yellow).bold())
        .bottom_margin(1);
    let widths = [
        Constraint::Length(4),
        Constraint::Percentage(40),
        Constraint::Percentage(40),
        Constraint::Min(10),
    ];

    let rows: Vec<Row> = table
        .display_rows(Local::now().date_naive())
        .into_iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.index.to_string()),
                Cell::from(row.url),
                Cell::from(row.description),
                Cell::from(row.date),
            ])
        })
        .collect();

    let widget = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(widget, inner, &mut table.table_state);

    // Messages occupy the whole body below the header, like a row spanning
    // every column.
    let body = Rect {
        y: inner.y + 2,
        height: inner.height.saturating_sub(2),
        ..inner
    };
    if body.height == 0 {
        return;
    }
    let message = match table.view() {
        TableView::Idle => Some(Paragraph::new("Loading...").style(Style::default().fg(Color::Cyan))),
        TableView::Empty => Some(
            Paragraph::new(NO_DATA_MESSAGE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
        ),
        TableView::Failed => {
            Some(Paragraph::new(LOAD_FAILED_MESSAGE).style(Style::default().fg(Color::Red)))
        }
        TableView::Rows(_) => None,
    };
    if let Some(message) = message {
        frame.render_widget(message, body);
    }
}
