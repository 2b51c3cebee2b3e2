// src/ui/widgets/nav_bar.rs

use ratatui::{
    prelude::*,
    symbols,
    widgets::{Block, Borders, Paragraph, Tabs},
};
use strum::IntoEnumIterator;

use crate::app::navigation::{Navigator, Panel, LINK_PADDING};

/// Renders the nav links and the underline beneath the active one.
///
/// The underline sits on the block's bottom border, shifted by the offset the
/// navigator measured from the link widths.
pub fn render_nav_bar(frame: &mut Frame, navigator: &Navigator, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" PhishGuard ".bold().cyan());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let padding = " ".repeat(LINK_PADDING as usize);
    let tabs = Tabs::new(Panel::iter().map(|p| p.label()))
        .select(navigator.active().index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Cyan).bold())
        .divider(symbols::line::VERTICAL)
        .padding(padding.clone(), padding);
    frame.render_widget(tabs, inner);

    let indicator = navigator.indicator();
    let underline_y = inner.y + inner.height;
    if underline_y >= area.y + area.height || indicator.offset >= inner.width {
        return;
    }
    let underline = Rect {
        x: inner.x + indicator.offset,
        y: underline_y,
        width: indicator.width.min(inner.width - indicator.offset),
        height: 1,
    };
    let bar = Paragraph::new("━".repeat(underline.width as usize)).style(Style::default().fg(Color::Cyan));
    frame.render_widget(bar, underline);
}
