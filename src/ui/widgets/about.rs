// src/ui/widgets/about.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the static About panel.
pub fn render_about(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from("ABOUT PHISHGUARD".bold().yellow()),
        Line::from(""),
        Line::from("PhishGuard checks links and message text for the tell-tale signs of phishing before you act on them."),
        Line::from(""),
        Line::from("HOW IT WORKS".bold().yellow()),
        Line::from("• URLs are checked for raw IP hosts and bait words such as 'login', 'verify' or 'account'."),
        Line::from("• Message text is checked for pressure phrases such as 'urgent', 'act now' or 'security alert'."),
        Line::from("• Everything flagged is recorded in the shared database (F2)."),
        Line::from(""),
        Line::from("STAY SAFE".bold().yellow()),
        Line::from("• Never enter credentials on a page you reached from an unsolicited message."),
        Line::from("• Check the sender and the real destination of a link before clicking it."),
        Line::from("• When in doubt, contact the organisation through a channel you already trust."),
    ]);

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("About"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
