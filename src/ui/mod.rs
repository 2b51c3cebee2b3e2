// src/ui/mod.rs

use crate::app::{navigation::Panel, App};
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let layout = layout::create_layout(area);

    widgets::nav_bar::render_nav_bar(frame, &app.navigator, layout.nav);

    // Only the visible panel is drawn.
    match app.active_panel() {
        Panel::Scan => widgets::scan_panel::render_scan_panel(frame, app, layout.panel),
        Panel::Database => {
            widgets::records_table::render_records_table(frame, &mut app.records, layout.panel)
        }
        Panel::About => widgets::about::render_about(frame, layout.panel),
    }

    widgets::sidebar::render_sidebar(frame, app, layout.sidebar);
    widgets::footer::render_footer(frame, app, layout.footer);

    if app.records.is_confirming_clear() {
        widgets::confirm_popup::render_confirm_popup(frame, area);
    }
}
