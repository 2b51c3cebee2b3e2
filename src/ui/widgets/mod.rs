// src/ui/widgets/mod.rs

// One module per screen region. `input` and `result_view` are shared building
// blocks used by the panels.
pub mod about;
pub mod confirm_popup;
pub mod footer;
pub mod input;
pub mod nav_bar;
pub mod records_table;
pub mod result_view;
pub mod scan_panel;
pub mod sidebar;
