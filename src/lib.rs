//! PhishGuard terminal dashboard.
//!
//! A client for the PhishGuard scanning backend: submit URLs or message text
//! for a verdict, browse the database of flagged content, and keep an eye on
//! the clock and the local weather.

pub mod app;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod keys;
pub mod logging;
pub mod ui;
