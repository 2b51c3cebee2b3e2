// src/core/mod.rs

/// Request and reply shapes of the PhishGuard backend, plus the display kind
/// a scan verdict maps to.
pub mod models;

/// The `Backend` trait and its reqwest implementation.
pub mod api;
