//! Terminal front-end for the showdown game. Presentation only: all rules,
//! validation, and payouts live in the core and surface here as rendered
//! state or transient error lines.

pub mod app;
pub mod controller;
mod ui;
