#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod config;
pub mod events;
pub mod state;
pub mod theme;
pub mod ui;
pub mod ui_state;
