//! UI rendering module for the Taiwan weather CLI
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components.

pub mod forecast_view;
pub mod help_overlay;

pub use forecast_view::render as render_forecast;
pub use help_overlay::render as render_help_overlay;
