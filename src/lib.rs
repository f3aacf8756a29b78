//! Taiwan Weather CLI Library
//!
//! Fetches township forecasts from the Central Weather Administration open
//! data API and shapes them for a terminal dashboard.

pub mod app;
pub mod chart;
pub mod cli;
pub mod data;
pub mod ui;
