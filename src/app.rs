//! Application state management for the Taiwan weather CLI
//!
//! This module owns the presentation state: the last good snapshot and chart
//! series, the last fetch error, and view toggles driven by keyboard input.
//! Fetch results only replace the data on success.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};

use crate::chart::{calculate_step_size, StepSize};
use crate::cli::StartupConfig;
use crate::data::{
    CurrentChartData, CurrentElements, ForecastClient, ForecastError, ForecastRequest,
    WeatherReport,
};

/// Application state enum representing what the main view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for the first fetch
    Loading,
    /// Data available
    Ready,
    /// First fetch failed and there is nothing to show
    Failed,
}

/// Which temperature series the chart draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesView {
    Both,
    Temperature,
    Apparent,
}

impl SeriesView {
    /// Cycle Both -> Temperature -> Apparent -> Both
    pub fn next(self) -> Self {
        match self {
            SeriesView::Both => SeriesView::Temperature,
            SeriesView::Temperature => SeriesView::Apparent,
            SeriesView::Apparent => SeriesView::Both,
        }
    }

    pub fn shows_temperature(self) -> bool {
        matches!(self, SeriesView::Both | SeriesView::Temperature)
    }

    pub fn shows_apparent(self) -> bool {
        matches!(self, SeriesView::Both | SeriesView::Apparent)
    }
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Last successfully fetched current conditions
    pub current: Option<CurrentElements>,
    /// Last successfully fetched chart series
    pub chart: Option<CurrentChartData>,
    /// Message from the most recent failed fetch, cleared on success
    pub last_error: Option<String>,
    /// Timestamp of last successful refresh
    pub last_refresh: Option<DateTime<Local>>,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag indicating a refresh has been requested
    pub refresh_requested: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Series drawn on the chart
    pub series: SeriesView,
    /// Request template for every fetch
    request: ForecastRequest,
    /// Forecast API client
    client: ForecastClient,
}

impl App {
    /// Creates a new App from the startup configuration
    pub fn new(config: &StartupConfig) -> Self {
        Self::with_client(
            config.request.clone(),
            ForecastClient::new(config.api_key.clone()),
        )
    }

    /// Creates a new App with a custom client
    pub fn with_client(request: ForecastRequest, client: ForecastClient) -> Self {
        Self {
            state: AppState::Loading,
            current: None,
            chart: None,
            last_error: None,
            last_refresh: None,
            should_quit: false,
            refresh_requested: false,
            show_help: false,
            series: SeriesView::Both,
            request,
            client,
        }
    }

    pub fn request(&self) -> &ForecastRequest {
        &self.request
    }

    /// Fetches a fresh forecast and applies the result
    pub async fn refresh(&mut self) {
        self.refresh_requested = false;
        let result = self.client.fetch_weather(&self.request).await;
        self.apply_report(result);
    }

    /// Applies a fetch result to the state
    ///
    /// On success both the snapshot and the chart are replaced. On failure the
    /// error is logged and recorded, and previous data is left untouched.
    pub fn apply_report(&mut self, result: Result<WeatherReport, ForecastError>) {
        match result {
            Ok(report) => {
                self.current = Some(report.current);
                self.chart = Some(report.chart);
                self.last_error = None;
                self.last_refresh = Some(Local::now());
                self.state = AppState::Ready;
            }
            Err(err) => {
                tracing::error!(
                    region = %self.request.region,
                    error = %err,
                    "failed to fetch forecast"
                );
                self.last_error = Some(err.to_string());
                if self.current.is_none() {
                    self.state = AppState::Failed;
                }
            }
        }
    }

    /// Values of the series currently drawn
    pub fn visible_values(&self) -> Vec<f64> {
        let Some(chart) = &self.chart else {
            return Vec::new();
        };

        let mut values = Vec::with_capacity(chart.temp.len() + chart.apparent_temp.len());
        if self.series.shows_temperature() {
            values.extend_from_slice(&chart.temp);
        }
        if self.series.shows_apparent() {
            values.extend_from_slice(&chart.apparent_temp);
        }
        values
    }

    /// Y-axis step for the visible series, if there is anything to draw
    pub fn step_size(&self) -> Option<StepSize> {
        calculate_step_size(&self.visible_values()).ok()
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q`: Quit the application
    /// - `Esc`: Close help, otherwise quit
    /// - `r`: Request a refresh
    /// - `s`: Cycle the visible chart series
    /// - `?`: Toggle help
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') => {
                    self.show_help = false;
                }
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                _ => {}
            }
            return;
        }

        match self.state {
            AppState::Loading => {
                // Only quit is allowed during loading
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::Ready | AppState::Failed => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('r') => {
                    self.refresh_requested = true;
                }
                KeyCode::Char('s') => {
                    self.series = self.series.next();
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }
}
