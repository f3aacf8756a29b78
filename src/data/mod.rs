//! Core data models for the Taiwan weather CLI
//!
//! This module contains the structures handed to the presentation layer: the
//! current conditions snapshot and the hourly chart series, plus the city
//! table and the forecast API client that produce them.

pub mod cities;
pub mod forecast;

pub use cities::{all_cities, get_city_by_name, City};
pub use forecast::{ForecastClient, ForecastError, ForecastRequest};

use serde::Serialize;

use crate::chart::DateLabel;

/// Current conditions for one township, taken from the first forecast slot
///
/// Values are kept exactly as the API reports them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentElements {
    /// County or city name, e.g. "臺北市"
    pub city_name: String,
    /// Township name, e.g. "大安區"
    pub region_name: String,
    /// 3-hour probability of precipitation (%)
    pub pop: String,
    /// Temperature (°C)
    pub temp: String,
    /// Relative humidity (%)
    pub rh: String,
    /// Weather description
    pub wx: String,
    /// Comfort index description
    pub ci: String,
    /// Wind speed (m/s)
    pub ws: String,
}

/// Hourly series for the temperature chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentChartData {
    /// X-axis labels, one per forecast hour
    pub date: Vec<DateLabel>,
    /// Temperature (°C) per hour
    pub temp: Vec<f64>,
    /// Apparent temperature (°C) per hour
    pub apparent_temp: Vec<f64>,
}

impl CurrentChartData {
    pub fn len(&self) -> usize {
        self.date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_empty()
    }

    /// All plotted values, used to size the y axis
    pub fn all_values(&self) -> Vec<f64> {
        self.temp
            .iter()
            .chain(self.apparent_temp.iter())
            .copied()
            .collect()
    }
}

/// Everything one successful fetch produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub current: CurrentElements,
    pub chart: CurrentChartData,
}
