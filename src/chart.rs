//! Chart helpers for the hourly forecast view
//!
//! Turns raw forecast timestamps into compact axis labels and picks a y-axis
//! step size for a set of temperatures. Everything in here is pure and
//! synchronous, so it can be called from the fetch path and the renderer alike.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Range at or below which the fine step is used
pub const STEP_THRESHOLD: f64 = 7.5;

/// Hour value marking a day boundary
const MIDNIGHT: &str = "00";

/// Errors produced by the chart helpers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Timestamp is not of the form `YYYY-MM-DDTHH:MM:SS`
    #[error("Malformed timestamp: '{0}'")]
    MalformedTimestamp(String),

    /// No values to compute a range from
    #[error("Cannot compute a step size from an empty sample")]
    EmptySample,

    /// Sample contains NaN or an infinite value
    #[error("Sample contains a non-finite value")]
    NonFiniteSample,
}

/// A timestamp reduced to its hour and month/day parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifiedMoment {
    /// Two-digit hour, e.g. "08"
    pub hour: String,
    /// Month and day joined by '/', e.g. "03/15"
    pub month_day: String,
}

/// An x-axis label for one forecast point
///
/// Serializes as `["08", "03/15"]` for full labels and `["08"]` for
/// hour-only labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLabel {
    /// Hour plus date, used at the first point and at midnight
    Full { hour: String, month_day: String },
    /// Hour only, used for points within the same day
    HourOnly { hour: String },
}

impl DateLabel {
    /// The hour part of the label
    pub fn hour(&self) -> &str {
        match self {
            DateLabel::Full { hour, .. } | DateLabel::HourOnly { hour } => hour,
        }
    }

    /// The month/day part, present only on full labels
    pub fn month_day(&self) -> Option<&str> {
        match self {
            DateLabel::Full { month_day, .. } => Some(month_day),
            DateLabel::HourOnly { .. } => None,
        }
    }

    /// Whether the label carries the date as well as the hour
    pub fn is_full(&self) -> bool {
        matches!(self, DateLabel::Full { .. })
    }
}

impl Serialize for DateLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let parts = if self.is_full() { 2 } else { 1 };
        let mut seq = serializer.serialize_seq(Some(parts))?;
        seq.serialize_element(self.hour())?;
        if let Some(month_day) = self.month_day() {
            seq.serialize_element(month_day)?;
        }
        seq.end()
    }
}

/// Y-axis step size for the temperature chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSize {
    /// 2.5 degree ticks
    Fine,
    /// 5 degree ticks
    Coarse,
}

impl StepSize {
    pub fn value(self) -> f64 {
        match self {
            StepSize::Fine => 2.5,
            StepSize::Coarse => 5.0,
        }
    }
}

impl Serialize for StepSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// Split a timestamp like `2024-03-15T08:30:00` into hour `08` and date `03/15`.
///
/// # Returns
/// * `Ok(SimplifiedMoment)` for well-formed input
/// * `Err(ChartError::MalformedTimestamp)` when the separator, hour digits, or
///   month/day fields are missing
pub fn simplify_date_time(timestamp: &str) -> Result<SimplifiedMoment, ChartError> {
    let malformed = || ChartError::MalformedTimestamp(timestamp.to_string());

    let (date, time) = timestamp.split_once('T').ok_or_else(malformed)?;
    if time.contains('T') {
        return Err(malformed());
    }

    let hour = time.get(..2).ok_or_else(malformed)?;
    if !hour.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let fields: Vec<&str> = date.split('-').skip(1).collect();
    if fields.len() < 2 {
        return Err(malformed());
    }

    Ok(SimplifiedMoment {
        hour: hour.to_string(),
        month_day: fields.join("/"),
    })
}

/// Collapse same-day moments to hour-only labels.
///
/// The first moment and every midnight moment keep their date; all others
/// keep only the hour. Output has one label per input moment.
pub fn filter_forecast_dates(moments: &[SimplifiedMoment]) -> Vec<DateLabel> {
    moments
        .iter()
        .enumerate()
        .map(|(index, moment)| {
            if index == 0 || moment.hour == MIDNIGHT {
                DateLabel::Full {
                    hour: moment.hour.clone(),
                    month_day: moment.month_day.clone(),
                }
            } else {
                DateLabel::HourOnly {
                    hour: moment.hour.clone(),
                }
            }
        })
        .collect()
}

/// Pick the y-axis step size from the spread of the values.
///
/// Returns `StepSize::Fine` when `max - min <= 7.5`, otherwise `StepSize::Coarse`.
pub fn calculate_step_size(values: &[f64]) -> Result<StepSize, ChartError> {
    let (min, max) = min_max(values)?;

    if max - min <= STEP_THRESHOLD {
        Ok(StepSize::Fine)
    } else {
        Ok(StepSize::Coarse)
    }
}

/// Y-axis bounds snapped outward to multiples of the step
///
/// A flat series still gets one step of height so the line is visible.
pub fn axis_bounds(values: &[f64], step: StepSize) -> Result<(f64, f64), ChartError> {
    let (min, max) = min_max(values)?;
    let step = step.value();

    let lower = (min / step).floor() * step;
    let mut upper = (max / step).ceil() * step;
    if upper <= lower {
        upper = lower + step;
    }

    Ok((lower, upper))
}

fn min_max(values: &[f64]) -> Result<(f64, f64), ChartError> {
    if values.is_empty() {
        return Err(ChartError::EmptySample);
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ChartError::NonFiniteSample);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((min, max))
}
