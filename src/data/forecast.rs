//! Central Weather Administration township forecast client
//!
//! This module fetches a township forecast from the CWA open data API and
//! reshapes it into the current conditions snapshot and the hourly chart series.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::{CurrentChartData, CurrentElements, WeatherReport};
use crate::chart::{filter_forecast_dates, simplify_date_time, ChartError, SimplifiedMoment};

/// Base URL for the CWA open data datastore
const CWA_BASE_URL: &str = "https://opendata.cwa.gov.tw/api/v1/rest/datastore";

/// Weather elements requested from the API, in the order they are returned
pub const ELEMENT_NAMES: &str = "溫度,相對濕度,體感溫度,舒適度指數,風速,3小時降雨機率,天氣現象";

/// Number of hourly points plotted on the chart
pub const CHART_HOURS: usize = 47;

const TEMPERATURE: usize = 0;
const RELATIVE_HUMIDITY: usize = 1;
const APPARENT_TEMPERATURE: usize = 2;
const COMFORT_INDEX: usize = 3;
const WIND_SPEED: usize = 4;
const PROBABILITY_OF_PRECIPITATION: usize = 5;
const WEATHER: usize = 6;

/// Taiwan standard time, the zone the API reads `timeFrom` in
const TAIWAN_UTC_OFFSET_SECS: i32 = 8 * 3600;

const ELEMENTS_PATH: &str = "records.Locations[0].Location[0].WeatherElement";

/// Errors that can occur when fetching forecast data
#[derive(Debug, Error)]
pub enum ForecastError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing expected field in response
    #[error("Missing expected field in response: {missing_field}")]
    MalformedResponse { missing_field: String },

    /// Field is present but not a usable number
    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: String, value: String },

    /// Element has fewer time entries than the chart needs
    #[error("Weather element {element} has {found} time entries, expected at least {expected}")]
    InsufficientForecast {
        element: usize,
        expected: usize,
        found: usize,
    },

    /// A forecast timestamp could not be simplified
    #[error("Invalid forecast time: {0}")]
    Timestamp(#[from] ChartError),
}

/// Parameters for one forecast request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    /// County or city name, reported back in the snapshot
    pub city: String,
    /// Township name, sent as `LocationName`
    pub region: String,
    /// Datastore id, e.g. "F-D0047-061"
    pub dataset_id: String,
    /// Fixed request clock in Taiwan time; now when unset
    pub time_from: Option<NaiveDateTime>,
}

impl ForecastRequest {
    pub fn new(
        city: impl Into<String>,
        region: impl Into<String>,
        dataset_id: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            region: region.into(),
            dataset_id: dataset_id.into(),
            time_from: None,
        }
    }

    /// Pin the request clock instead of using the current Taiwan time
    pub fn with_time_from(mut self, time_from: NaiveDateTime) -> Self {
        self.time_from = Some(time_from);
        self
    }

    /// The `timeFrom` query value, truncated to the hour
    pub fn time_from_param(&self) -> String {
        let time_from = self
            .time_from
            .unwrap_or_else(|| taiwan_time(Utc::now()));
        format_time_from(time_from)
    }
}

/// Wall-clock time in Taiwan for a UTC instant
pub fn taiwan_time(now: DateTime<Utc>) -> NaiveDateTime {
    match FixedOffset::east_opt(TAIWAN_UTC_OFFSET_SECS) {
        Some(offset) => now.with_timezone(&offset).naive_local(),
        None => now.naive_utc(),
    }
}

/// Format a time as `YYYY-MM-DDTHH:00:00`
pub fn format_time_from(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:00:00").to_string()
}

/// Client for fetching township forecasts from the CWA API
#[derive(Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for ForecastClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ForecastClient {
    /// Create a new ForecastClient using the given authorization key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: CWA_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different datastore root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a custom HTTP client
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the forecast for one township
    ///
    /// Each call issues a fresh request; nothing is cached or retried.
    ///
    /// # Returns
    /// * `Ok(WeatherReport)` - Current snapshot and 47-hour chart series
    /// * `Err(ForecastError)` - If the request, parsing, or extraction fails
    pub async fn fetch_weather(
        &self,
        request: &ForecastRequest,
    ) -> Result<WeatherReport, ForecastError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            request.dataset_id
        );
        let time_from = request.time_from_param();

        tracing::debug!(
            dataset = %request.dataset_id,
            region = %request.region,
            time_from = %time_from,
            "requesting township forecast"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("Authorization", self.api_key.as_str()),
                ("LocationName", request.region.as_str()),
                ("ElementName", ELEMENT_NAMES),
                ("timeFrom", time_from.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ForecastError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let api_response: ApiResponse = serde_json::from_str(&text)?;
        let report = reshape_response(&request.city, &request.region, &api_response)?;

        tracing::info!(
            city = %request.city,
            region = %request.region,
            hours = report.chart.len(),
            "forecast updated"
        );

        Ok(report)
    }
}

/// Build the snapshot and chart series from a parsed response
fn reshape_response(
    city: &str,
    region: &str,
    response: &ApiResponse,
) -> Result<WeatherReport, ForecastError> {
    let elements = weather_elements(response, region)?;

    let current = CurrentElements {
        city_name: city.to_string(),
        region_name: region.to_string(),
        pop: current_value(
            elements,
            PROBABILITY_OF_PRECIPITATION,
            "ProbabilityOfPrecipitation",
        )?,
        temp: current_value(elements, TEMPERATURE, "Temperature")?,
        rh: current_value(elements, RELATIVE_HUMIDITY, "RelativeHumidity")?,
        wx: current_value(elements, WEATHER, "Weather")?,
        ci: current_value(elements, COMFORT_INDEX, "ComfortIndexDescription")?,
        ws: current_value(elements, WIND_SPEED, "WindSpeed")?,
    };

    let temp_entries = chart_entries(elements, TEMPERATURE)?;
    let apparent_entries = chart_entries(elements, APPARENT_TEMPERATURE)?;

    let moments = temp_entries
        .iter()
        .enumerate()
        .map(|(i, entry)| -> Result<SimplifiedMoment, ForecastError> {
            let timestamp = entry.timestamp().ok_or_else(|| {
                missing(format!("{}[{}].Time[{}].DataTime", ELEMENTS_PATH, TEMPERATURE, i))
            })?;
            Ok(simplify_date_time(timestamp)?)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let chart = CurrentChartData {
        date: filter_forecast_dates(&moments),
        temp: series_values(temp_entries, TEMPERATURE, "Temperature")?,
        apparent_temp: series_values(
            apparent_entries,
            APPARENT_TEMPERATURE,
            "ApparentTemperature",
        )?,
    };

    Ok(WeatherReport { current, chart })
}

fn missing(path: String) -> ForecastError {
    ForecastError::MalformedResponse {
        missing_field: path,
    }
}

fn weather_elements<'a>(
    response: &'a ApiResponse,
    region: &str,
) -> Result<&'a [WeatherElement], ForecastError> {
    let records = response
        .records
        .as_ref()
        .ok_or_else(|| missing("records".to_string()))?;
    let group = records
        .locations
        .first()
        .ok_or_else(|| missing("records.Locations[0]".to_string()))?;
    let location = group
        .location
        .first()
        .ok_or_else(|| missing("records.Locations[0].Location[0]".to_string()))?;

    if let Some(name) = location.location_name.as_deref() {
        if name != region {
            tracing::warn!(requested = %region, returned = %name, "response is for a different township");
        }
    }

    if location.weather_element.is_empty() {
        return Err(missing(ELEMENTS_PATH.to_string()));
    }
    Ok(&location.weather_element)
}

fn element_at(elements: &[WeatherElement], index: usize) -> Result<&WeatherElement, ForecastError> {
    elements
        .get(index)
        .ok_or_else(|| missing(format!("{}[{}]", ELEMENTS_PATH, index)))
}

/// Read `key` from the first time slot of an element
fn current_value(
    elements: &[WeatherElement],
    index: usize,
    key: &str,
) -> Result<String, ForecastError> {
    let entry = element_at(elements, index)?
        .time
        .first()
        .ok_or_else(|| missing(format!("{}[{}].Time[0]", ELEMENTS_PATH, index)))?;
    entry_value(entry, &format!("{}[{}].Time[0]", ELEMENTS_PATH, index), key)
}

/// The first `CHART_HOURS` time slots of an element
fn chart_entries(elements: &[WeatherElement], index: usize) -> Result<&[TimeEntry], ForecastError> {
    let time = &element_at(elements, index)?.time;
    if time.len() < CHART_HOURS {
        return Err(ForecastError::InsufficientForecast {
            element: index,
            expected: CHART_HOURS,
            found: time.len(),
        });
    }
    Ok(&time[..CHART_HOURS])
}

fn series_values(entries: &[TimeEntry], index: usize, key: &str) -> Result<Vec<f64>, ForecastError> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| -> Result<f64, ForecastError> {
            let path = format!("{}[{}].Time[{}]", ELEMENTS_PATH, index, i);
            let text = entry_value(entry, &path, key)?;
            parse_number(&text).ok_or_else(|| ForecastError::InvalidValue {
                field: format!("{}.ElementValue[0].{}", path, key),
                value: text,
            })
        })
        .collect()
}

fn entry_value(entry: &TimeEntry, path: &str, key: &str) -> Result<String, ForecastError> {
    let values = entry
        .element_value
        .first()
        .ok_or_else(|| missing(format!("{}.ElementValue[0]", path)))?;
    values
        .get(key)
        .and_then(value_text)
        .ok_or_else(|| missing(format!("{}.ElementValue[0].{}", path, key)))
}

/// Element values come back as strings, occasionally as numbers
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// CWA datastore response structure
///
/// Every level defaults to empty so a missing level surfaces as a
/// `MalformedResponse` naming the path instead of a serde error.
#[derive(Debug, Default, Deserialize)]
struct ApiResponse {
    records: Option<Records>,
}

#[derive(Debug, Default, Deserialize)]
struct Records {
    #[serde(rename = "Locations", default)]
    locations: Vec<LocationGroup>,
}

#[derive(Debug, Default, Deserialize)]
struct LocationGroup {
    #[serde(rename = "Location", default)]
    location: Vec<Location>,
}

#[derive(Debug, Default, Deserialize)]
struct Location {
    #[serde(rename = "LocationName")]
    location_name: Option<String>,
    #[serde(rename = "WeatherElement", default)]
    weather_element: Vec<WeatherElement>,
}

#[derive(Debug, Default, Deserialize)]
struct WeatherElement {
    #[serde(rename = "Time", default)]
    time: Vec<TimeEntry>,
}

/// One time slot of a weather element
///
/// Hourly elements carry `DataTime`; 3-hourly ones carry `StartTime`/`EndTime`.
#[derive(Debug, Default, Deserialize)]
struct TimeEntry {
    #[serde(rename = "DataTime")]
    data_time: Option<String>,
    #[serde(rename = "StartTime")]
    start_time: Option<String>,
    #[serde(rename = "ElementValue", default)]
    element_value: Vec<Map<String, Value>>,
}

impl TimeEntry {
    fn timestamp(&self) -> Option<&str> {
        self.data_time
            .as_deref()
            .or(self.start_time.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    /// Hourly timestamps starting at 2024-07-15 14:00
    fn hour_stamp(i: usize) -> String {
        let start = NaiveDate::from_ymd_opt(2024, 7, 15)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        (start + chrono::Duration::hours(i as i64))
            .format("%Y-%m-%dT%H:%M:%S+08:00")
            .to_string()
    }

    fn hourly_element(name: &str, hours: usize, value: impl Fn(usize) -> Value) -> Value {
        let time: Vec<Value> = (0..hours)
            .map(|i| json!({ "DataTime": hour_stamp(i), "ElementValue": [value(i)] }))
            .collect();
        json!({ "ElementName": name, "Time": time })
    }

    fn three_hourly_element(name: &str, hours: usize, value: impl Fn(usize) -> Value) -> Value {
        let time: Vec<Value> = (0..hours / 3)
            .map(|i| {
                json!({
                    "StartTime": hour_stamp(i * 3),
                    "EndTime": hour_stamp(i * 3 + 3),
                    "ElementValue": [value(i)]
                })
            })
            .collect();
        json!({ "ElementName": name, "Time": time })
    }

    /// A response shaped like F-D0047-061 with the given number of hourly slots
    fn sample_response(hours: usize) -> Value {
        let elements = vec![
            hourly_element("溫度", hours, |i| {
                json!({ "Temperature": (26 + (i % 6)).to_string() })
            }),
            hourly_element("相對濕度", hours, |_| json!({ "RelativeHumidity": "78" })),
            hourly_element("體感溫度", hours, |i| {
                json!({ "ApparentTemperature": (29 + (i % 4)).to_string() })
            }),
            hourly_element("舒適度指數", hours, |_| {
                json!({ "ComfortIndex": "27", "ComfortIndexDescription": "舒適至悶熱" })
            }),
            hourly_element("風速", hours, |_| json!({ "WindSpeed": "2", "BeaufortScale": "2" })),
            three_hourly_element("3小時降雨機率", hours, |_| {
                json!({ "ProbabilityOfPrecipitation": "20" })
            }),
            three_hourly_element("天氣現象", hours, |_| {
                json!({ "Weather": "多雲午後短暫雷陣雨", "WeatherCode": "22" })
            }),
        ];

        json!({
            "success": "true",
            "records": {
                "Locations": [{
                    "DatasetDescription": "臺灣各縣市鄉鎮未來3天天氣預報",
                    "LocationsName": "臺北市",
                    "Location": [{
                        "LocationName": "大安區",
                        "Geocode": "6300300",
                        "WeatherElement": elements
                    }]
                }]
            }
        })
    }

    fn parse(value: Value) -> ApiResponse {
        serde_json::from_value(value).expect("Failed to parse response")
    }

    fn reshape(value: Value) -> Result<WeatherReport, ForecastError> {
        reshape_response("臺北市", "大安區", &parse(value))
    }

    #[test]
    fn test_reshape_current_snapshot() {
        let report = reshape(sample_response(48)).expect("Failed to reshape");
        let current = report.current;

        assert_eq!(current.city_name, "臺北市");
        assert_eq!(current.region_name, "大安區");
        assert_eq!(current.pop, "20");
        assert_eq!(current.temp, "26");
        assert_eq!(current.rh, "78");
        assert_eq!(current.wx, "多雲午後短暫雷陣雨");
        assert_eq!(current.ci, "舒適至悶熱");
        assert_eq!(current.ws, "2");
    }

    #[test]
    fn test_reshape_chart_series_is_47_hours() {
        let report = reshape(sample_response(72)).expect("Failed to reshape");
        let chart = report.chart;

        assert_eq!(chart.date.len(), CHART_HOURS);
        assert_eq!(chart.temp.len(), CHART_HOURS);
        assert_eq!(chart.apparent_temp.len(), CHART_HOURS);

        assert!((chart.temp[0] - 26.0).abs() < 0.01);
        assert!((chart.temp[5] - 31.0).abs() < 0.01);
        assert!((chart.apparent_temp[3] - 32.0).abs() < 0.01);
    }

    #[test]
    fn test_reshape_chart_labels_mark_day_boundaries() {
        let report = reshape(sample_response(48)).expect("Failed to reshape");
        let date = report.chart.date;

        // Starts at 14:00 on 07/15, so midnight lands at index 10 and 34
        assert_eq!(date[0].hour(), "14");
        assert_eq!(date[0].month_day(), Some("07/15"));
        assert_eq!(date[10].hour(), "00");
        assert_eq!(date[10].month_day(), Some("07/16"));
        assert_eq!(date[34].month_day(), Some("07/17"));

        for (i, label) in date.iter().enumerate() {
            let expect_full = i == 0 || label.hour() == "00";
            assert_eq!(label.is_full(), expect_full, "label {} has wrong shape", i);
        }
    }

    #[test]
    fn test_reshape_accepts_numeric_values() {
        let mut response = sample_response(48);
        response["records"]["Locations"][0]["Location"][0]["WeatherElement"][0] =
            hourly_element("溫度", 48, |_| json!({ "Temperature": 24.5 }));

        let report = reshape(response).expect("Failed to reshape");
        assert_eq!(report.current.temp, "24.5");
        assert!((report.chart.temp[0] - 24.5).abs() < 0.01);
    }

    #[test]
    fn test_reshape_too_few_entries() {
        let result = reshape(sample_response(46));

        match result {
            Err(ForecastError::InsufficientForecast {
                element,
                expected,
                found,
            }) => {
                assert_eq!(element, 0);
                assert_eq!(expected, 47);
                assert_eq!(found, 46);
            }
            other => panic!("Expected InsufficientForecast, got {:?}", other),
        }
    }

    #[test]
    fn test_reshape_missing_records() {
        match reshape(json!({ "success": "true" })) {
            Err(ForecastError::MalformedResponse { missing_field }) => {
                assert_eq!(missing_field, "records");
            }
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_reshape_empty_location_list() {
        let response = json!({ "records": { "Locations": [{ "Location": [] }] } });

        match reshape(response) {
            Err(ForecastError::MalformedResponse { missing_field }) => {
                assert_eq!(missing_field, "records.Locations[0].Location[0]");
            }
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_reshape_missing_element() {
        let mut response = sample_response(48);
        let elements = response["records"]["Locations"][0]["Location"][0]["WeatherElement"]
            .as_array_mut()
            .unwrap();
        elements.truncate(5);

        match reshape(response) {
            Err(ForecastError::MalformedResponse { missing_field }) => {
                assert_eq!(
                    missing_field,
                    "records.Locations[0].Location[0].WeatherElement[5]"
                );
            }
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_reshape_missing_value_key() {
        let mut response = sample_response(48);
        response["records"]["Locations"][0]["Location"][0]["WeatherElement"][4] =
            hourly_element("風速", 48, |_| json!({ "BeaufortScale": "2" }));

        match reshape(response) {
            Err(ForecastError::MalformedResponse { missing_field }) => {
                assert_eq!(
                    missing_field,
                    "records.Locations[0].Location[0].WeatherElement[4].Time[0].ElementValue[0].WindSpeed"
                );
            }
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_reshape_non_numeric_temperature() {
        let mut response = sample_response(48);
        response["records"]["Locations"][0]["Location"][0]["WeatherElement"][2] =
            hourly_element("體感溫度", 48, |i| {
                if i == 3 {
                    json!({ "ApparentTemperature": "-" })
                } else {
                    json!({ "ApparentTemperature": "30" })
                }
            });

        match reshape(response) {
            Err(ForecastError::InvalidValue { field, value }) => {
                assert_eq!(value, "-");
                assert!(field.ends_with("WeatherElement[2].Time[3].ElementValue[0].ApparentTemperature"));
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_reshape_malformed_timestamp() {
        let mut response = sample_response(48);
        response["records"]["Locations"][0]["Location"][0]["WeatherElement"][0]["Time"][7]["DataTime"] =
            json!("2024/07/15 21:00");

        let result = reshape(response);
        assert!(matches!(
            result,
            Err(ForecastError::Timestamp(ChartError::MalformedTimestamp(_)))
        ));
    }

    #[test]
    fn test_reshape_falls_back_to_start_time() {
        let mut response = sample_response(48);
        let entries = response["records"]["Locations"][0]["Location"][0]["WeatherElement"][0]["Time"]
            .as_array_mut()
            .unwrap();
        for (i, entry) in entries.iter_mut().enumerate() {
            let object = entry.as_object_mut().unwrap();
            object.remove("DataTime");
            object.insert("StartTime".to_string(), json!(hour_stamp(i)));
        }

        let report = reshape(response).expect("Failed to reshape");
        assert_eq!(report.chart.date[0].hour(), "14");
    }

    #[test]
    fn test_parse_malformed_json() {
        let result: Result<ApiResponse, _> = serde_json::from_str("{ invalid json }");
        assert!(result.is_err());
    }

    #[test]
    fn test_format_time_from_truncates_to_hour() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(8, 47, 12)
            .unwrap();
        assert_eq!(format_time_from(time), "2024-03-15T08:00:00");
    }

    #[test]
    fn test_forecast_request_uses_pinned_clock() {
        let time = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let request = ForecastRequest::new("臺北市", "大安區", "F-D0047-061").with_time_from(time);

        assert_eq!(request.time_from_param(), "2024-12-31T23:00:00");
    }

    #[test]
    fn test_taiwan_time_ignores_machine_zone() {
        let utc = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(20, 30, 0)
            .unwrap()
            .and_utc();

        let time = taiwan_time(utc);
        assert_eq!(format_time_from(time), "2024-03-16T04:00:00");
    }

    #[test]
    fn test_forecast_request_defaults_to_now() {
        let request = ForecastRequest::new("臺北市", "大安區", "F-D0047-061");
        let param = request.time_from_param();

        assert!(param.ends_with(":00:00"));
        assert!(NaiveDateTime::parse_from_str(&param, "%Y-%m-%dT%H:%M:%S").is_ok());
    }

    #[test]
    fn test_forecast_client_default_base_url() {
        let client = ForecastClient::new("key");
        assert_eq!(client.base_url(), CWA_BASE_URL);
    }

    #[test]
    fn test_forecast_client_debug_hides_key() {
        let client = ForecastClient::new("CWA-SECRET-KEY");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("CWA-SECRET-KEY"));
        assert!(debug.contains("redacted"));
    }
}
