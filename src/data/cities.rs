//! Static table of Taiwan counties and cities
//!
//! Maps each county or city to its CWA 3-day township forecast dataset. Only
//! the 3-day datasets carry the hourly temperature the chart needs.

/// A county or city with its township forecast dataset id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    /// Official name, using 臺 rather than 台
    pub name: &'static str,
    /// Hourly township forecast for the next 3 days
    pub three_day_dataset: &'static str,
}

impl City {
    const fn new(name: &'static str, three_day_dataset: &'static str) -> Self {
        Self {
            name,
            three_day_dataset,
        }
    }
}

/// All 22 counties and cities
pub static CITIES: [City; 22] = [
    City::new("宜蘭縣", "F-D0047-001"),
    City::new("桃園市", "F-D0047-005"),
    City::new("新竹縣", "F-D0047-009"),
    City::new("苗栗縣", "F-D0047-013"),
    City::new("彰化縣", "F-D0047-017"),
    City::new("南投縣", "F-D0047-021"),
    City::new("雲林縣", "F-D0047-025"),
    City::new("嘉義縣", "F-D0047-029"),
    City::new("屏東縣", "F-D0047-033"),
    City::new("臺東縣", "F-D0047-037"),
    City::new("花蓮縣", "F-D0047-041"),
    City::new("澎湖縣", "F-D0047-045"),
    City::new("基隆市", "F-D0047-049"),
    City::new("新竹市", "F-D0047-053"),
    City::new("嘉義市", "F-D0047-057"),
    City::new("臺北市", "F-D0047-061"),
    City::new("高雄市", "F-D0047-065"),
    City::new("新北市", "F-D0047-069"),
    City::new("臺中市", "F-D0047-073"),
    City::new("臺南市", "F-D0047-077"),
    City::new("連江縣", "F-D0047-081"),
    City::new("金門縣", "F-D0047-085"),
];

/// Look up a county or city by name
///
/// Accepts the common 台 spelling for 臺 and ignores surrounding whitespace.
pub fn get_city_by_name(name: &str) -> Option<&'static City> {
    let normalized = name.trim().replace('台', "臺");
    CITIES.iter().find(|city| city.name == normalized)
}

/// Get all counties and cities
pub fn all_cities() -> &'static [City] {
    &CITIES
}
