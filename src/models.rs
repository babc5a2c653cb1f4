use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Hourly variables requested from the forecast endpoint, in wire order.
pub const HOURLY_VARIABLES: &str =
    "temperature_2m,relative_humidity_2m,wind_speed_10m,precipitation";

/// A place resolved by the geocoding endpoint.
///
/// `country` and `timezone` are optional in the provider payload; they
/// default to an empty string and `"auto"` respectively so a partial
/// result still drives a forecast request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "auto".to_string()
}

/// Top-level geocoding payload. `results` is absent entirely when the
/// query has no match, so it defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<Location>,
}

impl GeocodeResponse {
    /// Best match, if any. The provider orders by relevance and we request
    /// `count=1`, so the first entry is the only candidate considered.
    pub fn top(self) -> Option<Location> {
        self.results.into_iter().next()
    }
}

/// Raw hourly series from the forecast endpoint: one timestamp array plus
/// one parallel value array per requested variable, all equal length.
/// Individual observations may be `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub relative_humidity_2m: Vec<Option<f64>>,
    pub wind_speed_10m: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
}

/// Top-level forecast payload (only the parts this crate consumes).
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub hourly: HourlySeries,
}

/// One forecast hour in local time, with the provider variable names
/// shortened to the canonical column names (`precipitation` keeps its
/// original name). Missing provider values stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourlyRecord {
    pub time: NaiveDateTime,
    #[serde(rename = "temp_C")]
    pub temp_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub wind_kmh: Option<f64>,
    pub precipitation: Option<f64>,
}
