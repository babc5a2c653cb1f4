/// Synchronous client for the **Open-Meteo** geocoding and forecast APIs.
///
/// Two endpoints are used: `geocoding-api.open-meteo.com/v1/search` to turn a
/// free-text city name into coordinates, and `api.open-meteo.com/v1/forecast`
/// for the hourly series. Both are plain unauthenticated GETs.
///
/// ### Notes
/// - Requests are **not retried**: a transport failure or non-2xx status
///   surfaces immediately as `Error::Network` / `Error::Http`.
/// - Day counts outside the provider's supported range (1-16) are not
///   validated locally; the provider's own error status propagates.
/// - Network timeouts use a sane default (30s) and can be adjusted by editing
///   the client builder.
///
/// Typical usage:
/// ```no_run
/// # use meteo_rs::Client;
/// let client = Client::default();
/// let (loc, records) = client.fetch_city_hourly("Hyderabad", 7)?;
/// println!("{} rows for {}", records.len(), loc.name);
/// # Ok::<(), meteo_rs::Error>(())
/// ```
use crate::error::{Error, Result};
use crate::models::{ForecastResponse, GeocodeResponse, HOURLY_VARIABLES, HourlyRecord, Location};
use crate::table;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client {
    pub geocode_base_url: String,
    pub forecast_base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("meteo_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            geocode_base_url: "https://geocoding-api.open-meteo.com/v1".into(),
            forecast_base_url: "https://api.open-meteo.com/v1".into(),
            http,
        }
    }
}

// Allow -, _, . unescaped in query values (common in city and timezone names)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s.trim(), SAFE).to_string()
}

impl Client {
    /// Resolve a city name to a [`Location`].
    ///
    /// Asks the geocoder for a single best match (`count=1`); no
    /// disambiguation among candidates is attempted.
    ///
    /// ### Errors
    /// - `Error::CityNotFound` when the provider returns zero results
    ///   (a blank city name lands here too)
    /// - `Error::Network` / `Error::Http` on transport failure or non-2xx
    /// - `Error::Parse` on a malformed payload
    pub fn geocode(&self, city: &str) -> Result<Location> {
        if city.trim().is_empty() {
            return Err(Error::CityNotFound(city.to_string()));
        }
        let url = format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.geocode_base_url,
            enc(city)
        );
        let resp: GeocodeResponse = self.get_json(&url)?;
        resp.top()
            .ok_or_else(|| Error::CityNotFound(city.trim().to_string()))
    }

    /// Fetch the raw hourly series for a coordinate pair.
    ///
    /// Requests temperature, relative humidity, wind speed and precipitation
    /// over `days` forecast days, with timestamps in the given timezone
    /// (`"auto"` lets the provider pick the local one).
    pub fn fetch_hourly(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
        days: u8,
    ) -> Result<ForecastResponse> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&hourly={}&forecast_days={}&timezone={}",
            self.forecast_base_url,
            latitude,
            longitude,
            HOURLY_VARIABLES,
            days,
            enc(timezone)
        );
        self.get_json(&url)
    }

    /// Run the full geocode → fetch → table pipeline for one city.
    ///
    /// The geocoding call must complete before the forecast call begins,
    /// since the latter needs the former's coordinates. Returns the resolved
    /// location together with the sorted hourly records.
    pub fn fetch_city_hourly(&self, city: &str, days: u8) -> Result<(Location, Vec<HourlyRecord>)> {
        let loc = self.geocode(city)?;
        let raw = self.fetch_hourly(loc.latitude, loc.longitude, &loc.timezone, days)?;
        let records = table::build_table(&raw.hourly)?;
        Ok((loc, records))
    }

    /// Single GET with an explicit parse step, so a malformed body maps to
    /// `Error::Parse` rather than a transport error.
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {}", url);
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http(status));
        }
        let body = resp.text()?;
        serde_json::from_str(&body).map_err(|e| Error::Parse(e.to_string()))
    }
}
