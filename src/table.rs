//! Turn the provider's parallel hourly arrays into sorted, typed rows.

use crate::error::{Error, Result};
use crate::models::{HourlyRecord, HourlySeries};
use chrono::NaiveDateTime;

/// Build the hourly table from a raw series.
///
/// Every variable array must be as long as `time`; a mismatch means the
/// payload is malformed and the whole request is rejected. Timestamps are
/// local to the requested timezone and parsed as naive datetimes. The
/// provider sends rows already sorted, but ascending order is enforced
/// here anyway since everything downstream assumes it.
pub fn build_table(hourly: &HourlySeries) -> Result<Vec<HourlyRecord>> {
    let n = hourly.time.len();
    for (key, len) in [
        ("temperature_2m", hourly.temperature_2m.len()),
        ("relative_humidity_2m", hourly.relative_humidity_2m.len()),
        ("wind_speed_10m", hourly.wind_speed_10m.len()),
        ("precipitation", hourly.precipitation.len()),
    ] {
        if len != n {
            return Err(Error::Parse(format!(
                "hourly array '{}' has {} entries, expected {}",
                key, len, n
            )));
        }
    }

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        rows.push(HourlyRecord {
            time: parse_time(&hourly.time[i])?,
            temp_c: hourly.temperature_2m[i],
            humidity_pct: hourly.relative_humidity_2m[i],
            wind_kmh: hourly.wind_speed_10m[i],
            precipitation: hourly.precipitation[i],
        });
    }
    rows.sort_by_key(|r| r.time);
    Ok(rows)
}

/// Open-Meteo sends `iso8601` minute precision ("2024-06-01T13:00"); accept
/// a seconds-bearing variant as well.
fn parse_time(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| Error::Parse(format!("bad timestamp '{}': {}", s, e)))
}
