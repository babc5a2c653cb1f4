use crate::models::HourlyRecord;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics over one fetched hourly window.
///
/// Aggregates skip missing observations rather than treating them as zero;
/// a variable with no present values at all yields `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub rows: usize,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub temp_min: Option<f64>,
    pub temp_mean: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity_mean: Option<f64>,
    pub wind_mean: Option<f64>,
    pub precipitation_total: f64,
}

/// Compute summary statistics for the full window.
pub fn summarize(records: &[HourlyRecord]) -> Summary {
    let temps: Vec<f64> = records.iter().filter_map(|r| r.temp_c).collect();
    Summary {
        rows: records.len(),
        start: records.first().map(|r| r.time),
        end: records.last().map(|r| r.time),
        temp_min: temps.iter().cloned().reduce(f64::min),
        temp_mean: mean(&temps),
        temp_max: temps.iter().cloned().reduce(f64::max),
        humidity_mean: mean(&records.iter().filter_map(|r| r.humidity_pct).collect::<Vec<_>>()),
        wind_mean: mean(&records.iter().filter_map(|r| r.wind_kmh).collect::<Vec<_>>()),
        precipitation_total: records.iter().filter_map(|r| r.precipitation).sum(),
    }
}

fn mean(vals: &[f64]) -> Option<f64> {
    if vals.is_empty() {
        None
    } else {
        Some(vals.iter().sum::<f64>() / vals.len() as f64)
    }
}

/// Mean temperature per calendar day, ordered by date.
///
/// Days where every hourly temperature is missing are omitted.
pub fn daily_mean_temperature(records: &[HourlyRecord]) -> Vec<(NaiveDate, f64)> {
    let mut groups: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for r in records {
        if let Some(t) = r.temp_c {
            groups.entry(r.time.date()).or_default().push(t);
        }
    }
    groups
        .into_iter()
        .map(|(day, vals)| {
            let m = vals.iter().sum::<f64>() / vals.len() as f64;
            (day, m)
        })
        .collect()
}

/// Total precipitation per calendar day, ordered by date.
///
/// Every day present in the window appears; missing observations
/// contribute nothing, so an all-missing day sums to 0.0.
pub fn daily_precipitation_total(records: &[HourlyRecord]) -> Vec<(NaiveDate, f64)> {
    let mut groups: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for r in records {
        *groups.entry(r.time.date()).or_default() += r.precipitation.unwrap_or(0.0);
    }
    groups.into_iter().collect()
}
