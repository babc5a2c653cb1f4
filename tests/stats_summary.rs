use chrono::{Datelike, Duration, NaiveDate};
use meteo_rs::models::HourlyRecord;
use meteo_rs::stats::{daily_mean_temperature, daily_precipitation_total, summarize};

fn record(day: u32, hour: u32, temp: Option<f64>, precip: Option<f64>) -> HourlyRecord {
    HourlyRecord {
        time: NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap(),
        temp_c: temp,
        humidity_pct: Some(60.0),
        wind_kmh: Some(10.0),
        precipitation: precip,
    }
}

#[test]
fn known_fixture_gives_exact_extremes() {
    // 22 hours at 10 °C, one at 20 °C, one at 30 °C
    let mut rows: Vec<HourlyRecord> = (0..22)
        .map(|h| record(1, h, Some(10.0), Some(0.0)))
        .collect();
    rows.push(record(1, 22, Some(20.0), Some(0.0)));
    rows.push(record(1, 23, Some(30.0), Some(0.0)));

    let s = summarize(&rows);
    assert_eq!(s.rows, 24);
    assert_eq!(s.temp_min, Some(10.0));
    assert_eq!(s.temp_max, Some(30.0));
    let expected = (22.0 * 10.0 + 20.0 + 30.0) / 24.0;
    assert!((s.temp_mean.unwrap() - expected).abs() < 1e-9);
    assert_eq!(s.humidity_mean, Some(60.0));
    assert_eq!(s.wind_mean, Some(10.0));
}

#[test]
fn missing_values_are_skipped_not_zeroed() {
    let rows = vec![
        record(1, 0, Some(10.0), Some(1.0)),
        record(1, 1, None, None),
        record(1, 2, Some(20.0), Some(2.0)),
    ];
    let s = summarize(&rows);
    // a zero-coerced gap would drag the mean to 10.0
    assert_eq!(s.temp_mean, Some(15.0));
    assert_eq!(s.precipitation_total, 3.0);
}

#[test]
fn all_missing_variable_yields_none() {
    let rows = vec![record(1, 0, None, None), record(1, 1, None, None)];
    let s = summarize(&rows);
    assert_eq!(s.temp_min, None);
    assert_eq!(s.temp_mean, None);
    assert_eq!(s.temp_max, None);
    assert_eq!(s.precipitation_total, 0.0);
}

#[test]
fn empty_input_summary() {
    let s = summarize(&[]);
    assert_eq!(s.rows, 0);
    assert_eq!(s.start, None);
    assert_eq!(s.end, None);
    assert_eq!(s.temp_mean, None);
    assert_eq!(s.precipitation_total, 0.0);
}

#[test]
fn window_bounds_come_from_first_and_last_row() {
    let rows: Vec<HourlyRecord> = (0..48)
        .map(|i| {
            let mut r = record(1, 0, Some(20.0), Some(0.0));
            r.time += Duration::hours(i);
            r
        })
        .collect();
    let s = summarize(&rows);
    assert_eq!(s.start, Some(rows[0].time));
    assert_eq!(s.end, Some(rows[47].time));
}

#[test]
fn daily_mean_groups_by_calendar_day() {
    let mut rows = Vec::new();
    for h in 0..24 {
        rows.push(record(1, h, Some(10.0), Some(0.0)));
    }
    for h in 0..24 {
        rows.push(record(2, h, Some(20.0), Some(0.5)));
    }
    let daily = daily_mean_temperature(&rows);
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].0, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(daily[0].1, 10.0);
    assert_eq!(daily[1].1, 20.0);
}

#[test]
fn daily_precipitation_sums_match_direct_total() {
    let rows: Vec<HourlyRecord> = (0..72)
        .map(|i| {
            let mut r = record(1, 0, Some(20.0), Some((i % 5) as f64 * 0.2));
            r.time += Duration::hours(i);
            r
        })
        .collect();

    let direct = summarize(&rows).precipitation_total;
    let resampled: f64 = daily_precipitation_total(&rows).iter().map(|(_, v)| v).sum();
    assert!((direct - resampled).abs() < 1e-9);
    assert_eq!(daily_precipitation_total(&rows).len(), 3);
}

#[test]
fn days_without_temperature_are_omitted_from_daily_mean() {
    let rows = vec![
        record(1, 0, Some(15.0), Some(0.0)),
        record(2, 0, None, Some(0.0)),
        record(3, 0, Some(25.0), Some(0.0)),
    ];
    let daily = daily_mean_temperature(&rows);
    assert_eq!(daily.len(), 2);
    assert!(
        daily
            .iter()
            .all(|(d, _)| d.day() == 1 || d.day() == 3)
    );
}
