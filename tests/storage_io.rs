use chrono::{Duration, NaiveDate};
use meteo_rs::models::HourlyRecord;
use meteo_rs::storage;
use std::fs;

fn sample(n: usize) -> Vec<HourlyRecord> {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    (0..n)
        .map(|i| HourlyRecord {
            time: start + Duration::hours(i as i64),
            temp_c: Some(20.0 + i as f64),
            humidity_pct: Some(55.0),
            wind_kmh: if i == 1 { None } else { Some(12.5) },
            precipitation: Some(0.1 * i as f64),
        })
        .collect()
}

#[test]
fn save_csv_and_json() {
    let rows = sample(3);
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("hourly.csv");
    storage::save_csv(&rows, &csv_path).unwrap();
    let csv_txt = fs::read_to_string(&csv_path).unwrap();
    assert!(csv_txt.starts_with("time,temp_C,humidity_pct,wind_kmh,precipitation"));
    assert_eq!(csv_txt.lines().count(), 1 + rows.len());

    let json_path = dir.path().join("hourly.json");
    storage::save_json(&rows, &json_path).unwrap();
    let json_txt = fs::read_to_string(&json_path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json_txt).unwrap();
    assert_eq!(v.as_array().unwrap().len(), rows.len());
    assert_eq!(v[0]["temp_C"], 20.0);
}

#[test]
fn missing_values_become_empty_csv_fields() {
    let rows = sample(3);
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("gaps.csv");
    storage::save_csv(&rows, &csv_path).unwrap();

    let mut rdr = csv::Reader::from_path(&csv_path).unwrap();
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    // row 1 has a missing wind observation
    assert_eq!(records[1].get(3), Some(""));
    assert_eq!(records[0].get(3), Some("12.5"));
    assert_eq!(records[0].get(0), Some("2024-06-01 00:00:00"));
}
