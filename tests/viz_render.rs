use chrono::{Duration, NaiveDate};
use meteo_rs::models::HourlyRecord;
use meteo_rs::viz::{self, ChartKind};
use std::fs;
use std::path::PathBuf;

fn sample_records(hours: usize) -> Vec<HourlyRecord> {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    (0..hours)
        .map(|i| HourlyRecord {
            time: start + Duration::hours(i as i64),
            temp_c: Some(18.0 + ((i % 24) as f64 - 12.0).abs() * 0.5),
            humidity_pct: Some(60.0),
            wind_kmh: Some(10.0),
            precipitation: Some(if i % 7 == 0 { 1.2 } else { 0.0 }),
        })
        .collect()
}

fn write_and_check<F: Fn(&PathBuf)>(maker: F, name: &str, ext: &str) {
    let tmp = std::env::temp_dir();
    let path: PathBuf = tmp.join(format!("meteo_viz_{}.{}", name, ext));
    maker(&path);
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "chart file has content");
    fs::remove_file(&path).ok();
}

#[test]
fn all_chart_kinds_produce_svg_files() {
    let records = sample_records(72);
    let kinds = [
        ChartKind::HourlyTemperature,
        ChartKind::DailyMeanTemperature,
        ChartKind::DailyPrecipitation,
    ];
    for (i, kind) in kinds.iter().enumerate() {
        write_and_check(
            |p| {
                viz::plot_chart(&records, p, 800, 480, "Testville", *kind).unwrap();
            },
            &format!("kind{}", i),
            "svg",
        );
    }
}

#[test]
fn png_output_works() {
    let records = sample_records(48);
    write_and_check(
        |p| {
            viz::plot_chart(&records, p, 800, 480, "Testville", ChartKind::HourlyTemperature)
                .unwrap();
        },
        "png_line",
        "png",
    );
}

#[test]
fn rgb_buffer_has_expected_size() {
    let records = sample_records(48);
    for kind in [
        ChartKind::HourlyTemperature,
        ChartKind::DailyMeanTemperature,
        ChartKind::DailyPrecipitation,
    ] {
        let buf = viz::render_chart_rgb(&records, 320, 200, "Testville", kind).unwrap();
        assert_eq!(buf.len(), 320 * 200 * 3);
        // something must have been drawn over the white fill
        assert!(buf.iter().any(|&b| b != 255));
    }
}

#[test]
fn empty_records_is_error() {
    let records: Vec<HourlyRecord> = vec![];
    let tmp = std::env::temp_dir().join("meteo_viz_empty.svg");
    let e = viz::plot_chart(&records, &tmp, 800, 480, "Empty", ChartKind::HourlyTemperature);
    assert!(e.is_err());
    assert!(viz::render_chart_rgb(&records, 320, 200, "Empty", ChartKind::HourlyTemperature).is_err());
}

#[test]
fn all_missing_temperatures_is_error() {
    let mut records = sample_records(24);
    for r in &mut records {
        r.temp_c = None;
    }
    let tmp = std::env::temp_dir().join("meteo_viz_all_missing.svg");
    let e = viz::plot_chart(&records, &tmp, 800, 480, "Gaps", ChartKind::HourlyTemperature);
    assert!(e.is_err());
    fs::remove_file(&tmp).ok();
}

#[test]
fn dry_window_precipitation_chart_still_renders() {
    let mut records = sample_records(48);
    for r in &mut records {
        r.precipitation = Some(0.0);
    }
    write_and_check(
        |p| {
            viz::plot_chart(&records, p, 800, 480, "Dryville", ChartKind::DailyPrecipitation)
                .unwrap();
        },
        "dry_precip",
        "svg",
    );
}
