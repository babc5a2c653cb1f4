//! Chart rendering with Plotters.
//!
//! Three chart kinds: the hourly temperature line over the full fetched
//! window, daily mean temperature bars, and daily precipitation bars.
//! File output picks the backend from the extension (`.svg`, else bitmap);
//! the GUI renders into an in-memory RGB buffer instead so nothing is
//! persisted. Each call draws a complete figure; no plotting state is
//! shared between calls.

use crate::models::HourlyRecord;
use crate::stats;
use anyhow::{Result, anyhow};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;

/// Which of the three figures to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    HourlyTemperature,
    DailyMeanTemperature,
    DailyPrecipitation,
}

// Office chart palette: blue for temperature, light blue for precipitation.
const TEMP_COLOR: RGBColor = RGBColor(68, 114, 196);
const PRECIP_COLOR: RGBColor = RGBColor(91, 155, 213);

/// Render one chart to a file. `.svg` paths get the SVG backend, anything
/// else the bitmap backend (PNG at the sizes the CLI uses).
pub fn plot_chart<P: AsRef<Path>>(
    records: &[HourlyRecord],
    out_path: P,
    width: u32,
    height: u32,
    city: &str,
    kind: ChartKind,
) -> Result<()> {
    if records.is_empty() {
        return Err(anyhow!("no data to plot"));
    }

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, records, city, kind)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, records, city, kind)?;
    }

    Ok(())
}

/// Render one chart into a `width * height * 3` RGB buffer.
pub fn render_chart_rgb(
    records: &[HourlyRecord],
    width: u32,
    height: u32,
    city: &str,
    kind: ChartKind,
) -> Result<Vec<u8>> {
    if records.is_empty() {
        return Err(anyhow!("no data to plot"));
    }

    let mut buf = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        draw_chart(root, records, city, kind)?;
    }
    Ok(buf)
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    records: &[HourlyRecord],
    city: &str,
    kind: ChartKind,
) -> Result<()>
where
    DB: DrawingBackend,
{
    match kind {
        ChartKind::HourlyTemperature => draw_hourly_line(root, records, city),
        ChartKind::DailyMeanTemperature => {
            let daily = stats::daily_mean_temperature(records);
            draw_daily_bars(
                root,
                &daily,
                &format!("Daily Avg Temperature - {}", city),
                "Avg Temp (°C)",
                TEMP_COLOR,
            )
        }
        ChartKind::DailyPrecipitation => {
            let daily = stats::daily_precipitation_total(records);
            draw_daily_bars(
                root,
                &daily,
                &format!("Daily Precipitation - {}", city),
                "Total Precipitation (mm)",
                PRECIP_COLOR,
            )
        }
    }
}

fn draw_hourly_line<DB>(
    root: DrawingArea<DB, Shift>,
    records: &[HourlyRecord],
    city: &str,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let series: Vec<(NaiveDateTime, f64)> = records
        .iter()
        .filter_map(|r| r.temp_c.map(|t| (r.time, t)))
        .collect();
    if series.is_empty() {
        return Err(anyhow!("no temperature values to plot"));
    }

    let mut t0 = series[0].0;
    let mut t1 = series[series.len() - 1].0;
    if t0 == t1 {
        t0 -= Duration::hours(1);
        t1 += Duration::hours(1);
    }

    let (mut min_val, mut max_val) = (
        series.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min),
        series
            .iter()
            .map(|(_, v)| *v)
            .fold(f64::NEG_INFINITY, f64::max),
    );
    if (max_val - min_val).abs() < f64::EPSILON {
        min_val -= 1.0;
        max_val += 1.0;
    }

    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("Hourly Temperature - {}", city),
            (FontFamily::SansSerif, 24),
        )
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .build_cartesian_2d(t0..t1, min_val..max_val)
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_mesh()
        .x_desc("Time")
        .y_desc("Temperature (°C)")
        .x_labels(8)
        .y_labels(10)
        .x_label_formatter(&|t: &NaiveDateTime| t.format("%d-%b %H:%M").to_string())
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let style = ShapeStyle {
        color: TEMP_COLOR.to_rgba(),
        filled: false,
        stroke_width: 2,
    };
    chart
        .draw_series(LineSeries::new(series, style))
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_daily_bars<DB>(
    root: DrawingArea<DB, Shift>,
    daily: &[(NaiveDate, f64)],
    title: &str,
    y_desc: &str,
    color: RGBColor,
) -> Result<()>
where
    DB: DrawingBackend,
{
    if daily.is_empty() {
        return Err(anyhow!("no daily values to plot"));
    }

    let n = daily.len();
    let labels: Vec<String> = daily
        .iter()
        .map(|(d, _)| d.format("%d-%b").to_string())
        .collect();

    let min_val = daily
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::INFINITY, f64::min);
    let max_val = daily
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::NEG_INFINITY, f64::max);
    let mut y_lo = min_val.min(0.0);
    let mut y_hi = max_val.max(0.0);
    if (y_hi - y_lo).abs() < f64::EPSILON {
        // all-zero series (a dry week): keep a visible axis
        y_hi = y_lo + 1.0;
    }
    let pad = (y_hi - y_lo) * 0.1;
    if y_lo < 0.0 {
        y_lo -= pad;
    }
    if y_hi > 0.0 {
        y_hi += pad;
    }

    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, (FontFamily::SansSerif, 24))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), y_lo..y_hi)
        .map_err(|e| anyhow!("{:?}", e))?;

    // Label positions land on whole bar indices; anything else stays blank.
    let x_label_fmt = |x: &f64| {
        let i = x.round();
        if (x - i).abs() > 1e-6 || i < 0.0 || i as usize >= labels.len() {
            String::new()
        } else {
            labels[i as usize].clone()
        }
    };

    chart
        .configure_mesh()
        .x_desc("Day")
        .y_desc(y_desc)
        .x_labels(n.min(16))
        .y_labels(10)
        .x_label_formatter(&x_label_fmt)
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    for (i, (_, v)) in daily.iter().enumerate() {
        let x0 = i as f64 - 0.4;
        let x1 = i as f64 + 0.4;
        let y0 = 0.0f64.min(*v);
        let y1 = 0.0f64.max(*v);
        let rect = Rectangle::new([(x0, y0), (x1, y1)], color.to_rgba().filled());
        chart
            .draw_series(std::iter::once(rect))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
