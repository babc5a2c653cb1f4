use crate::models::HourlyRecord;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save hourly records as CSV with header. Times are written in local
/// wall-clock form; missing observations become empty fields.
pub fn save_csv<P: AsRef<Path>>(records: &[HourlyRecord], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("time", "temp_C", "humidity_pct", "wind_kmh", "precipitation"))?;
    for r in records {
        wtr.serialize((
            r.time.format("%Y-%m-%d %H:%M:%S").to_string(),
            r.temp_c,
            r.humidity_pct,
            r.wind_kmh,
            r.precipitation,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save hourly records as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(records: &[HourlyRecord], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(records)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
