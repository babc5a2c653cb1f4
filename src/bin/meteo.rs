use anyhow::Result;
use clap::Parser;
use meteo_rs::viz::ChartKind;
use meteo_rs::{Client, stats, storage, viz};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "meteo",
    version,
    about = "Fetch hourly Open-Meteo forecasts, export data & create charts"
)]
struct Cli {
    /// City name, e.g., Hyderabad
    #[arg(long)]
    city: String,
    /// Forecast days (1-16)
    #[arg(long, default_value_t = 7)]
    days: u8,
    /// Output folder
    #[arg(long, default_value = "outputs")]
    outdir: PathBuf,
    /// Data export format (csv or json)
    #[arg(long, value_enum, default_value = "csv")]
    format: OutFormat,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OutFormat {
    Csv,
    Json,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{:.1}", x),
        _ => "NA".to_string(),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = cli.outdir.join("data");
    let figs_dir = cli.outdir.join("figs");
    fs::create_dir_all(&data_dir)?;
    fs::create_dir_all(&figs_dir)?;

    let client = Client::default();
    let (loc, records) = client.fetch_city_hourly(&cli.city, cli.days)?;
    println!(
        "-> {}, {} @ ({}, {}) | tz={}",
        loc.name, loc.country, loc.latitude, loc.longitude, loc.timezone
    );
    if records.is_empty() {
        anyhow::bail!("no hourly data returned for '{}'", loc.name);
    }

    let stem = format!(
        "{}_hourly_{}d",
        loc.name.to_lowercase().replace(' ', "_"),
        cli.days
    );
    let data_path = match cli.format {
        OutFormat::Csv => {
            let p = data_dir.join(format!("{stem}.csv"));
            storage::save_csv(&records, &p)?;
            p
        }
        OutFormat::Json => {
            let p = data_dir.join(format!("{stem}.json"));
            storage::save_json(&records, &p)?;
            p
        }
    };
    println!("Saved data to {}", data_path.display());

    let s = stats::summarize(&records);
    println!("=== Quick Stats ===");
    println!(
        "Rows: {} | From {} to {}",
        s.rows,
        s.start.map(|t| t.to_string()).unwrap_or_default(),
        s.end.map(|t| t.to_string()).unwrap_or_default()
    );
    println!(
        "Temp °C -> min: {}, mean: {}, max: {}",
        fmt_opt(s.temp_min),
        fmt_opt(s.temp_mean),
        fmt_opt(s.temp_max)
    );
    println!("Humidity % -> mean: {}", fmt_opt(s.humidity_mean));
    println!("Wind km/h -> mean: {}", fmt_opt(s.wind_mean));
    println!("Total precipitation (mm): {:.1}", s.precipitation_total);

    viz::plot_chart(
        &records,
        figs_dir.join("01_temperature_line.png"),
        1650,
        600,
        &loc.name,
        ChartKind::HourlyTemperature,
    )?;
    viz::plot_chart(
        &records,
        figs_dir.join("02_daily_avg_temp.png"),
        1200,
        600,
        &loc.name,
        ChartKind::DailyMeanTemperature,
    )?;
    viz::plot_chart(
        &records,
        figs_dir.join("03_daily_precipitation.png"),
        1200,
        600,
        &loc.name,
        ChartKind::DailyPrecipitation,
    )?;
    println!("Charts saved to {}", figs_dir.display());

    Ok(())
}
