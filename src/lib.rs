//! meteo-rs
//!
//! A lightweight Rust library for fetching, storing, visualizing, and
//! summarizing hourly Open-Meteo weather forecasts. Pairs with the `meteo`
//! CLI and the `meteo-gui` desktop dashboard.
//!
//! ### Features
//! - Geocode a free-text city name to coordinates and a timezone
//! - Fetch hourly temperature, humidity, wind and precipitation for 1-16 days
//! - Reshape the raw series into a sorted, time-indexed table
//! - Quick summary statistics and daily aggregates
//! - Generate SVG/PNG charts from the data
//!
//! ### Example
//! ```no_run
//! use meteo_rs::{Client, stats, storage, viz};
//!
//! let client = Client::default();
//! let (loc, records) = client.fetch_city_hourly("Hyderabad", 7)?;
//! storage::save_csv(&records, "hyderabad_hourly_7d.csv")?;
//! viz::plot_chart(&records, "temp.svg", 1000, 400, &loc.name,
//!     viz::ChartKind::HourlyTemperature)?;
//! let summary = stats::summarize(&records);
//! println!("{:#?}", summary);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod cache;
pub mod error;
pub mod models;
pub mod stats;
pub mod storage;
pub mod table;
pub mod viz;

pub use api::Client;
pub use cache::ForecastCache;
pub use error::Error;
pub use models::{HourlyRecord, Location};
