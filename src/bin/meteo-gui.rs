/*!
 * GUI application for meteo-rs - Open-Meteo forecast fetcher and visualizer
 *
 * A cross-platform desktop dashboard providing an intuitive interface for:
 * - Entering a city and forecast day count
 * - Viewing summary metrics and a data preview
 * - Viewing the three forecast charts inline (nothing is written to disk)
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use meteo_rs::viz::{self, ChartKind};
use meteo_rs::{Client, ForecastCache, HourlyRecord, Location, stats};
use std::sync::mpsc;
use std::thread;

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Open-Meteo Weather - meteo-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "Open-Meteo Weather",
        options,
        Box::new(|_cc| Ok(Box::new(MeteoApp::new()))),
    )
}

/// The three inline figures, rendered at fixed pixel sizes.
const CHARTS: [(ChartKind, &str, u32, u32); 3] = [
    (ChartKind::HourlyTemperature, "Hourly Temperature", 920, 340),
    (
        ChartKind::DailyMeanTemperature,
        "Daily Average Temperature",
        780,
        320,
    ),
    (ChartKind::DailyPrecipitation, "Daily Precipitation", 780, 320),
];

/// How many preview rows to show below the metrics.
const PREVIEW_ROWS: usize = 24;

/// Main application state
struct MeteoApp {
    // Input fields
    city: String,
    days: u8,

    // UI state
    is_loading: bool,
    error_message: String,

    // Last successful fetch and its rendered charts
    result: Option<FetchResult>,
    charts: Option<Vec<ChartTexture>>,

    // Session-owned result memoization
    cache: ForecastCache,

    // Background operation
    operation_receiver: Option<mpsc::Receiver<FetchOutcome>>,
}

struct FetchResult {
    location: Location,
    records: Vec<HourlyRecord>,
    summary: stats::Summary,
}

struct ChartTexture {
    title: &'static str,
    handle: egui::TextureHandle,
    size: egui::Vec2,
}

enum FetchOutcome {
    Success {
        location: Location,
        records: Vec<HourlyRecord>,
    },
    Error(String),
}

impl MeteoApp {
    fn new() -> Self {
        Self {
            city: "Hyderabad".to_string(),
            days: 7,
            is_loading: false,
            error_message: String::new(),
            result: None,
            charts: None,
            cache: ForecastCache::default(),
            operation_receiver: None,
        }
    }

    fn start_fetch(&mut self) {
        if self.city.trim().is_empty() {
            self.error_message = "Please enter a city name".to_string();
            return;
        }

        self.error_message.clear();

        // Recent identical request: reuse the session cache, skip the network
        if let Some((location, records)) = self.cache.get(&self.city, self.days) {
            self.apply_result(location, records);
            return;
        }

        self.is_loading = true;
        self.result = None;
        self.charts = None;

        let (sender, receiver) = mpsc::channel();
        self.operation_receiver = Some(receiver);

        let city = self.city.clone();
        let days = self.days;

        // Spawn background thread so the frame loop stays live; the
        // pipeline itself runs sequentially (geocode, then forecast).
        thread::spawn(move || {
            let client = Client::default();
            let outcome = match client.fetch_city_hourly(&city, days) {
                Ok((location, records)) => FetchOutcome::Success { location, records },
                Err(e) => FetchOutcome::Error(e.to_string()),
            };
            let _ = sender.send(outcome);
        });
    }

    fn check_operation_result(&mut self) {
        if let Some(receiver) = &self.operation_receiver
            && let Ok(outcome) = receiver.try_recv()
        {
            self.is_loading = false;
            self.operation_receiver = None;

            match outcome {
                FetchOutcome::Success { location, records } => {
                    if records.is_empty() {
                        self.error_message = "City not found or no data.".to_string();
                        return;
                    }
                    self.cache
                        .insert(&self.city, self.days, location.clone(), records.clone());
                    self.apply_result(location, records);
                }
                FetchOutcome::Error(error) => {
                    self.error_message = error;
                }
            }
        }
    }

    fn apply_result(&mut self, location: Location, records: Vec<HourlyRecord>) {
        let summary = stats::summarize(&records);
        self.result = Some(FetchResult {
            location,
            records,
            summary,
        });
        self.charts = None;
        self.error_message.clear();
    }

    /// Render the three charts into textures once per result.
    fn ensure_charts(&mut self, ctx: &egui::Context) {
        if self.charts.is_some() {
            return;
        }
        let Some(result) = &self.result else {
            return;
        };

        let mut textures = Vec::new();
        for (kind, title, w, h) in CHARTS {
            match viz::render_chart_rgb(&result.records, w, h, &result.location.name, kind) {
                Ok(buf) => {
                    let image = egui::ColorImage::from_rgb([w as usize, h as usize], &buf);
                    let handle = ctx.load_texture(title, image, egui::TextureOptions::LINEAR);
                    textures.push(ChartTexture {
                        title,
                        handle,
                        size: egui::vec2(w as f32, h as f32),
                    });
                }
                Err(e) => {
                    self.error_message = format!("Failed to render chart: {}", e);
                }
            }
        }
        self.charts = Some(textures);
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{:.1}", x),
        _ => "NA".to_string(),
    }
}

impl eframe::App for MeteoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background operations
        self.check_operation_result();
        self.ensure_charts(ctx);

        // Request repaint if loading (for spinner animation)
        if self.is_loading {
            ctx.request_repaint();
        }

        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Controls");
            ui.add_space(10.0);

            ui.label("City name");
            ui.text_edit_singleline(&mut self.city)
                .on_hover_text("Free text, e.g. Hyderabad");
            ui.add_space(5.0);

            ui.label("Forecast days");
            ui.add(egui::Slider::new(&mut self.days, 3..=16));
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!self.is_loading, egui::Button::new("Fetch data"))
                    .clicked()
                {
                    self.start_fetch();
                }
                if self.is_loading {
                    ui.spinner();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Open-Meteo Weather Dashboard");
                ui.add_space(10.0);

                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                    return;
                }

                if self.is_loading {
                    ui.label("Contacting API...");
                    return;
                }

                let Some(result) = &self.result else {
                    ui.label("Enter a city on the left and click \"Fetch data\".");
                    return;
                };

                let loc = &result.location;
                ui.strong(format!(
                    "{}, {}  ({:.2}, {:.2}) - tz: {}",
                    loc.name, loc.country, loc.latitude, loc.longitude, loc.timezone
                ));
                ui.add_space(10.0);

                let s = &result.summary;
                ui.columns(4, |cols| {
                    metric(&mut cols[0], "Min Temp (°C)", fmt_opt(s.temp_min));
                    metric(&mut cols[1], "Avg Temp (°C)", fmt_opt(s.temp_mean));
                    metric(&mut cols[2], "Max Temp (°C)", fmt_opt(s.temp_max));
                    metric(
                        &mut cols[3],
                        "Total Rain (mm)",
                        format!("{:.1}", s.precipitation_total),
                    );
                });
                ui.add_space(15.0);

                ui.label("Sample data");
                egui::Grid::new("preview")
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("time");
                        ui.strong("temp_C");
                        ui.strong("humidity_pct");
                        ui.strong("wind_kmh");
                        ui.strong("precipitation");
                        ui.end_row();
                        for r in result.records.iter().take(PREVIEW_ROWS) {
                            ui.label(r.time.format("%Y-%m-%d %H:%M").to_string());
                            ui.label(fmt_opt(r.temp_c));
                            ui.label(fmt_opt(r.humidity_pct));
                            ui.label(fmt_opt(r.wind_kmh));
                            ui.label(fmt_opt(r.precipitation));
                            ui.end_row();
                        }
                    });
                ui.add_space(15.0);

                if let Some(charts) = &self.charts {
                    for chart in charts {
                        ui.label(chart.title);
                        ui.image((chart.handle.id(), chart.size));
                        ui.add_space(10.0);
                    }
                }
            });
        });
    }
}

fn metric(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(label);
    ui.heading(value);
}
