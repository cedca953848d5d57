use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{load_settings, resolve_config_path, Settings},
    controller::{events::UiEvent, orchestration::UI_EVENT_QUEUE_CAPACITY},
    ui::{theme, MedCasesApp},
};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "medcases", about = "MedCases desktop client")]
struct Args {
    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    demo_doctor_name: Option<String>,
    #[arg(long)]
    demo_student_name: Option<String>,
    /// Tracing filter directive, e.g. `medcases=debug,info`.
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(name) = self.demo_doctor_name.as_deref().map(str::trim) {
            if !name.is_empty() {
                settings.demo_doctor_name = name.to_string();
            }
        }
        if let Some(name) = self.demo_student_name.as_deref().map(str::trim) {
            if !name.is_empty() {
                settings.demo_student_name = name.to_string();
            }
        }
        if let Some(filter) = &self.log_filter {
            settings.log_filter = Some(filter.clone());
        }
    }
}

fn resolve_log_filter(settings: &Settings, rust_log: Option<String>) -> String {
    settings
        .log_filter
        .clone()
        .or(rust_log.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = resolve_config_path(args.config.as_deref());
    let mut settings = load_settings(config_path.as_deref()).context("loading settings")?;
    args.apply_to(&mut settings);

    let filter = resolve_log_filter(&settings, std::env::var("RUST_LOG").ok());
    let env_filter = EnvFilter::try_new(&filter)
        .with_context(|| format!("invalid log filter '{filter}'"))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::info!(
        config = ?config_path,
        doctor = %settings.demo_doctor_name,
        student = %settings.demo_student_name,
        "starting medcases"
    );

    let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };
    let title = settings.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            theme::apply(&cc.egui_ctx);
            Ok(Box::new(MedCasesApp::new(ui_tx, ui_rx, &settings)))
        }),
    )
    .map_err(|err| anyhow!("medcases window failed: {err}"))
}
