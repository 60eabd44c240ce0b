//! University Records - desktop record manager for students, faculty and hostels.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use university_records as app;

use app::config::{AppConfig, ConfigLoadResult, LoggingConfig};
use app::ui::{App, LOGIN_SIZE};

/// Desktop record manager for students, faculty, courses and hostels.
#[derive(Parser)]
#[command(name = "university-records")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,

    /// Write a config file with default values and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    if cli.write_default_config {
        match AppConfig::default().save(&config_path) {
            Ok(()) => println!("Wrote {}", config_path.display()),
            Err(e) => eprintln!("Failed to write {}: {}", config_path.display(), e),
        }
        return Ok(());
    }

    let load_result = AppConfig::try_load(&config_path);
    let (config, initial_error) = match &load_result {
        ConfigLoadResult::Loaded(config) => (config.clone(), None),
        ConfigLoadResult::Missing => (AppConfig::default(), None),
        ConfigLoadResult::Invalid(e) => (AppConfig::default(), Some(e.to_string())),
    };

    // Initialize logging
    let _log_guard = init_logging(&config.logging);

    tracing::info!("University Records starting...");
    tracing::info!("Config path: {:?}", config_path);
    match &load_result {
        ConfigLoadResult::Loaded(_) => tracing::info!("Config loaded successfully"),
        ConfigLoadResult::Missing => tracing::info!("Config missing, using defaults"),
        ConfigLoadResult::Invalid(e) => tracing::warn!("Config invalid, using defaults: {}", e),
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Login")
            .with_inner_size(LOGIN_SIZE)
            .with_min_inner_size(LOGIN_SIZE)
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "University Records",
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(App::new(config, initial_error)))
        }),
    )
}

/// Set up stderr logging plus an optional daily rolling log file.
///
/// The returned guard flushes the file writer on drop and must outlive the app.
fn init_logging(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let file = if logging.file_enabled {
        file_writer(logging)
            .map_err(|e| eprintln!("File logging disabled: {:#}", e))
            .ok()
    } else {
        None
    };
    let (writer, guard) = file.unzip();
    let file_layer = writer.map(|w| fmt::layer().with_ansi(false).with_writer(w));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Open the daily rolling log file behind a non-blocking writer.
fn file_writer(logging: &LoggingConfig) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let dir = logging.resolved_directory();
    std::fs::create_dir_all(&dir).with_context(|| format!("creating log directory {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("university-records")
        .filename_suffix("log")
        .build(&dir)
        .with_context(|| format!("opening log file in {}", dir.display()))?;

    Ok(tracing_appender::non_blocking(appender))
}
