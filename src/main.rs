// StudyLens - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Analyzer construction
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use studylens::app;
pub use studylens::core;
pub use studylens::platform;
pub use studylens::ui;
pub use studylens::util;

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

/// StudyLens - turn a document into study material.
///
/// Pick a document and StudyLens produces a summary, key points, study notes
/// and practice questions for it.
#[derive(Parser, Debug)]
#[command(name = "StudyLens", version, about)]
struct Cli {
    /// Document to pre-select (opens with nothing selected if omitted).
    file: Option<PathBuf>,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Analysis delay in milliseconds, overriding [analysis] delay_ms.
    #[arg(long = "delay-ms")]
    delay_ms: Option<u64>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Make emoji in study notes render on Windows, where the egui built-in
/// fonts lack them. Other platforms keep the egui defaults.
fn configure_fonts(ctx: &egui::Context) {
    #[cfg(target_os = "windows")]
    {
        const EMOJI_FONT: (&str, &str) = ("Segoe UI Emoji", r"C:\Windows\Fonts\seguiemj.ttf");

        let (name, path) = EMOJI_FONT;
        match std::fs::read(path) {
            Ok(data) => {
                let mut fonts = egui::FontDefinitions::default();
                fonts
                    .font_data
                    .insert(name.to_owned(), egui::FontData::from_owned(data).into());
                if let Some(proportional) = fonts.families.get_mut(&egui::FontFamily::Proportional)
                {
                    proportional.push(name.to_owned());
                }
                ctx.set_fonts(fonts);
                tracing::debug!(font = name, "Emoji fallback font configured");
            }
            Err(e) => {
                tracing::warn!(font = name, error = %e, "Emoji font unavailable; notes may show squares");
            }
        }
    }

    #[cfg(not(target_os = "windows"))]
    let _ = ctx;
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so [logging] level can take effect; its
    // warnings are replayed once the subscriber exists.
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_dir);
    let (config, config_warnings) = platform::config::load_config(&config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "StudyLens starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let delay = match cli.delay_ms {
        Some(ms) => match platform::config::validate_delay_ms("--delay-ms", ms) {
            Ok(delay) => delay,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(2);
            }
        },
        None => config.analysis_delay,
    };
    tracing::info!(delay_ms = delay.as_millis() as u64, "Using placeholder analyzer");

    let analyzer = Arc::new(core::analyzer::MockAnalyzer::with_latency(delay));
    let analysis_manager = app::analysis::AnalysisManager::new(analyzer);

    let mut state = app::state::AppState::new(cli.debug);
    if let Some(ref path) = cli.file {
        state.select_file(core::model::SelectedFile::from_path(path));
    }

    let dark_mode = config.dark_mode;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([860.0, 900.0])
            .with_min_inner_size([520.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(gui::StudyLensApp::new(state, analysis_manager)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch StudyLens GUI: {e}");
        std::process::exit(1);
    }
}
