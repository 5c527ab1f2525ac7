// DeedFinder - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use deedfinder::app;

pub use deedfinder::core;
pub use deedfinder::platform;
pub use deedfinder::ui;
pub use deedfinder::util;

use clap::Parser;
use std::path::PathBuf;

/// DeedFinder - search a folder of property-deed spreadsheets.
///
/// Point DeedFinder at a folder of .xls / .xlsx registers and search one
/// column across every file whose headers match a known layout.
#[derive(Parser, Debug)]
#[command(name = "DeedFinder", version, about)]
struct Cli {
    /// Folder to search (can also be entered in the form).
    folder: Option<PathBuf>,

    /// Column to search (DocNo, RegistrationDate, SellerParty,
    /// PurchaserParty, PropertyDescription, DateOfExecution).
    #[arg(short = 'c', long = "column")]
    column: Option<String>,

    /// Initial search value.
    #[arg(short = 't', long = "term")]
    term: Option<String>,

    /// Submit the search immediately on launch.
    #[arg(short = 'r', long = "run")]
    run: bool,

    /// Directory containing config.toml (overrides the platform default).
    #[arg(long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its level can take effect; warnings
    // are held and logged once the subscriber exists.
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_dir);
    let (config, config_warnings) = platform::config::load_config(&config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_dir.display(),
        "DeedFinder starting"
    );
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    let discovery = crate::core::discovery::DiscoveryConfig {
        include_patterns: config.include_patterns.clone(),
        max_files: config.max_files,
    };
    let mut state =
        app::state::AppState::new(config.default_column, discovery, config.font_size, cli.debug);
    state.startup_warnings = config_warnings;

    if let Some(ref column) = cli.column {
        match column.parse::<crate::core::model::SearchColumn>() {
            Ok(c) => state.column = c,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring --column");
                state.startup_warnings.push(format!("--column: {e}"));
            }
        }
    }
    if let Some(ref folder) = cli.folder {
        state.folder_path = folder.display().to_string();
    }
    if let Some(term) = cli.term {
        state.term = term;
    }
    state.pending_submit = cli.run;

    let font_size = config.font_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            gui::configure_style(&cc.egui_ctx, font_size);
            Ok(Box::new(gui::DeedFinderApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch DeedFinder GUI: {e}");
        std::process::exit(1);
    }
}
