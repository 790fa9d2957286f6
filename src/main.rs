#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod host;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use mojju_core::LandingConfig;
use tracing_subscriber::EnvFilter;

/// Global landing configuration, set from command line
static LANDING_CONFIG: OnceLock<LandingConfig> = OnceLock::new();

/// Get the landing configuration (set from command line or default)
pub fn get_landing_config() -> &'static LandingConfig {
    LANDING_CONFIG.get_or_init(LandingConfig::default)
}

/// Mojju - AI film production studio landing page
#[derive(Parser, Debug)]
#[command(name = "mojju-desktop")]
#[command(about = "Mojju landing page with full-screen video hero")]
struct Args {
    /// Background video URL (http(s) or absolute asset path)
    #[arg(long)]
    video_url: Option<String>,

    /// MIME type of the background video
    #[arg(long)]
    video_mime: Option<String>,

    /// Wordmark shown in the navigation bar
    #[arg(short, long)]
    brand: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = LandingConfig::default();
    if let Some(url) = args.video_url {
        config.video_url = url;
    }
    if let Some(mime) = args.video_mime {
        config.video_mime = mime;
    }
    if let Some(brand) = args.brand {
        config.brand = brand;
    }

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(2);
    }

    tracing::info!(
        brand = %config.brand,
        video = %config.video_url,
        "Starting landing page"
    );
    tracing::debug!(
        config = %serde_json::to_string(&config).unwrap_or_default(),
        "Resolved config"
    );

    let title = format!("{} | AI Film Production", config.brand);
    let _ = LANDING_CONFIG.set(config);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
