#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{PortfolioConfig, ProjectSource};

/// Session configuration, set from the command line
static CONFIG: OnceLock<PortfolioConfig> = OnceLock::new();

/// Get the session configuration (set from command line or default)
pub fn get_config() -> PortfolioConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Portfolio - project showcase
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal project portfolio with stack filters and offline cache")]
struct Args {
    /// Project data: a JSON file path or an http(s) URL
    #[arg(short, long)]
    data: Option<ProjectSource>,

    /// Directory for the offline response cache
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Cache generation name; changing it discards older generations
    #[arg(long)]
    cache_name: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let cache_dir = args.cache_dir.unwrap_or_else(|| {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
    });

    let mut config = PortfolioConfig::new().with_cache_path(cache_dir.join("offline.redb"));
    if let Some(source) = args.data {
        config = config.with_source(source);
    }
    if let Some(name) = args.cache_name {
        config = config.with_cache_name(name);
    }

    tracing::info!(source = %config.source, cache = %config.cache_name, "starting portfolio");
    let _ = CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
