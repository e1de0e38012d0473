#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;

use arcana_core::AssetConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global asset configuration, set from command line
static ASSETS: OnceLock<AssetConfig> = OnceLock::new();

/// Get the asset configuration (set from command line or default)
pub fn asset_config() -> AssetConfig {
    ASSETS.get().cloned().unwrap_or_default()
}

/// Arcana - Tarot Card Picker
#[derive(Parser, Debug)]
#[command(name = "arcana-desktop")]
#[command(about = "Arcana - pick a card from the fanned Major Arcana")]
struct Args {
    /// Base URL of the card artwork host (defaults to the public asset host)
    #[arg(long)]
    asset_base: Option<String>,

    /// Locale segment for the localized card faces
    #[arg(long, default_value = arcana_core::DEFAULT_LOCALE)]
    locale: String,

    /// Window title
    #[arg(long, default_value = "Arcana")]
    title: String,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let assets = match args.asset_base {
        Some(base) => match AssetConfig::new(base, args.locale) {
            Ok(assets) => assets,
            Err(e) => {
                tracing::error!("Rejecting --asset-base: {}", e);
                std::process::exit(2);
            }
        },
        None => AssetConfig {
            locale: args.locale,
            ..AssetConfig::default()
        },
    };

    tracing::info!("Starting with asset host: {}", assets.base);
    let _ = ASSETS.set(assets);

    // Window size: fan strip plus the reveal position and result panel
    let window_width = 760.0;
    let window_height = 720.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
