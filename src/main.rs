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

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Upstream quote API override, set from command line
static QUOTES_URL: OnceLock<String> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quoteverse")
    })
}

/// Get the upstream quote API override (if set via --quotes-url)
pub fn get_quotes_url() -> Option<String> {
    QUOTES_URL.get().cloned()
}

/// QuoteVerse - mood-themed quote browsing
#[derive(Parser, Debug)]
#[command(name = "quoteverse-desktop")]
#[command(about = "QuoteVerse - browse, search and favorite quotes")]
struct Args {
    /// Data directory for favorites storage (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: quoteverse-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Upstream quote API endpoint override
    #[arg(long)]
    quotes_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Determine data directory and display name
    let (data_dir, display_name) = if let Some(dir) = args.data_dir {
        (
            dir.clone(),
            dir.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("custom")
                .to_string(),
        )
    } else if let Some(ref name) = args.name {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!("quoteverse-{}", name));
        (base, name.clone())
    } else {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quoteverse");
        (base, String::new())
    };

    // Store globals for the app to read
    let _ = DATA_DIR.set(data_dir.clone());
    if let Some(url) = args.quotes_url {
        let _ = QUOTES_URL.set(url);
    }

    let window_width = 1100.0;
    let window_height = 800.0;

    // Window title with instance name
    let title = if !display_name.is_empty() {
        format!("QuoteVerse - {}", display_name)
    } else {
        "QuoteVerse".to_string()
    };

    tracing::info!("Starting '{}' with data dir: {:?}", title, data_dir);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
