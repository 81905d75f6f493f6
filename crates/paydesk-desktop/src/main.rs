//! Paydesk Desktop Application
//!
//! A single-window salary table with add, edit and delete dialogs.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};
use paydesk_core::config::ClientConfig;
use paydesk_core::SalariesClient;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("paydesk=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Paydesk...");

    let client = match ClientConfig::resolve(None)
        .and_then(|config| SalariesClient::from_config(&config))
    {
        Ok(client) => client,
        Err(error) => {
            tracing::error!("Failed to configure salaries API: {error}");
            std::process::exit(1);
        }
    };
    tracing::info!("Using salaries API at {}", client.base_url());

    let config = Config::new().with_window(WindowBuilder::new().with_title("Paydesk"));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .with_context(client)
        .launch(app::App);
}
