//! Project Board Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod markdown;
mod models;
mod routes;
mod storage;
mod store;
mod stores;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    log::info!("[APP] Starting project board");

    mount_to_body(move || view! { <App config=config /> });
}
