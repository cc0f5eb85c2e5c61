//! To-Do Lists Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dispatch;
mod guard;
mod models;
mod state;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("TodoLists", rolling_logger::DEFAULT_CAPACITY) {
        leptos::logging::error!("logger already installed: {}", e);
    }

    let Some(config) = ApiConfig::resolve() else {
        log::error!("[APP] Cannot determine the API base URL; set TODO_API_BASE");
        return;
    };
    log::info!("[APP] Using API at {}", config.base_url());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
