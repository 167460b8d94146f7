//! Todo-Flow Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod store;

use app::App;
use config::UiConfig;
use leptos::prelude::*;
use tracing::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    // Logging needs the configured level, so report config errors after init
    let (config, config_error) = match UiConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (UiConfig::default(), Some(err)),
    };

    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.max_level())
            .build(),
    );
    if let Some(err) = config_error {
        warn!(%err, "falling back to default config");
    }
    info!(title = %config.title, "starting");

    document().set_title(&config.title);
    mount_to_body(move || view! { <App config=config /> });
}
