//! SAES-R sidebar - Main Entry Point
//!
//! Launches the Dioxus app with the administrador and profesor layouts.

use saesr_sidebar::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] SAES-R sidebar - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting SAES-R sidebar...");
    dioxus::launch(App);
}
