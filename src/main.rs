//! Gild Board Frontend Entry Point

mod app;
mod catalog_data;
mod commands;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;
use log::Level;
use wasm_bindgen::JsValue;

fn console_sink(level: Level, line: &str) {
    let line = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        _ => web_sys::console::log_1(&line),
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let (config, rejected) = commands::load_config();
    let sink = Box::new(console_sink);
    if let Err(e) = rolling_logger::init_logger(&config.log_level, config.log_capacity, sink) {
        web_sys::console::warn_1(&format!("[APP] Logger disabled: {}", e).into());
    }
    if let Some(e) = rejected {
        log::warn!("ignoring malformed config override: {}", e);
    }
    mount_to_body(move || view! { <App config=config /> });
}
