//! Portfolio Frontend Entry Point

mod app;
mod components;
mod context;
mod pages;
mod session;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

/// Lines kept in the in-memory log ring
const LOG_CAPACITY: usize = 200;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger(LOG_CAPACITY, log::LevelFilter::Info) {
        web_sys::console::error_1(&format!("logger already set: {}", e).into());
    }
    mount_to_body(App);
}
