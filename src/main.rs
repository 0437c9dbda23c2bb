//! Todo List Frontend Entry Point

mod app;
mod components;
mod context;
mod ids;
mod models;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(log::LevelFilter::Info).expect("no other logger is installed");
    mount_to_body(App);
}
