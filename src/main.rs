//! Clinic Console Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod derived;
mod models;
mod pages;
mod poll;
mod remote;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("clinic console starting");
    mount_to_body(App);
}
