//! Task Board Frontend Entry Point

mod api;
mod app;
mod board;
mod components;
mod config;
mod context;
mod drag;
mod models;
mod pages;
mod session;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
