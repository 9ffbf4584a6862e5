mod app;
mod components;
pub mod error;
mod logging;
pub mod models;
pub mod services;
mod utils;

use app::App;
use services::settings::load_settings;
use services::storage::LocalStorage;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    utils::set_panic_hook();
    logging::init(&load_settings(&LocalStorage).log_level);
    yew::Renderer::<App>::new().render();
}
