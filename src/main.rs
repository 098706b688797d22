mod app;
mod components;
mod config;
mod context;
mod models;
mod services;
mod utils;
mod views;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Simba-Watch starting (API: {})", config::CONFIG.api_base_url);

    yew::Renderer::<App>::new().render();
}
