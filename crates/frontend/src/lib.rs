pub mod app;
pub mod app_shell;
pub mod domain;
pub mod shared;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate; the level is narrowed once config is read
    _ = console_log::init_with_level(log::Level::Trace);
    console_error_panic_hook::set_once();

    let config = shared::config::load_config();
    log::set_max_level(config.level().to_level_filter());
    log::info!(
        "inventory admin starting: log level {}, {} seed products",
        config.level(),
        config.seed_products.len()
    );

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
