mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting candidacy frontend (wasm)");

    // window.__CANDIDACY_ENV (env.js) takes precedence over ./config.json.
    leptos::spawn_local(config::init());

    router::mount_app();
}
