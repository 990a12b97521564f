use docfinder_app::{config::AppConfig, App, CONFIG_ELEMENT_ID};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Reads the config the server embedded in the page, falling back to the defaults.
fn page_config() -> AppConfig {
    let json = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    match json {
        Some(json) => AppConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("ignoring page config: {e}");
            AppConfig::default()
        }),
        None => {
            log::info!("no page config found, using defaults");
            AppConfig::default()
        }
    }
}

#[wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("hydrate mode - hydrating");

    let config = page_config();
    leptos::mount::hydrate_body(move || {
        provide_context(config.clone());
        view! { <App /> }
    });
}
