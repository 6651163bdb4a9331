//! Healthcare Token System web client
//!
//! Connects the browser wallet, shows the account's profile and HCT balance,
//! and lists and books appointments against the healthcare contract.

use hct_shared::config::{contract_config, init_config, ContractConfig};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;
use utils::browser::hide_loading_screen;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Healthcare Token System starting...");

    let config = load_config();
    log::info!("Contract at {} ({})", config.contract_address, config.token_symbol);

    hide_loading_screen();
    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}

/// Build-time configuration, or the defaults when it does not validate.
fn load_config() -> ContractConfig {
    match init_config().and_then(|()| contract_config().cloned()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration, using defaults: {}", e);
            ContractConfig::default()
        }
    }
}
