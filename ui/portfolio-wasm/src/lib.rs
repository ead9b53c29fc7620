//! Portfolio page WASM front end.
//!
//! Attaches behaviour to the static portfolio markup: theme and sidebar
//! persistence, active-section navigation, scroll cues, reveal animations,
//! project filtering, the contact form and the hero typing effect. Each
//! concern lives in its own module; state machines come from `pf-core`.

pub mod api;
pub mod config;
pub mod contact;
pub mod dom;
pub mod events;
pub mod filter;
pub mod logging;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod sidebar;
pub mod state;
pub mod theme;
pub mod typing;

use wasm_bindgen::prelude::*;

const LOADED_CLASS: &str = "loaded";

/// WASM entry point, called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    logging::init();

    init()
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;
    let config = config::load(&els);

    events::bind_events(&els, &config)?;

    dom::add_class(&els.body, LOADED_CLASS);
    gloo_console::log!("Portfolio initialized successfully!");
    Ok(())
}
