//! Event binding.
//!
//! Wires every feature's listeners plus the document-level keyboard, resize
//! and visibility handlers. Call once after `Elements::bind()`.

use std::rc::Rc;

use pf_core::pacing::{Pacing, Throttle};
use pf_core::typing::TypingSchedule;
use pf_types::PortfolioConfig;
use wasm_bindgen::prelude::*;

use crate::contact;
use crate::dom::{self, Elements};
use crate::filter;
use crate::nav;
use crate::reveal;
use crate::scroll;
use crate::sidebar::{self, Sidebar};
use crate::theme;
use crate::typing;

pub fn bind_events(els: &Elements, config: &PortfolioConfig) -> Result<(), JsValue> {
    theme::bind(els)?;

    let sidebar = Sidebar::load(els, config.mobile_breakpoint_px);
    sidebar::bind(&sidebar)?;
    nav::bind(els, &sidebar)?;

    scroll::bind(els, Pacing::debounced(config.scroll_debounce_ms))?;
    reveal::bind(els)?;
    filter::bind(els)?;
    contact::bind(els, Rc::new(config.clone()))?;

    // ── Keyboard ──
    {
        let sidebar = sidebar.clone();
        dom::listen(&dom::document(), "keydown", move |event: web_sys::KeyboardEvent| {
            if event.key() == "Escape" {
                sidebar.close_on_escape();
            }
            filter::on_keydown(&event);
        })?;
    }

    // ── Resize ──
    {
        let mut throttle = Throttle::new(config.resize_throttle_ms);
        dom::listen(&dom::window(), "resize", move |_: web_sys::Event| {
            if throttle.admit(js_sys::Date::now()) {
                sidebar.close_for_resize();
            }
        })?;
    }

    // ── Visibility ──
    dom::listen(&dom::document(), "visibilitychange", |_: web_sys::Event| {
        let state = if dom::document().hidden() { "hidden" } else { "visible" };
        gloo_console::debug!(format!("portfolio: page {state}"));
    })?;

    typing::start(els, &config.typing_text, TypingSchedule::from_config(config));
    Ok(())
}
