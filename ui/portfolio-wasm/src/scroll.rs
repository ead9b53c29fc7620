//! Scroll-driven cues: back-to-top visibility and sidebar elevation.
//!
//! One scroll listener. With `Pacing::Debounced` each event replaces the
//! pending `Timeout`, and dropping a `Timeout` cancels it, so a burst of
//! events runs the update once.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use pf_core::pacing::Pacing;
use pf_core::scroll::{ELEVATED_CLASS, SHOW_CLASS, ScrollTracker};
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::dom::{self, Elements};
use crate::state;

fn scroll_offset() -> f64 {
    dom::window().scroll_y().unwrap_or(0.0)
}

pub fn bind(els: &Elements, pacing: Pacing) -> Result<(), JsValue> {
    let tracker = state::shared(ScrollTracker::default());
    let els2 = els.clone();
    let update: Rc<dyn Fn()> = Rc::new(move || {
        let Some(cues) = tracker.borrow_mut().update(scroll_offset()) else {
            return;
        };
        dom::toggle_class(&els2.back_to_top, SHOW_CLASS, cues.back_to_top);
        dom::toggle_class(&els2.sidebar, ELEVATED_CLASS, cues.elevated);
    });

    // Initial state for pages restored mid-scroll.
    update();

    let pending = state::shared(None::<Timeout>);
    let on_scroll = update.clone();
    dom::listen(&dom::window(), "scroll", move |_: web_sys::Event| match pacing {
        Pacing::Immediate => on_scroll(),
        Pacing::Debounced { quiet_ms } => {
            let run = on_scroll.clone();
            let timeout = Timeout::new(quiet_ms, move || run());
            pending.borrow_mut().replace(timeout);
        }
    })?;

    dom::listen(&els.back_to_top, "click", |_: web_sys::MouseEvent| {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        dom::window().scroll_to_with_scroll_to_options(&opts);
    })
}
