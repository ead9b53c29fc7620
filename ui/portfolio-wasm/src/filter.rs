//! Project card filtering by `data-filter` / `data-category`.

use pf_core::filter::{ACTIVE_CLASS, CARD_ENTRANCE_ANIMATION, ProjectFilter, is_activation_key};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom::{self, Elements};
use crate::state;

const BUTTON_CLASS: &str = "filter-btn";

fn apply(els: &Elements, clicked: &HtmlElement, visible: &[bool]) {
    for button in &els.filter_buttons {
        dom::toggle_class(button, ACTIVE_CLASS, button == clicked);
    }
    for (card, shown) in els.project_cards.iter().zip(visible) {
        if *shown {
            dom::set_style(card, "display", "block");
            dom::set_style(card, "animation", CARD_ENTRANCE_ANIMATION);
        } else {
            dom::set_style(card, "display", "none");
        }
    }
}

pub fn bind(els: &Elements) -> Result<(), JsValue> {
    let filter = state::shared(ProjectFilter::default());
    for button in &els.filter_buttons {
        let els2 = els.clone();
        let filter = filter.clone();
        let clicked = button.clone();
        dom::listen(button, "click", move |_: web_sys::MouseEvent| {
            let selected = clicked.get_attribute("data-filter");
            let categories: Vec<Option<String>> = els2
                .project_cards
                .iter()
                .map(|card| card.get_attribute("data-category"))
                .collect();
            let visible = filter
                .borrow_mut()
                .select(selected.as_deref(), categories.iter().map(Option::as_deref));
            apply(&els2, &clicked, &visible);
        })?;
    }
    Ok(())
}

/// Enter / Space on a focused filter button behaves like a click.
pub fn on_keydown(event: &web_sys::KeyboardEvent) {
    if !is_activation_key(&event.key()) {
        return;
    }
    let Some(button) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    if dom::has_class(&button, BUTTON_CLASS) {
        event.prevent_default();
        button.click();
    }
}
