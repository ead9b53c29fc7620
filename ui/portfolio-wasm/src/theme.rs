//! Dark/light presentation toggle.
//!
//! The body carries `dark` while the dark theme is on. The toggle's icon
//! and caption always name the theme a click switches to.

use pf_core::theme::{DARK_BODY_CLASS, ThemeController};
use pf_types::Theme;
use wasm_bindgen::prelude::*;

use crate::dom::{self, Elements};
use crate::state::{self, LocalStore};

pub fn apply(els: &Elements, theme: Theme) {
    dom::toggle_class(&els.body, DARK_BODY_CLASS, theme == Theme::Dark);
    let (icon, text) = theme.toggle_label();
    if let Some(el) = &els.mode_icon {
        dom::set_text(el, icon);
    }
    if let Some(el) = &els.mode_text {
        dom::set_text(el, text);
    }
}

pub fn bind(els: &Elements) -> Result<(), JsValue> {
    let controller = state::shared(ThemeController::load(&LocalStore));
    apply(els, controller.borrow().current());

    let els2 = els.clone();
    dom::listen(&els.mode_toggle, "click", move |_: web_sys::MouseEvent| {
        let theme = controller.borrow_mut().toggle(&LocalStore);
        apply(&els2, theme);
    })
}
