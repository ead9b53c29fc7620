//! Sidebar collapse (desktop) and open (mobile) wiring.
//!
//! Classes: `collapsed` on `.sidebar` together with `sidebar-collapsed` on
//! the body; `open` on `.sidebar` mirrored by `aria-expanded` on
//! `#navToggle`.

use gloo_timers::callback::Timeout;
use pf_core::sidebar::{
    ANNOUNCEMENT_MS, BODY_COLLAPSED_CLASS, COLLAPSED_CLASS, Collapse, OPEN_CLASS, SidebarController,
};
use wasm_bindgen::prelude::*;

use crate::dom::{self, Elements};
use crate::state::{self, LocalStore, Shared};

/// Shared handle so navigation, keyboard and resize listeners can close the
/// mobile menu.
#[derive(Clone)]
pub struct Sidebar {
    els: Elements,
    controller: Shared<SidebarController>,
    breakpoint_px: u32,
}

impl Sidebar {
    pub fn load(els: &Elements, breakpoint_px: u32) -> Self {
        let sidebar = Self {
            els: els.clone(),
            controller: state::shared(SidebarController::load(&LocalStore)),
            breakpoint_px,
        };
        let collapse = sidebar.controller.borrow().collapse();
        sidebar.apply_collapse(collapse);
        sidebar
    }

    fn apply_collapse(&self, collapse: Collapse) {
        let collapsed = collapse.is_collapsed();
        dom::toggle_class(&self.els.sidebar, COLLAPSED_CLASS, collapsed);
        dom::toggle_class(&self.els.body, BODY_COLLAPSED_CLASS, collapsed);
        self.els.sidebar_toggle.set_title(collapse.tooltip());
    }

    fn apply_nav(&self) {
        let nav = self.controller.borrow().nav();
        dom::toggle_class(&self.els.sidebar, OPEN_CLASS, nav.is_open());
        if let Some(toggle) = &self.els.nav_toggle {
            let _ = toggle.set_attribute("aria-expanded", nav.aria_expanded());
        }
    }

    pub fn toggle_collapse(&self) {
        let collapse = self.controller.borrow_mut().toggle_collapse(&LocalStore);
        self.apply_collapse(collapse);
        announce(&self.els, collapse.announcement());
    }

    pub fn toggle_nav(&self) {
        self.controller.borrow_mut().toggle_nav();
        self.apply_nav();
    }

    pub fn close_for_link(&self) {
        let narrow = dom::is_narrow_viewport(self.breakpoint_px);
        if self.controller.borrow_mut().close_for_link(narrow) {
            self.apply_nav();
        }
    }

    pub fn close_on_escape(&self) {
        if self.controller.borrow_mut().close_on_escape() {
            self.apply_nav();
        }
    }

    pub fn close_for_resize(&self) {
        let narrow = dom::is_narrow_viewport(self.breakpoint_px);
        if self.controller.borrow_mut().close_for_resize(narrow) {
            gloo_console::debug!("portfolio: viewport widened, closing mobile nav");
            self.apply_nav();
        }
    }
}

/// Polite live-region message for screen readers, removed after a second.
fn announce(els: &Elements, message: &str) {
    let Ok(el) = dom::create_element("div") else {
        return;
    };
    let _ = el.set_attribute("aria-live", "polite");
    let _ = el.set_attribute("aria-atomic", "true");
    el.set_class_name("sr-only");
    dom::set_text(&el, message);
    if els.body.append_child(&el).is_err() {
        return;
    }
    Timeout::new(ANNOUNCEMENT_MS, move || el.remove()).forget();
}

pub fn bind(sidebar: &Sidebar) -> Result<(), JsValue> {
    let collapse = sidebar.clone();
    dom::listen(&sidebar.els.sidebar_toggle, "click", move |_: web_sys::MouseEvent| {
        collapse.toggle_collapse();
    })?;

    if let Some(toggle) = &sidebar.els.nav_toggle {
        let nav = sidebar.clone();
        dom::listen(toggle, "click", move |_: web_sys::MouseEvent| {
            nav.toggle_nav();
        })?;
    }
    Ok(())
}
