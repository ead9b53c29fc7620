//! DOM element bindings.
//!
//! All fields are resolved once at startup by `Elements::bind()`. Elements the
//! page cannot work without are required and fail the bind; the rest are
//! optional and their feature quietly stays off when they are absent.

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlFormElement};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    query_all_typed(selector)
}

pub fn query_all_typed<T: JsCast>(selector: &str) -> Vec<T> {
    let Ok(nl) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<T>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

/// `(max-width: {px}px)` media query, as used by the stylesheet's
/// mobile layout.
pub fn is_narrow_viewport(breakpoint_px: u32) -> bool {
    window()
        .match_media(&format!("(max-width:{breakpoint_px}px)"))
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Attach a listener that lives as long as the page.
pub fn listen<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let cb = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Watch `targets` with one intersection observer. `on_enter` receives the
/// index of each target that starts intersecting, the target itself and the
/// observer so the callback can unobserve.
pub fn observe_intersections(
    targets: &[Element],
    options: &web_sys::IntersectionObserverInit,
    mut on_enter: impl FnMut(usize, &Element, &web_sys::IntersectionObserver) + 'static,
) -> Result<Option<web_sys::IntersectionObserver>, JsValue> {
    if targets.is_empty() {
        return Ok(None);
    }
    let watched = targets.to_vec();
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(index) = watched.iter().position(|el| *el == target) {
                    on_enter(index, &target, &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);
    let observer =
        web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), options)?;
    cb.forget();
    for target in targets {
        observer.observe(target);
    }
    Ok(Some(observer))
}

pub fn observer_options(
    threshold: f64,
    root_margin: Option<&str>,
) -> web_sys::IntersectionObserverInit {
    let opts = web_sys::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        opts.set_root_margin(margin);
    }
    opts
}

// ── Elements struct ──

/// All DOM element references used by the page script.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub body: HtmlElement,

    // Theme
    pub mode_toggle: HtmlElement,
    pub mode_icon: Option<Element>,
    pub mode_text: Option<Element>,

    // Sidebar
    pub sidebar: Element,
    pub sidebar_toggle: HtmlElement,
    pub nav_toggle: Option<Element>,

    // Navigation / scroll
    pub nav_links: Vec<Element>,
    pub section_summary: Option<Element>,
    pub back_to_top: Element,

    // Reveal animations
    pub stat_numbers: Vec<Element>,
    pub skill_bars: Vec<Element>,
    pub sections: Vec<Element>,

    // Projects
    pub filter_buttons: Vec<HtmlElement>,
    pub project_cards: Vec<HtmlElement>,

    // Contact
    pub contact_form: Option<HtmlFormElement>,
    pub form_status: Option<Element>,
    pub contact_link: Option<Element>,

    // Hero
    pub typing_text: Option<Element>,

    // Page configuration
    pub config_script: Option<Element>,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        let mode_toggle = get_html!("modeToggle");
        let mode_icon = mode_toggle.query_selector(".mode-icon").ok().flatten();
        let mode_text = mode_toggle.query_selector(".mode-text").ok().flatten();

        Ok(Elements {
            body: document()
                .body()
                .ok_or_else(|| JsValue::from_str("missing <body>"))?,

            mode_toggle,
            mode_icon,
            mode_text,

            sidebar: query(".sidebar").ok_or_else(|| JsValue::from_str("missing .sidebar"))?,
            sidebar_toggle: get_html!("sidebarToggle"),
            nav_toggle: by_id("navToggle"),

            nav_links: query_all(".nav-link"),
            section_summary: by_id("sectionSummary"),
            back_to_top: get_el!("backToTop"),

            stat_numbers: query_all(".stat-number"),
            skill_bars: query_all(".skill-progress"),
            sections: query_all("section"),

            filter_buttons: query_all_typed(".filter-btn"),
            project_cards: query_all_typed(".project-card"),

            contact_form: by_id_typed::<HtmlFormElement>("contactForm"),
            form_status: by_id("formStatus"),
            contact_link: query(".contact-card a[href^=\"mailto:\"]"),

            typing_text: by_id("typing-text"),

            config_script: by_id("portfolioConfig"),
        })
    }
}
