//! Active-link highlighting and smooth in-page scrolling.

use pf_core::nav::{ACTIVE_CLASS, NavTracker, ROOT_MARGIN, THRESHOLD};
use wasm_bindgen::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{self, Elements};
use crate::sidebar::Sidebar;
use crate::state;

fn smooth_scroll_to(target: &Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn bind(els: &Elements, sidebar: &Sidebar) -> Result<(), JsValue> {
    let tracker = NavTracker::resolve(
        els.nav_links.iter().map(|link| {
            (
                link.get_attribute("href").unwrap_or_default(),
                link.get_attribute("data-label"),
            )
        }),
        |id| dom::by_id(id).is_some(),
    );

    // Sections in observation order, each tagged with its link index.
    let (link_indices, sections): (Vec<usize>, Vec<Element>) = tracker
        .observed()
        .filter_map(|(index, id)| dom::by_id(id).map(|section| (index, section)))
        .unzip();

    for (index, link) in els.nav_links.iter().enumerate() {
        let target = tracker.links()[index]
            .target
            .as_deref()
            .and_then(dom::by_id);
        let sidebar = sidebar.clone();
        dom::listen(link, "click", move |event: web_sys::MouseEvent| {
            sidebar.close_for_link();
            if let Some(target) = &target {
                event.prevent_default();
                smooth_scroll_to(target);
            }
        })?;
    }

    let tracker = state::shared(tracker);
    let links = els.nav_links.clone();
    let summary = els.section_summary.clone();
    let options = dom::observer_options(THRESHOLD, Some(ROOT_MARGIN));
    dom::observe_intersections(&sections, &options, move |position, _, _| {
        let link_index = link_indices[position];
        let mut tracker = tracker.borrow_mut();
        let Some(section_id) = tracker.links()[link_index].target.clone() else {
            return;
        };
        let label = tracker
            .on_section_entered(&section_id)
            .map(|link| link.label.clone())
            .unwrap_or_default();
        for (index, link) in links.iter().enumerate() {
            dom::toggle_class(link, ACTIVE_CLASS, tracker.is_active(index));
        }
        if let Some(summary) = &summary {
            dom::set_text(summary, &label);
        }
    })?;
    Ok(())
}
