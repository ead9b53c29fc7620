//! Scroll-triggered animations: stat counters, skill bars and section
//! fade-ins. Each element plays once; its `RevealSet` entry leaves `Pending`
//! on the first trigger and the observer stops watching it.

use gloo_timers::future::TimeoutFuture;
use pf_core::reveal::{
    COUNTER_THRESHOLD, COUNTER_TICK_MS, CounterAnimation, FADE_PLAYED_CLASS, FADE_ROOT_MARGIN,
    FADE_TAG_CLASS, FADE_THRESHOLD, RevealSet, SKILL_DELAY_MS, SKILL_THRESHOLD, parse_target,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{self, Elements};
use crate::state;

pub fn bind(els: &Elements) -> Result<(), JsValue> {
    bind_counters(els)?;
    bind_skill_bars(els)?;
    bind_sections(els)
}

fn bind_counters(els: &Elements) -> Result<(), JsValue> {
    let reveals = state::shared(RevealSet::new(els.stat_numbers.len()));
    let options = dom::observer_options(COUNTER_THRESHOLD, None);
    dom::observe_intersections(&els.stat_numbers, &options, move |index, el, observer| {
        if !reveals.borrow_mut().begin(index) {
            return;
        }
        observer.unobserve(el);
        let target = parse_target(el.get_attribute("data-target").as_deref());
        let el = el.clone();
        let reveals = reveals.clone();
        spawn_local(async move {
            let mut counter = CounterAnimation::new(target);
            loop {
                TimeoutFuture::new(COUNTER_TICK_MS).await;
                let frame = counter.tick();
                dom::set_text(&el, &frame.value.to_string());
                if frame.done {
                    break;
                }
            }
            reveals.borrow_mut().finish(index);
        });
    })?;
    Ok(())
}

fn bind_skill_bars(els: &Elements) -> Result<(), JsValue> {
    let reveals = state::shared(RevealSet::new(els.skill_bars.len()));
    let options = dom::observer_options(SKILL_THRESHOLD, None);
    dom::observe_intersections(&els.skill_bars, &options, move |index, el, observer| {
        if !reveals.borrow_mut().begin(index) {
            return;
        }
        observer.unobserve(el);
        let width = el.get_attribute("data-width").unwrap_or_default();
        let Ok(bar) = el.clone().dyn_into::<web_sys::HtmlElement>() else {
            reveals.borrow_mut().finish(index);
            return;
        };
        let reveals = reveals.clone();
        spawn_local(async move {
            TimeoutFuture::new(SKILL_DELAY_MS).await;
            // The stylesheet's width transition does the animating.
            dom::set_style(&bar, "width", &width);
            reveals.borrow_mut().finish(index);
        });
    })?;
    Ok(())
}

fn bind_sections(els: &Elements) -> Result<(), JsValue> {
    for section in &els.sections {
        dom::add_class(section, FADE_TAG_CLASS);
    }
    let reveals = state::shared(RevealSet::new(els.sections.len()));
    let options = dom::observer_options(FADE_THRESHOLD, Some(FADE_ROOT_MARGIN));
    dom::observe_intersections(&els.sections, &options, move |index, el, observer| {
        if reveals.borrow_mut().play_once(index) {
            observer.unobserve(el);
            dom::add_class(el, FADE_PLAYED_CLASS);
        }
    })?;
    Ok(())
}
