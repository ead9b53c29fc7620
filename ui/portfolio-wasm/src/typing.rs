use gloo_timers::future::TimeoutFuture;
use pf_core::typing::{Typewriter, TypingSchedule};
use wasm_bindgen_futures::spawn_local;

use crate::dom::{self, Elements};

pub fn start(els: &Elements, text: &str, schedule: TypingSchedule) {
    let Some(el) = els.typing_text.clone() else {
        return;
    };
    dom::set_text(&el, "");
    let mut typewriter = Typewriter::new(text);
    spawn_local(async move {
        TimeoutFuture::new(schedule.delay_ms).await;
        while let Some(frame) = typewriter.next_frame() {
            dom::set_text(&el, frame);
            TimeoutFuture::new(schedule.speed_ms).await;
        }
    });
}
