//! Contact form: inline validation, then delivery to the configured
//! endpoint or the visitor's mail client.

use std::rc::Rc;

use pf_core::contact::{
    ContactForm, Delivery, ERROR_SLOT_SELECTOR, Field, FieldError, LOADING_CLASS, Outcome,
    StatusKind, SubmitDecision, contact_address,
};
use pf_types::{ContactFields, PortfolioConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::api;
use crate::dom::{self, Elements};
use crate::state;

/// Disables the submit button and shows its loading state until dropped, so
/// every exit path of a submission restores the button.
struct SubmitGuard {
    button: Option<HtmlButtonElement>,
}

impl SubmitGuard {
    fn engage(form: &HtmlFormElement) -> Self {
        let button = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        if let Some(button) = &button {
            dom::add_class(button, LOADING_CLASS);
            button.set_disabled(true);
        }
        Self { button }
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        if let Some(button) = &self.button {
            dom::remove_class(button, LOADING_CLASS);
            button.set_disabled(false);
        }
    }
}

fn named(form: &HtmlFormElement, name: &str) -> Option<Element> {
    form.query_selector(&format!("[name=\"{name}\"]")).ok().flatten()
}

fn value_of(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn field_element(form: &HtmlFormElement, field: Field) -> Option<Element> {
    match field {
        Field::Name => named(form, "name"),
        Field::Email => named(form, "_replyto").or_else(|| named(form, "email")),
        Field::Subject => named(form, "subject"),
        Field::Message => named(form, "message"),
    }
}

fn read_fields(form: &HtmlFormElement) -> ContactFields {
    let value = |field| {
        field_element(form, field)
            .map(|el| value_of(&el))
            .unwrap_or_default()
    };
    ContactFields {
        name: value(Field::Name),
        email: value(Field::Email),
        subject: value(Field::Subject),
        message: value(Field::Message),
    }
}

fn clear_feedback(form: &HtmlFormElement, status: Option<&Element>) {
    if let Some(status) = status {
        dom::set_text(status, "");
    }
    if let Ok(slots) = form.query_selector_all(ERROR_SLOT_SELECTOR) {
        for i in 0..slots.length() {
            if let Some(slot) = slots.item(i) {
                slot.set_text_content(Some(""));
            }
        }
    }
}

/// Each message goes into the element right after its field.
fn show_errors(form: &HtmlFormElement, errors: &[FieldError]) {
    for error in errors {
        let slot = field_element(form, error.field()).and_then(|el| el.next_element_sibling());
        if let Some(slot) = slot {
            dom::set_text(&slot, &error.to_string());
        }
    }
}

fn set_status(status: &Element, message: &str, kind: StatusKind) {
    dom::set_text(status, message);
    for class in StatusKind::ALL_CLASSES {
        dom::remove_class(status, class);
    }
    dom::add_class(status, kind.class());
}

async fn deliver(delivery: Delivery, form: &HtmlFormElement) -> Outcome {
    match delivery {
        Delivery::Remote { endpoint } => match api::post_form(&endpoint, form).await {
            Ok(()) => Outcome::Sent,
            Err(err) => {
                gloo_console::error!(format!("Form submission error: {err}"));
                Outcome::Failed
            }
        },
        Delivery::MailClient { uri } => match dom::window().location().set_href(&uri) {
            Ok(()) => Outcome::MailClientOpened,
            Err(err) => {
                gloo_console::error!("Form submission error:", err);
                Outcome::Failed
            }
        },
    }
}

pub fn bind(els: &Elements, config: Rc<PortfolioConfig>) -> Result<(), JsValue> {
    let Some(form) = els.contact_form.clone() else {
        gloo_console::debug!("portfolio: no #contactForm on this page");
        return Ok(());
    };
    let status = els.form_status.clone();
    let address = contact_address(
        els.contact_link
            .as_ref()
            .and_then(|link| link.get_attribute("href"))
            .as_deref(),
        &config.fallback_email,
    );
    let machine = state::shared(ContactForm::default());

    let target = form.clone();
    dom::listen(&target, "submit", move |event: web_sys::Event| {
        event.prevent_default();
        // A submission in flight keeps its feedback on screen.
        if machine.borrow().is_busy() {
            return;
        }
        clear_feedback(&form, status.as_ref());

        let fields = read_fields(&form);
        let decision = machine.borrow_mut().submit(&fields, &config, &address);
        let delivery = match decision {
            SubmitDecision::Busy => return,
            SubmitDecision::Invalid(errors) => {
                show_errors(&form, &errors);
                return;
            }
            SubmitDecision::Ready(delivery) => delivery,
        };

        let guard = SubmitGuard::engage(&form);
        let form = form.clone();
        let status = status.clone();
        let machine = machine.clone();
        spawn_local(async move {
            let outcome = deliver(delivery, &form).await;
            machine.borrow_mut().finish(outcome);
            if outcome.resets_form() {
                form.reset();
            }
            if let Some(status) = &status {
                let (message, kind) = outcome.status();
                set_status(status, message, kind);
            }
            drop(guard);
        });
    })
}
