//! Contact form validation and delivery.
//!
//! Phases: `Idle` → validation → `Idle` with inline errors, or
//! `Submitting` → `Succeeded` | `Failed`. Every rule is checked on every
//! pass so all failing fields are reported together.

use std::sync::LazyLock;

use pf_types::{ContactFields, PortfolioConfig};
use regex::Regex;
use thiserror::Error;
use tracing::debug;

pub const MAILTO_PREFIX: &str = "mailto:";
pub const SUBJECT_PREFIX: &str = "Portfolio Contact - ";
pub const LINE_BREAK: &str = "%0D%0A";

pub const LOADING_CLASS: &str = "loading";
pub const ERROR_SLOT_SELECTOR: &str = ".error";

pub const MSG_SENT: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you soon.";
pub const MSG_MAIL_CLIENT: &str = "Opening your email client... If it doesn't open automatically, \
     please copy the information and email me directly.";
pub const MSG_FAILED: &str =
    "Sorry, there was an error sending your message. Please try using the email link instead.";

// Minimum lengths in UTF-16 code units, the unit browsers report for input values.
const NAME_MIN_UNITS: usize = 2;
const MESSAGE_MIN_UNITS: usize = 10;

/// Characters `encodeURIComponent` leaves as they are but `urlencoding` escapes.
const URI_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter your name (at least 2 characters).")]
    Name,
    #[error("Please enter a valid email address.")]
    Email,
    #[error("Please select a project type.")]
    Subject,
    #[error("Please enter a message (at least 10 characters).")]
    Message,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::Name => Field::Name,
            FieldError::Email => Field::Email,
            FieldError::Subject => Field::Subject,
            FieldError::Message => Field::Message,
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Returns every failing rule, in field order.
pub fn validate(fields: &ContactFields) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if utf16_len(fields.name.trim()) < NAME_MIN_UNITS {
        errors.push(FieldError::Name);
    }
    if !is_valid_email(&fields.email) {
        errors.push(FieldError::Email);
    }
    if fields.subject.is_empty() {
        errors.push(FieldError::Subject);
    }
    if utf16_len(fields.message.trim()) < MESSAGE_MIN_UNITS {
        errors.push(FieldError::Message);
    }
    errors
}

fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Percent-encodes a URI component with the same unreserved set as
/// `encodeURIComponent`.
pub fn encode_component(value: &str) -> String {
    URI_MARKS
        .iter()
        .fold(urlencoding::encode(value).into_owned(), |encoded, (escape, mark)| {
            encoded.replace(escape, mark)
        })
}

/// Address behind the page's own `mailto:` link, or the configured fallback
/// when there is no such link or it is empty.
pub fn contact_address(mailto_href: Option<&str>, fallback: &str) -> String {
    mailto_href
        .map(|href| href.replacen(MAILTO_PREFIX, "", 1))
        .filter(|address| !address.is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Builds the pre-filled message URI. Field values are sent as typed.
pub fn mailto_uri(address: &str, fields: &ContactFields) -> String {
    let subject = encode_component(&format!("{SUBJECT_PREFIX}{}", fields.subject));
    let body = format!(
        "Name: {name}{br}Email: {email}{br}{br}Message:{br}{message}",
        br = LINE_BREAK,
        name = encode_component(&fields.name),
        email = encode_component(&fields.email),
        message = encode_component(&fields.message),
    );
    format!("{MAILTO_PREFIX}{address}?subject={subject}&body={body}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// POST the form to a form-processing service.
    Remote { endpoint: String },
    /// Hand the message to the visitor's mail client.
    MailClient { uri: String },
}

impl Delivery {
    pub fn plan(config: &PortfolioConfig, address: &str, fields: &ContactFields) -> Self {
        match config.endpoint() {
            Some(endpoint) => Delivery::Remote {
                endpoint: endpoint.to_owned(),
            },
            None => Delivery::MailClient {
                uri: mailto_uri(address, fields),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Ok,
    Err,
}

impl StatusKind {
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Ok => "ok",
            StatusKind::Err => "err",
        }
    }

    pub const ALL_CLASSES: [&'static str; 2] = ["ok", "err"];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    MailClientOpened,
    Failed,
}

impl Outcome {
    pub fn status(self) -> (&'static str, StatusKind) {
        match self {
            Outcome::Sent => (MSG_SENT, StatusKind::Ok),
            Outcome::MailClientOpened => (MSG_MAIL_CLIENT, StatusKind::Ok),
            Outcome::Failed => (MSG_FAILED, StatusKind::Err),
        }
    }

    /// Only a confirmed remote delivery clears the form.
    pub fn resets_form(self) -> bool {
        self == Outcome::Sent
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// A previous submission is still in flight.
    Busy,
    Invalid(Vec<FieldError>),
    Ready(Delivery),
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    phase: FormPhase,
}

impl ContactForm {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether the submit control should be disabled and show loading.
    pub fn is_busy(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn submit(
        &mut self,
        fields: &ContactFields,
        config: &PortfolioConfig,
        address: &str,
    ) -> SubmitDecision {
        if self.is_busy() {
            return SubmitDecision::Busy;
        }
        let errors = validate(fields);
        if !errors.is_empty() {
            self.phase = FormPhase::Idle;
            debug!(errors = errors.len(), "contact form invalid");
            return SubmitDecision::Invalid(errors);
        }
        self.phase = FormPhase::Submitting;
        SubmitDecision::Ready(Delivery::plan(config, address, fields))
    }

    pub fn finish(&mut self, outcome: Outcome) {
        self.phase = match outcome {
            Outcome::Failed => FormPhase::Failed,
            Outcome::Sent | Outcome::MailClientOpened => FormPhase::Succeeded,
        };
        debug!(?outcome, "contact form finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> ContactFields {
        ContactFields {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "automation".into(),
            message: "Line one & two\r\nWould love to chat about a flow.".into(),
        }
    }

    #[test]
    fn reports_all_four_errors_together() {
        let fields = ContactFields {
            name: "A".into(),
            email: "bad".into(),
            subject: String::new(),
            message: "short".into(),
        };
        let mut form = ContactForm::default();
        let decision = form.submit(&fields, &PortfolioConfig::default(), "me@example.com");
        assert_eq!(
            decision,
            SubmitDecision::Invalid(vec![
                FieldError::Name,
                FieldError::Email,
                FieldError::Subject,
                FieldError::Message,
            ])
        );
        assert!(!form.is_busy());
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn trimmed_lengths_are_checked() {
        let fields = ContactFields {
            name: "  B  ".into(),
            message: "   123456789   ".into(),
            ..valid_fields()
        };
        assert_eq!(validate(&fields), vec![FieldError::Name, FieldError::Message]);
    }

    #[test]
    fn lengths_count_utf16_units() {
        // One astral-plane emoji is two UTF-16 units.
        let fields = ContactFields {
            name: "\u{1f600}".into(),
            message: "\u{1f600}".repeat(5),
            ..valid_fields()
        };
        assert!(validate(&fields).is_empty());

        let fields = ContactFields {
            name: "\u{e9}".into(),
            ..valid_fields()
        };
        assert_eq!(validate(&fields), vec![FieldError::Name]);
    }

    #[test]
    fn components_keep_uri_marks() {
        assert_eq!(encode_component("Hi (there)! it's *"), "Hi%20(there)!%20it's%20*");
        assert_eq!(encode_component("a&b=c/d"), "a%26b%3Dc%2Fd");

        let fields = ContactFields {
            subject: "web (urgent)!".into(),
            ..valid_fields()
        };
        let uri = mailto_uri("me@example.com", &fields);
        assert!(uri.starts_with(
            "mailto:me@example.com?subject=Portfolio%20Contact%20-%20web%20(urgent)!&body="
        ));
    }

    #[test]
    fn submit_while_busy_leaves_phase_alone() {
        let mut form = ContactForm::default();
        let config = PortfolioConfig::default();
        assert!(matches!(
            form.submit(&valid_fields(), &config, "me@example.com"),
            SubmitDecision::Ready(_)
        ));
        let invalid = ContactFields::default();
        assert_eq!(
            form.submit(&invalid, &config, "me@example.com"),
            SubmitDecision::Busy
        );
        assert_eq!(form.phase(), FormPhase::Submitting);
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email(" ada@example.com "));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada example@x.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            FieldError::Subject.to_string(),
            "Please select a project type."
        );
        assert_eq!(FieldError::Email.field(), Field::Email);
    }

    #[test]
    fn mailto_fallback_round_trips_message() {
        let fields = valid_fields();
        let mut form = ContactForm::default();
        assert!(!form.is_busy());

        let decision = form.submit(&fields, &PortfolioConfig::default(), "me@example.com");
        let SubmitDecision::Ready(Delivery::MailClient { uri }) = decision else {
            panic!("expected mail client delivery, got {decision:?}");
        };
        assert!(form.is_busy());
        form.finish(Outcome::MailClientOpened);
        assert!(!form.is_busy());

        assert!(uri.starts_with("mailto:me@example.com?subject="));
        let (_, query) = uri.split_once('?').unwrap();
        let (subject, body) = query.split_once("&body=").unwrap();
        let subject = subject.strip_prefix("subject=").unwrap();
        assert_eq!(
            urlencoding::decode(subject).unwrap(),
            "Portfolio Contact - automation"
        );

        let decoded_body = urlencoding::decode(body).unwrap();
        assert!(decoded_body.starts_with(
            "Name: Ada Lovelace\r\nEmail: ada@example.com\r\n\r\nMessage:\r\n"
        ));
        assert!(decoded_body.ends_with(&fields.message));
    }

    #[test]
    fn endpoint_selects_remote_delivery() {
        let config = PortfolioConfig {
            form_endpoint: "https://formspree.io/f/xyz".into(),
            ..PortfolioConfig::default()
        };
        let mut form = ContactForm::default();
        assert_eq!(
            form.submit(&valid_fields(), &config, "me@example.com"),
            SubmitDecision::Ready(Delivery::Remote {
                endpoint: "https://formspree.io/f/xyz".into()
            })
        );
        assert_eq!(
            form.submit(&valid_fields(), &config, "me@example.com"),
            SubmitDecision::Busy
        );

        form.finish(Outcome::Failed);
        assert_eq!(form.phase(), FormPhase::Failed);
        assert!(!form.is_busy());
        assert_eq!(Outcome::Failed.status().1, StatusKind::Err);
        assert!(!Outcome::Failed.resets_form());
        assert!(Outcome::Sent.resets_form());
    }

    #[test]
    fn contact_address_falls_back() {
        assert_eq!(
            contact_address(Some("mailto:hi@site.dev"), "x@y.z"),
            "hi@site.dev"
        );
        assert_eq!(contact_address(Some("mailto:"), "x@y.z"), "x@y.z");
        assert_eq!(contact_address(None, "x@y.z"), "x@y.z");
    }
}
