// Host-side tests for contact form validation and its submission flow.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod form {
    include!("../src/core/form.rs");
}

use constants::*;
use form::*;

/// Drives a `ContactForm` the way the page does: counts relay calls and
/// keeps scheduled revert timers on a fake clock.
struct Harness {
    form: ContactForm,
    sent: Vec<FormFields>,
    now_ms: u64,
    timers: Vec<(u64, u64)>, // (due_ms, ticket)
}

impl Harness {
    fn new() -> Self {
        Self {
            form: ContactForm::new(),
            sent: Vec::new(),
            now_ms: 0,
            timers: Vec::new(),
        }
    }

    fn fill(&mut self, name: &str, email: &str, message: &str) {
        self.form.set_field(Field::Name, name);
        self.form.set_field(Field::Email, email);
        self.form.set_field(Field::Message, message);
    }

    fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit();
        if let SubmitOutcome::Send(fields) = &outcome {
            self.sent.push(fields.clone());
        }
        outcome
    }

    fn finish(&mut self, result: Result<(), DeliveryError>) {
        if let Some(t) = self.form.complete(result) {
            self.timers.push((self.now_ms + t.delay_ms as u64, t.ticket));
        }
    }

    fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
        let now = self.now_ms;
        let (due, pending): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|(at, _)| *at <= now);
        self.timers = pending;
        for (_, ticket) in due {
            self.form.revert(ticket);
        }
    }
}

fn rejected() -> DeliveryError {
    DeliveryError::Rejected {
        status: 400,
        body: "bad template".into(),
    }
}

#[test]
fn email_shape() {
    for ok in ["ana@example.com", "a.b+c@sub.example.co", " ana@x.io "] {
        assert!(is_email_shaped(ok), "{}", ok);
    }
    for bad in [
        "not-an-email",
        "@example.com",
        "ana@",
        "ana@example",
        "ana@.com",
        "ana@example.",
        "ana@@example.com",
        "a na@example.com",
        "",
    ] {
        assert!(!is_email_shaped(bad), "{}", bad);
    }
}

#[test]
fn empty_name_blocks_submission() {
    let mut h = Harness::new();
    h.fill("", "ana@example.com", "hola");
    assert_eq!(h.submit(), SubmitOutcome::Invalid);
    assert_eq!(h.form.errors().get(Field::Name), Some(ValidationError::Required));
    assert_eq!(h.form.errors().iter().count(), 1);
    assert!(h.sent.is_empty());
    assert_eq!(h.form.state(), SubmissionState::Idle);
}

#[test]
fn bad_email_yields_only_an_email_error() {
    let mut h = Harness::new();
    h.fill("Ana", "not-an-email", "hi");
    assert_eq!(h.submit(), SubmitOutcome::Invalid);
    let errors: Vec<_> = h.form.errors().iter().collect();
    assert_eq!(errors, vec![(Field::Email, ValidationError::InvalidEmail)]);
    assert!(h.sent.is_empty());
}

#[test]
fn whitespace_only_fields_are_required() {
    let errors = validate(&FormFields {
        name: "  ".into(),
        email: "\t".into(),
        message: "\n".into(),
    })
    .unwrap_err();
    assert_eq!(errors.iter().count(), 3);
    assert!(errors.iter().all(|(_, e)| e == ValidationError::Required));
}

#[test]
fn field_error_clears_once_fixed() {
    let mut h = Harness::new();
    h.fill("Ana", "not-an-email", "hi");
    h.submit();
    h.form.set_field(Field::Email, "ana@");
    assert_eq!(
        h.form.errors().get(Field::Email),
        Some(ValidationError::InvalidEmail)
    );
    h.form.set_field(Field::Email, "ana@example.com");
    assert!(h.form.errors().is_empty());
    // a field without an error is not validated while typing
    h.form.set_field(Field::Name, "");
    assert!(h.form.errors().is_empty());
}

#[test]
fn success_clears_fields_and_reverts_after_delay() {
    let mut h = Harness::new();
    h.fill("Ana", "ana@example.com", "hola");
    assert!(h.form.is_submit_enabled());
    assert!(matches!(h.submit(), SubmitOutcome::Send(_)));
    assert_eq!(h.form.state(), SubmissionState::Sending);
    assert!(!h.form.is_submit_enabled());

    h.finish(Ok(()));
    assert_eq!(h.form.state(), SubmissionState::Success);
    assert!(h.form.fields().is_empty());
    assert!(h.form.is_submit_enabled());

    h.advance(STATUS_REVERT_MS as u64 - 1);
    assert_eq!(h.form.state(), SubmissionState::Success);
    h.advance(1);
    assert_eq!(h.form.state(), SubmissionState::Idle);
    assert!(h.form.fields().is_empty());
    assert_eq!(h.sent.len(), 1);
    assert_eq!(h.sent[0].name, "Ana");
}

#[test]
fn failure_keeps_input_and_reverts_after_delay() {
    let mut h = Harness::new();
    h.fill("Ana", "ana@example.com", "hola");
    h.submit();
    h.finish(Err(rejected()));
    assert_eq!(h.form.state(), SubmissionState::Error);
    assert_eq!(h.form.fields().message, "hola");
    h.advance(STATUS_REVERT_MS as u64);
    assert_eq!(h.form.state(), SubmissionState::Idle);
    assert_eq!(h.form.fields().email, "ana@example.com");
}

#[test]
fn no_second_send_while_sending() {
    let mut h = Harness::new();
    h.fill("Ana", "ana@example.com", "hola");
    h.submit();
    for _ in 0..3 {
        assert_eq!(h.submit(), SubmitOutcome::Busy);
    }
    assert_eq!(h.sent.len(), 1);
    h.finish(Ok(()));
    // a duplicate completion is ignored
    assert_eq!(h.form.complete(Err(DeliveryError::Network("late".into()))), None);
    assert_eq!(h.form.state(), SubmissionState::Success);
}

#[test]
fn new_submission_invalidates_pending_revert() {
    let mut h = Harness::new();
    h.fill("Ana", "ana@example.com", "hola");
    h.submit();
    h.finish(Err(rejected()));
    h.advance(5_000);
    // retry from the error banner
    assert!(matches!(h.submit(), SubmitOutcome::Send(_)));
    h.advance(3_000);
    // the first banner's timer fired but must not touch the new send
    assert_eq!(h.form.state(), SubmissionState::Sending);
    h.finish(Ok(()));
    h.advance(STATUS_REVERT_MS as u64);
    assert_eq!(h.form.state(), SubmissionState::Idle);
}

#[test]
fn unmount_while_sending_drops_everything() {
    let mut h = Harness::new();
    h.fill("Ana", "ana@example.com", "hola");
    h.submit();
    h.form.unmount();
    assert!(!h.form.is_mounted());
    assert!(!h.form.is_submit_enabled());
    h.finish(Ok(()));
    assert!(h.timers.is_empty());
    assert_eq!(h.form.state(), SubmissionState::Sending);
    assert_eq!(h.submit(), SubmitOutcome::Unmounted);
}

#[test]
fn unmount_invalidates_scheduled_revert() {
    let mut h = Harness::new();
    h.fill("Ana", "ana@example.com", "hola");
    h.submit();
    h.finish(Ok(()));
    let ticket = h.timers[0].1;
    h.form.unmount();
    assert!(!h.form.revert(ticket));
    assert_eq!(h.form.state(), SubmissionState::Success);
}

#[test]
fn payload_serializes_as_template_params() {
    let fields = FormFields {
        name: "Ana".into(),
        email: "ana@example.com".into(),
        message: "hola".into(),
    };
    let json = serde_json::to_value(&fields).unwrap();
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["email"], "ana@example.com");
    assert_eq!(json["message"], "hola");
}

#[test]
fn keys_and_ids() {
    assert_eq!(Field::from_id("email"), Some(Field::Email));
    assert_eq!(Field::from_id("phone"), None);
    assert_eq!(SubmissionState::Idle.status_key(), None);
    assert_eq!(
        SubmissionState::Error.status_key(),
        Some("contact.form.status.error")
    );
    assert_eq!(
        DeliveryError::NotConfigured("public key").to_string(),
        "mail relay is not configured (missing public key)"
    );
}

#[test]
fn sent_payload_is_trimmed() {
    let mut h = Harness::new();
    h.fill("  Ana ", " ana@x.io ", "\nhola\n");
    let SubmitOutcome::Send(payload) = h.submit() else {
        panic!("expected a send");
    };
    assert_eq!(payload.name, "Ana");
    assert_eq!(payload.email, "ana@x.io");
    assert_eq!(payload.message, "hola");
    // what the user typed stays as typed until the send succeeds
    assert_eq!(h.form.fields().email, " ana@x.io ");
}
