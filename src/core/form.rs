// Contact form validation and submission state machine.
//
// ```text
// idle --submit(valid)--> sending --ok--> success --8s--> idle
//                                 --err-> error   --8s--> idle
// idle --submit(invalid)--> idle (field errors)
// ```
//
// The machine never talks to the network or to timers itself. `submit`
// hands back the payload to send, `complete` hands back the revert timer to
// schedule, and `revert` is called when that timer fires. Tickets make a
// stale timer (or a send that finishes after unmount) a no-op.

use super::constants::STATUS_REVERT_MS;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Matches the `name` attribute of the form control.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.id() == id)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Field::Name => "contact.form.name",
            Field::Email => "contact.form.email",
            Field::Message => "contact.form.message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    InvalidEmail,
}

impl ValidationError {
    pub fn message_key(self) -> &'static str {
        match self {
            ValidationError::Required => "contact.form.validation.required",
            ValidationError::InvalidEmail => "contact.form.validation.email",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Copy with surrounding whitespace removed from every field; this is
    /// what gets sent.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<ValidationError>,
    email: Option<ValidationError>,
    message: Option<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    fn set(&mut self, field: Field, err: Option<ValidationError>) {
        match field {
            Field::Name => self.name = err,
            Field::Email => self.email = err,
            Field::Message => self.message = err,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|f| self.get(f).map(|e| (f, e)))
    }
}

/// `local@domain.tld` with no whitespace, a single `@`, and a dot inside the
/// domain that is neither its first nor last character.
pub fn is_email_shaped(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len() && !domain.starts_with('.'),
        None => false,
    }
}

pub fn validate_field(field: Field, value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        return Some(ValidationError::Required);
    }
    if field == Field::Email && !is_email_shaped(value) {
        return Some(ValidationError::InvalidEmail);
    }
    None
}

pub fn validate(fields: &FormFields) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        errors.set(field, validate_field(field, fields.get(field)));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionState {
    /// Dictionary key of the banner/progress text, if any is shown.
    pub fn status_key(self) -> Option<&'static str> {
        match self {
            SubmissionState::Idle => None,
            SubmissionState::Sending => Some("contact.form.status.sending"),
            SubmissionState::Success => Some("contact.form.status.success"),
            SubmissionState::Error => Some("contact.form.status.error"),
        }
    }
}

/// Why the mail relay did not accept a submission. Only logged; the user
/// sees a generic message.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("mail relay is not configured (missing {0})")]
    NotConfigured(&'static str),
    #[error("mail relay rejected the message: {status} {body}")]
    Rejected { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Entered `Sending`; deliver this payload exactly once.
    Send(FormFields),
    /// Validation failed; see `errors()`.
    Invalid,
    /// A send is already in flight.
    Busy,
    Unmounted,
}

/// Schedule `ContactForm::revert(ticket)` after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevertTimer {
    pub ticket: u64,
    pub delay_ms: u32,
}

#[derive(Debug)]
pub struct ContactForm {
    fields: FormFields,
    errors: FieldErrors,
    state: SubmissionState,
    ticket: u64,
    mounted: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: FormFields::default(),
            errors: FieldErrors::default(),
            state: SubmissionState::Idle,
            ticket: 0,
            mounted: true,
        }
    }

    #[inline]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    #[inline]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    #[inline]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[inline]
    pub fn is_submit_enabled(&self) -> bool {
        self.mounted && self.state != SubmissionState::Sending
    }

    /// Update a field from user input. A field already showing an error is
    /// re-checked so the message disappears as soon as it is fixed.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        if self.errors.get(field).is_some() {
            let err = validate_field(field, self.fields.get(field));
            self.errors.set(field, err);
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.mounted {
            return SubmitOutcome::Unmounted;
        }
        if self.state == SubmissionState::Sending {
            return SubmitOutcome::Busy;
        }
        match validate(&self.fields) {
            Err(errors) => {
                self.errors = errors;
                SubmitOutcome::Invalid
            }
            Ok(()) => {
                self.errors = FieldErrors::default();
                self.state = SubmissionState::Sending;
                // Any revert still pending from a previous banner is stale now.
                self.ticket += 1;
                SubmitOutcome::Send(self.fields.trimmed())
            }
        }
    }

    /// Record the relay's answer. Returns the revert timer to schedule, or
    /// `None` if the result arrived when no send was outstanding.
    pub fn complete(&mut self, result: Result<(), DeliveryError>) -> Option<RevertTimer> {
        if !self.mounted || self.state != SubmissionState::Sending {
            return None;
        }
        match result {
            Ok(()) => {
                log::info!("[contact] message delivered");
                self.state = SubmissionState::Success;
                self.fields.clear();
            }
            Err(e) => {
                log::error!("[contact] delivery failed: {}", e);
                self.state = SubmissionState::Error;
            }
        }
        self.ticket += 1;
        Some(RevertTimer {
            ticket: self.ticket,
            delay_ms: STATUS_REVERT_MS,
        })
    }

    /// Timer callback. Returns true if the banner was dismissed.
    pub fn revert(&mut self, ticket: u64) -> bool {
        let showing_banner = matches!(
            self.state,
            SubmissionState::Success | SubmissionState::Error
        );
        if self.mounted && showing_banner && ticket == self.ticket {
            self.state = SubmissionState::Idle;
            true
        } else {
            false
        }
    }

    /// Invalidate every outstanding ticket; later `complete`/`revert` calls
    /// are ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.ticket += 1;
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
