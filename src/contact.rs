use leptos::server_fn::{
    codec::JsonEncoding,
    error::{FromServerFnError, ServerFnErrorErr},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notice::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The form control name, also used as the element id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Snapshot of the contact form, as sent to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Whitespace-only values count as empty.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| !self.get(*f).trim().is_empty())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactError {
    #[error("contact relay is not configured: {0} is not set")]
    Configuration(String),
    #[error("message delivery failed: {0}")]
    Delivery(String),
}

impl FromServerFnError for ContactError {
    type Encoder = JsonEncoding;

    fn from_server_fn_error(value: ServerFnErrorErr) -> Self {
        // a request that never reached the relay is still a failed delivery
        Self::Delivery(value.to_string())
    }
}

impl From<&ContactError> for Notice {
    fn from(value: &ContactError) -> Self {
        match value {
            ContactError::Configuration(_) => Notice::NotConfigured,
            ContactError::Delivery(_) => Notice::Failed,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// State of the contact form between mount and unmount.
///
/// Submission is split in two halves so that no borrow is held while the
/// request is in flight: [`ContactForm::begin_submit`] hands out the snapshot
/// and [`ContactForm::finish_submit`] applies the outcome.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactMessage,
    phase: Phase,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    /// Moves to `Submitting` and returns the message to send.
    ///
    /// Returns `None` without changing state while a submission is in flight
    /// or when a field is empty.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.phase == Phase::Submitting || !self.fields.is_complete() {
            return None;
        }
        self.phase = Phase::Submitting;
        Some(self.fields.clone())
    }

    /// Returns to `Idle`; the fields are cleared only on success.
    pub fn finish_submit(&mut self, outcome: &Result<(), ContactError>) -> Notice {
        self.phase = Phase::Idle;
        match outcome {
            Ok(()) => {
                self.fields = ContactMessage::default();
                Notice::Sent
            }
            Err(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.update_field(Field::Name, "Ada");
        form.update_field(Field::Email, "ada@example.com");
        form.update_field(Field::Message, "Hello there");
        form
    }

    #[test]
    fn test_update_field_touches_only_that_field() {
        let mut form = filled_form();
        form.update_field(Field::Email, "x@y.com");

        assert_eq!(form.value(Field::Email), "x@y.com");
        assert_eq!(form.value(Field::Name), "Ada");
        assert_eq!(form.value(Field::Message), "Hello there");
    }

    #[test]
    fn test_begin_submit_requires_every_field() {
        let mut form = ContactForm::default();
        form.update_field(Field::Name, "Ada");
        form.update_field(Field::Email, "ada@example.com");
        form.update_field(Field::Message, "   ");

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn test_second_submit_is_inert_while_in_flight() {
        let mut form = filled_form();
        let snapshot = form.begin_submit().expect("complete form should submit");
        assert_eq!(snapshot.email, "ada@example.com");
        assert!(form.is_submitting());

        assert_eq!(form.begin_submit(), None);
        assert!(form.is_submitting());
    }

    #[test]
    fn test_success_resets_fields() {
        let mut form = filled_form();
        form.begin_submit().expect("complete form should submit");

        let notice = form.finish_submit(&Ok(()));
        assert_eq!(notice, Notice::Sent);
        assert_eq!(form.fields(), &ContactMessage::default());
        assert_eq!(form.phase(), Phase::Idle);

        // reset fields fail the presence check again
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled_form();
        let before = form.fields().clone();
        form.begin_submit().expect("complete form should submit");

        let notice = form.finish_submit(&Err(ContactError::Delivery("timed out".into())));
        assert_eq!(notice, Notice::Failed);
        assert_eq!(form.fields(), &before);
        assert!(!form.is_submitting());

        // user can retry without retyping
        assert_eq!(form.begin_submit(), Some(before));
    }

    #[test]
    fn test_configuration_error_has_its_own_notice() {
        let mut form = filled_form();
        form.begin_submit().expect("complete form should submit");

        let err = ContactError::Configuration("EMAIL_RELAY_PUBLIC_KEY".into());
        assert_eq!(form.finish_submit(&Err(err)), Notice::NotConfigured);
        assert_eq!(form.value(Field::Name), "Ada");
    }

    #[test]
    fn test_transport_errors_become_delivery_failures() {
        let err = ContactError::from_server_fn_error(ServerFnErrorErr::Request(
            "connection reset".into(),
        ));
        assert!(matches!(err, ContactError::Delivery(ref s) if s.contains("connection reset")));
    }
}
