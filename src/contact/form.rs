//! Contact form state machine.
//!
//! Framework-free so the lifecycle invariants can be tested without a DOM.
//! The Yew wiring lives in [`super::section`]; the network side effect lives
//! in [`super::relay`].

use crate::contact::relay::SubmitOutcome;

/// Upper bound on the message field, enforced at the input layer.
pub const MESSAGE_MAX_LEN: usize = 500;

/// Submission lifecycle. `Succeeded` is terminal; failure is not a state of
/// its own, it returns the form to `Editing` with a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Editing,
    Submitting,
    Succeeded,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    fields: ContactFields,
    lifecycle: Lifecycle,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            lifecycle: Lifecycle::Editing,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Stores a field edit. Only accepted while `Editing`; the message value
    /// is clipped to [`MESSAGE_MAX_LEN`] characters before storage, so the
    /// remaining-length counter can never go negative. Returns whether the
    /// edit was applied.
    pub fn set_field(&mut self, field: Field, value: String) -> bool {
        if self.lifecycle != Lifecycle::Editing {
            return false;
        }
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Subject => self.fields.subject = value,
            Field::Message => self.fields.message = clip_message(value),
        }
        true
    }

    /// All fields filled in (non-empty after trim) and the form is editable.
    pub fn can_submit(&self) -> bool {
        self.lifecycle == Lifecycle::Editing
            && [
                &self.fields.name,
                &self.fields.email,
                &self.fields.subject,
                &self.fields.message,
            ]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    /// Starts a submission: transitions to `Submitting` synchronously and
    /// returns the payload snapshot to send. A second invocation while one is
    /// in flight observes `Submitting` and gets `None`, so a rapid
    /// double-submit cannot start two relay calls.
    pub fn begin_submit(&mut self) -> Option<ContactFields> {
        if !self.can_submit() {
            return None;
        }
        self.lifecycle = Lifecycle::Submitting;
        Some(self.fields.clone())
    }

    /// Applies the settlement of the in-flight submission. Delivery makes the
    /// form terminal; failure returns it to `Editing` with the fields kept
    /// exactly as typed. Returns whether a failure notice must be surfaced.
    /// Settlements arriving outside `Submitting` (e.g. after the hosting
    /// section was torn down and remounted) are ignored.
    pub fn resolve(&mut self, outcome: SubmitOutcome) -> bool {
        if self.lifecycle != Lifecycle::Submitting {
            return false;
        }
        match outcome {
            SubmitOutcome::Delivered => {
                self.lifecycle = Lifecycle::Succeeded;
                false
            }
            SubmitOutcome::Failed => {
                self.lifecycle = Lifecycle::Editing;
                true
            }
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

fn clip_message(value: String) -> String {
    match value.char_indices().nth(MESSAGE_MAX_LEN) {
        Some((cut, _)) => value[..cut].to_string(),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Jo".into());
        form.set_field(Field::Email, "jo@x.com".into());
        form.set_field(Field::Subject, "Hi".into());
        form.set_field(Field::Message, "Test".into());
        form
    }

    #[test]
    fn edits_are_stored_exactly_while_editing() {
        let mut form = ContactForm::new();
        assert!(form.set_field(Field::Name, "Jo".into()));
        assert!(form.set_field(Field::Message, "hello there".into()));
        assert_eq!(form.fields().name, "Jo");
        assert_eq!(form.fields().message, "hello there");
    }

    #[test]
    fn message_is_clipped_to_the_bound() {
        let mut form = ContactForm::new();
        form.set_field(Field::Message, "x".repeat(MESSAGE_MAX_LEN + 40));
        assert_eq!(form.fields().message.chars().count(), MESSAGE_MAX_LEN);

        // Multi-byte characters count as characters, not bytes.
        form.set_field(Field::Message, "ä".repeat(MESSAGE_MAX_LEN + 1));
        assert_eq!(form.fields().message.chars().count(), MESSAGE_MAX_LEN);
    }

    #[test]
    fn message_at_the_bound_is_kept_whole() {
        let mut form = ContactForm::new();
        form.set_field(Field::Message, "y".repeat(MESSAGE_MAX_LEN));
        assert_eq!(form.fields().message.len(), MESSAGE_MAX_LEN);
    }

    #[test]
    fn submit_requires_every_field() {
        let mut form = ContactForm::new();
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), None);

        form.set_field(Field::Name, "Jo".into());
        form.set_field(Field::Email, "jo@x.com".into());
        form.set_field(Field::Subject, "Hi".into());
        form.set_field(Field::Message, "   ".into());
        assert!(!form.can_submit(), "whitespace-only message must not count");

        form.set_field(Field::Message, "Test".into());
        assert!(form.can_submit());
    }

    #[test]
    fn double_submit_is_a_no_op() {
        let mut form = filled_form();
        let payload = form.begin_submit().expect("first submit starts");
        assert_eq!(payload.message, "Test");
        assert_eq!(form.lifecycle(), Lifecycle::Submitting);

        // Second click lands while the call is in flight.
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.lifecycle(), Lifecycle::Submitting);
    }

    #[test]
    fn edits_are_rejected_while_submitting() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert!(!form.set_field(Field::Message, "changed".into()));
        assert_eq!(form.fields().message, "Test");
    }

    #[test]
    fn delivery_is_terminal() {
        let mut form = filled_form();
        let submitted = form.begin_submit().unwrap();
        assert!(!form.resolve(SubmitOutcome::Delivered));
        assert_eq!(form.lifecycle(), Lifecycle::Succeeded);
        assert_eq!(form.fields(), &submitted);

        // Read-only from here on.
        assert!(!form.set_field(Field::Name, "else".into()));
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn failure_returns_to_editing_with_fields_intact() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert!(form.resolve(SubmitOutcome::Failed), "one notice is due");
        assert_eq!(form.lifecycle(), Lifecycle::Editing);
        assert_eq!(form.fields().name, "Jo");
        assert_eq!(form.fields().email, "jo@x.com");
        assert_eq!(form.fields().subject, "Hi");
        assert_eq!(form.fields().message, "Test");

        // The user may resubmit explicitly.
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn stale_settlements_are_ignored() {
        let mut form = filled_form();
        assert!(!form.resolve(SubmitOutcome::Failed), "not submitting");
        assert_eq!(form.lifecycle(), Lifecycle::Editing);

        form.begin_submit().unwrap();
        form.resolve(SubmitOutcome::Delivered);
        assert!(!form.resolve(SubmitOutcome::Failed), "already settled");
        assert_eq!(form.lifecycle(), Lifecycle::Succeeded);
    }
}
