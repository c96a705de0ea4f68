use contracts::{ContactDraft, ContactReceipt, ContactRequest, Field, FieldErrors};
use log::info;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

/// Identifies one submission attempt. Continuations holding an outdated
/// ticket are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRefused {
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] FieldErrors),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// The page moved on (unmount or newer attempt); nothing changed.
    Stale,
    Failed,
    /// Schedule the acknowledgement dismissal with this ticket.
    Succeeded(Ticket),
}

/// Contact page state: the draft, its inline errors, and the submission
/// lifecycle. At most one submission is in flight.
#[derive(Debug, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    errors: FieldErrors,
    state: SubmissionState,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Updates one field. A field already flagged is re-checked so its
    /// message clears as soon as the input becomes valid.
    pub fn edit(&mut self, field: Field, value: String) {
        self.draft.set_field(field, value);
        if self.errors.get(field).is_some() {
            match self.draft.check(field) {
                Some(message) => self.errors.insert(field, message),
                None => self.errors.remove(field),
            }
        }
    }

    pub fn begin_submit(&mut self) -> Result<(ContactRequest, Ticket), SubmitRefused> {
        if self.state == SubmissionState::Submitting {
            return Err(SubmitRefused::InFlight);
        }
        match self.draft.validate() {
            Ok(request) => {
                self.errors = FieldErrors::default();
                self.generation += 1;
                self.state = SubmissionState::Submitting;
                Ok((request, Ticket(self.generation)))
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitRefused::Invalid(errors))
            }
        }
    }

    /// Applies the transport outcome. Success clears every field; failure
    /// keeps them so the visitor can retry.
    pub fn finish(&mut self, ticket: Ticket, outcome: Result<ContactReceipt, String>) -> Finish {
        if ticket.0 != self.generation || self.state != SubmissionState::Submitting {
            return Finish::Stale;
        }
        match outcome {
            Ok(receipt) => {
                info!("Contact submission accepted: {}", receipt.id);
                self.draft = ContactDraft::default();
                self.state = SubmissionState::Submitted;
                Finish::Succeeded(ticket)
            }
            Err(message) => {
                self.state = SubmissionState::Failed(message);
                Finish::Failed
            }
        }
    }

    /// Hides the acknowledgement of attempt `ticket`. Returns whether the
    /// state changed.
    pub fn dismiss(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || self.state != SubmissionState::Submitted {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }

    /// Makes every outstanding continuation stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Grace Hopper".to_string());
        form.edit(Field::Email, "grace@example.com".to_string());
        form.edit(Field::Service, "website".to_string());
        form.edit(Field::Budget, "10k-25k".to_string());
        form.edit(Field::Message, message.to_string());
        form
    }

    fn receipt() -> ContactReceipt {
        ContactReceipt {
            id: "3f1c".to_string(),
            received_at: "2024-05-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_short_message_stays_idle() {
        let mut form = filled("123456789");
        let refused = form.begin_submit().unwrap_err();
        assert!(matches!(refused, SubmitRefused::Invalid(_)));
        assert_eq!(
            form.errors().get(Field::Message),
            Some("Message must be at least 10 characters")
        );
        assert_eq!(*form.state(), SubmissionState::Idle);
        assert!(!form.is_submit_disabled());
    }

    #[test]
    fn test_full_submission_cycle() {
        let mut form = filled("1234567890");
        let (request, ticket) = form.begin_submit().unwrap();
        assert_eq!(request.message, "1234567890");
        assert_eq!(*form.state(), SubmissionState::Submitting);
        assert!(form.is_submit_disabled());

        assert_eq!(form.finish(ticket, Ok(receipt())), Finish::Succeeded(ticket));
        assert_eq!(*form.state(), SubmissionState::Submitted);
        assert_eq!(*form.draft(), ContactDraft::default());

        assert!(form.dismiss(ticket));
        assert_eq!(*form.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_second_submit_refused_while_in_flight() {
        let mut form = filled("1234567890");
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit().unwrap_err(), SubmitRefused::InFlight);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled("1234567890");
        let (_, ticket) = form.begin_submit().unwrap();
        assert_eq!(form.finish(ticket, Err("Server unavailable".to_string())), Finish::Failed);
        assert_eq!(*form.state(), SubmissionState::Failed("Server unavailable".to_string()));
        assert_eq!(form.draft().message, "1234567890");
        assert!(!form.is_submit_disabled());
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_completion_after_unmount_is_stale() {
        let mut form = filled("1234567890");
        let (_, ticket) = form.begin_submit().unwrap();
        form.invalidate();
        assert_eq!(form.finish(ticket, Ok(receipt())), Finish::Stale);
        assert_eq!(form.draft().name, "Grace Hopper");
    }

    #[test]
    fn test_old_dismissal_does_not_hide_new_acknowledgement() {
        let mut form = filled("1234567890");
        let (_, first) = form.begin_submit().unwrap();
        form.finish(first, Ok(receipt()));

        let mut form_again = filled("another message");
        std::mem::swap(&mut form.draft, &mut form_again.draft);
        let (_, second) = form.begin_submit().unwrap();
        form.finish(second, Ok(receipt()));

        assert!(!form.dismiss(first));
        assert_eq!(*form.state(), SubmissionState::Submitted);
        assert!(form.dismiss(second));
    }

    #[test]
    fn test_edit_clears_flagged_error_only() {
        let mut form = ContactForm::new();
        form.begin_submit().unwrap_err();
        assert_eq!(form.errors().len(), 5);

        form.edit(Field::Name, "Al".to_string());
        assert!(form.errors().get(Field::Name).is_none());
        form.edit(Field::Email, "not-an-email".to_string());
        assert_eq!(form.errors().get(Field::Email), Some("Invalid email address"));
        assert_eq!(form.errors().len(), 4);
    }
}
