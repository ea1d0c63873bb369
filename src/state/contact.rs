//! Contact modal state.

use crate::contact::{ContactError, ContactForm, ContactReceipt, Field, FieldError};
use std::time::Duration;
use web_time::Instant;

/// How long the success panel stays up before the modal closes itself
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_millis(3200);

/// Where the modal is in the submit cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent {
        closes_at: Instant,
    },
    /// Localized when drawn, so a language switch also updates the message
    Failed(ContactError),
}

#[derive(Debug, Default)]
pub struct ContactModalState {
    pub open: bool,
    pub form: ContactForm,
    pub status: ContactStatus,
    pub field_errors: Vec<FieldError>,
}

impl ContactModalState {
    /// Opens the modal with an empty form.
    ///
    /// A submission still in flight keeps its form and status, so the
    /// reopened modal shows it sending and its outcome lands on that form.
    pub fn open(&mut self) {
        self.open = true;
        if self.is_sending() {
            log::debug!("Contact modal reopened while a submission is in flight");
            return;
        }
        self.form.clear();
        self.status = ContactStatus::Idle;
        self.field_errors.clear();
        log::debug!("Contact modal opened");
    }

    pub fn close(&mut self) {
        if self.open {
            log::debug!("Contact modal closed");
        }
        self.open = false;
    }

    pub fn is_sending(&self) -> bool {
        self.status == ContactStatus::Sending
    }

    pub fn field_error(&self, field: Field) -> Option<FieldError> {
        self.field_errors
            .iter()
            .copied()
            .find(|e| e.field() == field)
    }

    pub fn begin_sending(&mut self) {
        self.field_errors.clear();
        self.status = ContactStatus::Sending;
    }

    /// Records a submission outcome.
    pub fn finish(&mut self, result: Result<ContactReceipt, ContactError>, now: Instant) {
        match result {
            Ok(_) => {
                self.field_errors.clear();
                self.status = ContactStatus::Sent {
                    closes_at: now + AUTO_CLOSE_DELAY,
                };
            }
            Err(err) => {
                if let ContactError::Validation(errors) = &err {
                    self.field_errors = errors.clone();
                }
                self.status = ContactStatus::Failed(err);
            }
        }
    }

    /// Closes the modal once the success panel has been shown long enough.
    ///
    /// Returns the remaining time while the countdown is running.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let ContactStatus::Sent { closes_at } = self.status else {
            return None;
        };
        if !self.open {
            return None;
        }
        if now >= closes_at {
            self.close();
            None
        } else {
            Some(closes_at - now)
        }
    }
}
