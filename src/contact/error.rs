//! Contact submission errors.

use crate::i18n::{Language, Text};
use thiserror::Error;

/// Result type alias for contact operations
pub type Result<T> = std::result::Result<T, ContactError>;

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::InvalidEmail => Field::Email,
        }
    }

    pub fn text(&self) -> Text {
        match self {
            FieldError::Required(_) => Text::ErrorRequired,
            FieldError::InvalidEmail => Text::ErrorInvalidEmail,
        }
    }
}

/// Everything that can go wrong between pressing "send" and a confirmed delivery.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    /// No relay endpoint configured
    #[error("contact endpoint not configured")]
    NotConfigured,

    /// One or more fields failed validation
    #[error("invalid form: {0:?}")]
    Validation(Vec<FieldError>),

    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),

    /// The relay answered but did not accept the message
    #[error("rejected with status {status}: {}", message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The response body was not the expected JSON
    #[error("decode error: {0}")]
    Decode(String),
}

impl ContactError {
    /// Message shown inline in the modal.
    ///
    /// A relay-provided message wins; everything else maps to a localized string.
    pub fn user_message(&self, lang: Language) -> String {
        match self {
            ContactError::NotConfigured => lang.text(Text::ErrorNotConfigured).to_string(),
            ContactError::Validation(errors) => {
                let key = if !errors.is_empty()
                    && errors.iter().all(|e| *e == FieldError::InvalidEmail)
                {
                    Text::ErrorInvalidEmail
                } else {
                    Text::ErrorRequired
                };
                lang.text(key).to_string()
            }
            ContactError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => lang.text(Text::ErrorGeneric).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_relay_text() {
        let err = ContactError::Rejected {
            status: 429,
            message: Some("Too many requests. Please wait a minute.".into()),
        };
        assert_eq!(
            err.user_message(Language::Greek),
            "Too many requests. Please wait a minute."
        );
    }

    #[test]
    fn test_user_message_falls_back_to_localized() {
        let err = ContactError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(
            err.user_message(Language::English),
            "Something went wrong. Please try again."
        );
        assert_eq!(
            ContactError::NotConfigured.user_message(Language::Greek),
            "Η φόρμα δεν έχει συνδεθεί ακόμα. Δοκιμάστε αργότερα."
        );
        assert_eq!(
            ContactError::Network("offline".into()).user_message(Language::English),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn test_validation_message() {
        let only_email = ContactError::Validation(vec![FieldError::InvalidEmail]);
        assert_eq!(
            only_email.user_message(Language::Greek),
            "Μη έγκυρη διεύθυνση email."
        );

        let mixed = ContactError::Validation(vec![
            FieldError::Required(Field::Name),
            FieldError::InvalidEmail,
        ]);
        assert_eq!(
            mixed.user_message(Language::Greek),
            "Συμπληρώστε όλα τα υποχρεωτικά πεδία."
        );
    }
}
