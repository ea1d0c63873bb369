//! Contact form fields and client-side validation.

use super::error::{ContactError, Field, FieldError, Result};
use super::types::ContactPayload;
use crate::i18n::{Language, Text};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("static email pattern must compile")
});

/// Returns true for a plausible `local@domain.tld` address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Text entered in the contact modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks required fields and the email address, then builds the payload.
    ///
    /// An empty subject becomes the localized "general inquiry" subject.
    pub fn validate(&self, lang: Language) -> Result<ContactPayload> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        let mut errors = Vec::new();
        if name.is_empty() {
            errors.push(FieldError::Required(Field::Name));
        }
        if email.is_empty() {
            errors.push(FieldError::Required(Field::Email));
        } else if !is_valid_email(email) {
            errors.push(FieldError::InvalidEmail);
        }
        if message.is_empty() {
            errors.push(FieldError::Required(Field::Message));
        }

        if !errors.is_empty() {
            return Err(ContactError::Validation(errors));
        }

        let subject = match self.subject.trim() {
            "" => lang.text(Text::SubjectDefault),
            subject => subject,
        };

        Ok(ContactPayload {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "  Νίκος ".into(),
            email: "nikos@example.gr ".into(),
            subject: String::new(),
            message: "Χρειάζομαι μεταφορά από το λιμάνι.".into(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let payload = filled().validate(Language::Greek).unwrap();
        assert_eq!(payload.name, "Νίκος");
        assert_eq!(payload.email, "nikos@example.gr");
        assert_eq!(payload.subject, "Γενική Απορία");
    }

    #[test]
    fn test_default_subject_follows_language() {
        let payload = filled().validate(Language::English).unwrap();
        assert_eq!(payload.subject, "General inquiry");

        let mut form = filled();
        form.subject = " Κράτηση ".into();
        assert_eq!(form.validate(Language::English).unwrap().subject, "Κράτηση");
    }

    #[test]
    fn test_required_fields() {
        let form = ContactForm {
            name: "   ".into(),
            ..Default::default()
        };
        let err = form.validate(Language::Greek).unwrap_err();
        assert_eq!(
            err,
            ContactError::Validation(vec![
                FieldError::Required(Field::Name),
                FieldError::Required(Field::Email),
                FieldError::Required(Field::Message),
            ])
        );
    }

    #[test]
    fn test_invalid_email() {
        let mut form = filled();
        form.email = "nikos@localhost".into();
        assert_eq!(
            form.validate(Language::Greek).unwrap_err(),
            ContactError::Validation(vec![FieldError::InvalidEmail])
        );
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("a@b.gr"));
        assert!(is_valid_email("first.last+tag@mail.example.com"));
        assert!(!is_valid_email("no-at-sign.gr"));
        assert!(!is_valid_email("two@@example.gr"));
        assert!(!is_valid_email("space in@example.gr"));
        assert!(!is_valid_email("trailing@example."));
    }
}
