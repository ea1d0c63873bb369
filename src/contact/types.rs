//! Wire types for the contact relay.

use super::error::{ContactError, Result};
use serde::{Deserialize, Serialize};

/// JSON body posted to the relay. All fields are already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// JSON body returned by the relay.
///
/// A CMS error object (`{code, message, data}`) has no `success` field and
/// decodes as a failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
}

/// A delivered message.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactReceipt {
    pub id: Option<u64>,
    pub message: Option<String>,
}

/// Interprets an HTTP status and body from the relay.
pub fn decode_response(status: u16, body: &str) -> Result<ContactReceipt> {
    let ok_status = (200..300).contains(&status);

    let response: ContactResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) if ok_status => return Err(ContactError::Decode(e.to_string())),
        Err(_) => {
            return Err(ContactError::Rejected {
                status,
                message: None,
            })
        }
    };

    if ok_status && response.success {
        Ok(ContactReceipt {
            id: response.id,
            message: response.message,
        })
    } else {
        Err(ContactError::Rejected {
            status,
            message: response.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_field_names() {
        let payload = ContactPayload {
            name: "Ελένη".into(),
            email: "eleni@example.gr".into(),
            subject: "Γενική Απορία".into(),
            message: "Γεια σας".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["email"], "eleni@example.gr");
        assert_eq!(obj["subject"], "Γενική Απορία");
    }

    #[test]
    fn test_decode_success() {
        let receipt = decode_response(
            200,
            r#"{"success":true,"message":"Το μήνυμά σας εστάλη επιτυχώς!","id":42}"#,
        )
        .unwrap();
        assert_eq!(receipt.id, Some(42));
        assert!(receipt.message.unwrap().contains("επιτυχώς"));
    }

    #[test]
    fn test_decode_cms_error_object() {
        let body = r#"{"code":"rate_limited","message":"Too many requests. Please wait a minute.","data":{"status":429}}"#;
        let err = decode_response(429, body).unwrap_err();
        assert_eq!(
            err,
            ContactError::Rejected {
                status: 429,
                message: Some("Too many requests. Please wait a minute.".into()),
            }
        );
    }

    #[test]
    fn test_decode_missing_fields_is_failure() {
        let err = decode_response(200, "{}").unwrap_err();
        assert_eq!(
            err,
            ContactError::Rejected {
                status: 200,
                message: None,
            }
        );
    }

    #[test]
    fn test_decode_success_flag_ignored_on_error_status() {
        let err = decode_response(500, r#"{"success":true}"#).unwrap_err();
        assert!(matches!(err, ContactError::Rejected { status: 500, .. }));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode_response(200, "<html>"),
            Err(ContactError::Decode(_))
        ));
        assert!(matches!(
            decode_response(502, "Bad Gateway"),
            Err(ContactError::Rejected {
                status: 502,
                message: None
            })
        ));
    }
}
