//! Contact modal backend.
//!
//! Validates the form, posts it as JSON to the configured relay and hands the
//! outcome back to the UI thread through a channel.

mod channel;
mod error;
mod form;
mod types;

pub use channel::ContactChannel;
pub use error::{ContactError, Field, FieldError};
pub use form::ContactForm;
pub use types::ContactReceipt;
