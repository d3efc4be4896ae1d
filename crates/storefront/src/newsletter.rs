//! Newsletter signup.
//!
//! The form used to lean on the browser's native validation and then
//! flash a success message. Here the validation is explicit: a signup is
//! accepted only for a structurally valid address, and acceptance emits
//! the event the toast queue listens for.

use lumiere_core::{Email, EmailError};

/// Validate a newsletter signup.
///
/// Leading and trailing whitespace is forgiven - pasted addresses
/// usually carry some.
///
/// # Errors
///
/// Returns the validation failure for the caller to show inline.
pub fn subscribe(input: &str) -> Result<Email, EmailError> {
    Email::parse(input.trim())
}
