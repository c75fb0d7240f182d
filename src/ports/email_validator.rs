//! Email format validation port.

/// Checks whether a string is shaped like an email address.
///
/// Only the syntax is checked; deliverability is out of scope.
pub trait EmailFormatValidator: Send + Sync {
    fn is_valid_email_format(&self, candidate: &str) -> bool;
}
