//! Email format check backed by the `validator` crate.

use validator::ValidateEmail;

use crate::ports::EmailFormatValidator;

/// HTML5-style email syntax check.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorEmailFormat;

impl ValidatorEmailFormat {
    pub fn new() -> Self {
        Self
    }
}

impl EmailFormatValidator for ValidatorEmailFormat {
    fn is_valid_email_format(&self, candidate: &str) -> bool {
        candidate.to_owned().validate_email()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_addresses() {
        let validator = ValidatorEmailFormat::new();
        assert!(validator.is_valid_email_format("bob@example.com"));
        assert!(validator.is_valid_email_format("first.last+tag@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        let validator = ValidatorEmailFormat::new();
        assert!(!validator.is_valid_email_format(""));
        assert!(!validator.is_valid_email_format("not-an-email"));
        assert!(!validator.is_valid_email_format("bob@"));
        assert!(!validator.is_valid_email_format("@example.com"));
    }
}
