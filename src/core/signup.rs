//! Client-side rules for the trial signup form.
//!
//! Submission is simulated - a fixed delay stands in for transport - so the
//! only failure mode is a field failing validation. The real signup backend
//! contract is undefined; `Config::signup_webhook_url` reserves the seam a
//! production transport would plug into.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::notify::Notice;

/// Minimum length for the name and company fields.
pub const MIN_FIELD_LEN: usize = 2;

/// Simulated round-trip before the success notice.
pub const SUBMIT_DELAY_MS: u32 = 2_000;

/// Field-level validation failure, displayed next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldError {
    #[display("First name must be at least 2 characters")]
    FirstNameTooShort,
    #[display("Last name must be at least 2 characters")]
    LastNameTooShort,
    #[display("Please enter a valid email address")]
    InvalidEmail,
    #[display("Company name must be at least 2 characters")]
    CompanyTooShort,
}

/// The four signup fields, mirrored into signals by the form component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
}

impl SignupForm {
    pub fn validate_first_name(&self) -> Result<(), FieldError> {
        if self.first_name.trim().chars().count() < MIN_FIELD_LEN {
            Err(FieldError::FirstNameTooShort)
        } else {
            Ok(())
        }
    }

    pub fn validate_last_name(&self) -> Result<(), FieldError> {
        if self.last_name.trim().chars().count() < MIN_FIELD_LEN {
            Err(FieldError::LastNameTooShort)
        } else {
            Ok(())
        }
    }

    pub fn validate_email(&self) -> Result<(), FieldError> {
        if is_valid_email(&self.email) {
            Ok(())
        } else {
            Err(FieldError::InvalidEmail)
        }
    }

    pub fn validate_company(&self) -> Result<(), FieldError> {
        if self.company.trim().chars().count() < MIN_FIELD_LEN {
            Err(FieldError::CompanyTooShort)
        } else {
            Ok(())
        }
    }

    /// Check every field. An empty result means the form may be submitted.
    pub fn validate(&self) -> Vec<FieldError> {
        [
            self.validate_first_name(),
            self.validate_last_name(),
            self.validate_email(),
            self.validate_company(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Clear all fields, as after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Minimal email shape check: a non-empty local part and a dotted domain,
/// with no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|part| !part.is_empty())
}

/// Success notice shown once the simulated submit completes.
pub fn success_notice(first_name: &str) -> Notice {
    Notice::success(
        "Welcome to Proactive IT Agent!",
        format!("Thank you {first_name}! Check your email for next steps."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@company.com".to_string(),
            company: "Acme Corp".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let form = valid_form();
        assert!(form.validate().is_empty());
        assert!(form.is_valid());
    }

    #[test]
    fn test_one_char_first_name_rejected() {
        let form = SignupForm {
            first_name: "A".to_string(),
            ..valid_form()
        };
        assert_eq!(
            form.validate_first_name(),
            Err(FieldError::FirstNameTooShort)
        );
        assert_eq!(
            FieldError::FirstNameTooShort.to_string(),
            "First name must be at least 2 characters"
        );
    }

    #[test]
    fn test_whitespace_only_fields_rejected() {
        let form = SignupForm {
            first_name: "  ".to_string(),
            last_name: " x ".to_string(),
            company: "\t".to_string(),
            ..valid_form()
        };
        assert!(form.validate_first_name().is_err());
        assert!(form.validate_last_name().is_err());
        assert!(form.validate_company().is_err());
    }

    #[test]
    fn test_validate_collects_every_failure() {
        let form = SignupForm::default();
        let errors = form.validate();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&FieldError::InvalidEmail));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("john@company.com"));
        assert!(is_valid_email("j.doe@sub.company.co.uk"));
        assert!(is_valid_email("  padded@company.com  "));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("john"));
        assert!(!is_valid_email("john@"));
        assert!(!is_valid_email("@company.com"));
        assert!(!is_valid_email("john@company"));
        assert!(!is_valid_email("john@company..com"));
        assert!(!is_valid_email("john doe@company.com"));
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = valid_form();
        form.reset();
        assert_eq!(form, SignupForm::default());
        assert!(form.first_name.is_empty());
    }

    #[test]
    fn test_success_notice_includes_first_name() {
        let notice = success_notice("Sarah");
        assert!(notice.message.contains("Sarah"));
        assert_eq!(notice.kind, crate::core::notify::NoticeKind::Success);
    }
}
