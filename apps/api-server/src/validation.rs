//! Request validation.
//!
//! An explicit step ahead of the flows: by the time a request reaches
//! keystone-core, its shape is already known to be good. Failures carry the
//! offending field so clients can render per-field messages.

use keystone_shared::dto::{LoginRequest, RegisterRequest};

use crate::middleware::error::{AppError, FieldError};

const MAX_FIELD_LEN: usize = 255;
const MIN_PASSWORD_LEN: usize = 8;

pub fn validate_register(req: &RegisterRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if req.name.trim().is_empty() {
        errors.push(FieldError::new("name", "The name field is required."));
    } else if req.name.len() > MAX_FIELD_LEN {
        errors.push(FieldError::new(
            "name",
            format!("The name may not be greater than {MAX_FIELD_LEN} characters."),
        ));
    }

    validate_email_field(&req.email, &mut errors);

    if req.password.is_empty() {
        errors.push(FieldError::new("password", "The password field is required."));
    } else if req.password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            format!("The password must be at least {MIN_PASSWORD_LEN} characters."),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

pub fn validate_login(req: &LoginRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if req.email.trim().is_empty() {
        errors.push(FieldError::new("email", "The email field is required."));
    }
    if req.password.is_empty() {
        errors.push(FieldError::new("password", "The password field is required."));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn validate_email_field(email: &str, errors: &mut Vec<FieldError>) {
    if email.trim().is_empty() {
        errors.push(FieldError::new("email", "The email field is required."));
        return;
    }
    if email.len() > MAX_FIELD_LEN {
        errors.push(FieldError::new(
            "email",
            format!("The email may not be greater than {MAX_FIELD_LEN} characters."),
        ));
        return;
    }
    if !looks_like_email(email) {
        errors.push(FieldError::new(
            "email",
            "The email must be a valid email address.",
        ));
    }
}

/// Plausible `local@domain`, nothing more. Deliverability is not a
/// registration-time concern.
fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !s.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        let req = register_request("Jane Doe", "jane@example.com", "password123");
        assert!(validate_register(&req).is_ok());
    }

    #[test]
    fn missing_fields_are_each_reported() {
        let req = register_request("", "", "");

        let err = validate_register(&req).unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };

        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "password"]);
    }

    #[test]
    fn short_password_is_rejected() {
        let req = register_request("Jane", "jane@example.com", "short");

        let err = validate_register(&req).unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["no-at-sign", "@nodomain", "nolocal@", "two@@ats", "sp ace@x.com"] {
            let req = register_request("Jane", email, "password123");
            assert!(validate_register(&req).is_err(), "accepted {email:?}");
        }
    }

    #[test]
    fn login_requires_email_and_password() {
        let err = validate_login(&LoginRequest {
            email: String::new(),
            password: String::new(),
        })
        .unwrap_err();

        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 2);
    }
}
