//! # Login and registration gates
//!
//! Registration is a three-step gate: request a code for a plausible email,
//! verify a code of at least four characters, then submit once every field
//! checks out and the code has been verified. Each check runs before the
//! corresponding network call.

use api::models::{LoginRequest, RegisterRequest};
use api::RegistrationFailure;
use thiserror::Error;

use crate::failure::Failure;

pub const MIN_PASSWORD_CHARS: usize = 4;
pub const MIN_CODE_CHARS: usize = 4;

/// Shown for any failed login; the backend gives no field-level detail.
pub const LOGIN_FAILED: &str = "Login failed. Please check your email and password.";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoginFormError {
    #[error("Please enter your email and password.")]
    MissingCredentials,
}

pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, LoginFormError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(LoginFormError::MissingCredentials);
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Please check the email format.")]
    InvalidEmail,
    #[error("Please enter the verification code.")]
    CodeTooShort,
    #[error("Please fill in every field.")]
    MissingFields,
    #[error("Password must be at least 4 characters.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Please verify your email first.")]
    NotVerified,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    email: String,
    pub code: String,
    pub password: String,
    pub confirm_password: String,
    code_sent: bool,
    verified: bool,
}

fn has_email_shape(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

impl RegistrationForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Changing the email invalidates any code sent to the previous one.
    pub fn set_email(&mut self, email: impl Into<String>) {
        let email = email.into();
        if email != self.email {
            self.email = email;
            self.code_sent = false;
            self.verified = false;
            self.code.clear();
        }
    }

    pub fn code_sent(&self) -> bool {
        self.code_sent
    }

    pub fn verified(&self) -> bool {
        self.verified
    }

    /// Gate (a): an email with an `@` before a code can be requested.
    pub fn check_send_code(&self) -> Result<(), RegistrationError> {
        if self.email.contains('@') {
            Ok(())
        } else {
            Err(RegistrationError::InvalidEmail)
        }
    }

    pub fn mark_code_sent(&mut self) {
        self.code_sent = true;
    }

    /// Gate (b): a code of at least four characters before verification.
    pub fn check_verify(&self) -> Result<(), RegistrationError> {
        if self.code.trim().chars().count() >= MIN_CODE_CHARS {
            Ok(())
        } else {
            Err(RegistrationError::CodeTooShort)
        }
    }

    pub fn mark_verified(&mut self) {
        self.verified = true;
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    /// Gate (c): full validation, producing the register body.
    pub fn validate(&self) -> Result<RegisterRequest, RegistrationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() || self.password.is_empty() || self.confirm_password.is_empty() {
            return Err(RegistrationError::MissingFields);
        }
        if !has_email_shape(email) {
            return Err(RegistrationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(RegistrationError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        if !self.verified || self.code.trim().is_empty() {
            return Err(RegistrationError::NotVerified);
        }
        Ok(RegisterRequest {
            email: email.to_string(),
            name: name.to_string(),
            password: self.password.clone(),
            code: self.code.trim().to_string(),
        })
    }
}

/// User-facing text for a failed register-then-login submission.
pub fn registration_failure_message(failure: &RegistrationFailure) -> String {
    match failure {
        RegistrationFailure::Register(err) => {
            Failure::server_or_unknown(err).message("Something went wrong. Please try again.")
        }
        RegistrationFailure::LoginAfterRegister(_) => {
            "Your account was created, but signing in failed. Please log in.".to_string()
        }
    }
}
