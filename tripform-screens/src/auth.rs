use serde::{Deserialize, Serialize};
use tripform_shared::Masked;

/// Validation failures surfaced as blocking alerts on the auth screens.
/// There is no real backend; these presence checks are the only gate.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please fill all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please enter your email or phone number")]
    MissingContact,
}

/// Login form. Any non-empty credential pair is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: Masked<String>,
}

impl LoginForm {
    pub fn submit(&self) -> Result<(), AuthError> {
        if self.email.is_empty() || self.password.0.is_empty() {
            return Err(AuthError::MissingFields);
        }
        tracing::info!(email = %self.email, "login accepted");
        Ok(())
    }
}

/// Registration form: all fields present and the password confirmed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegisterForm {
    pub email: String,
    pub password: Masked<String>,
    pub confirm_password: Masked<String>,
}

impl RegisterForm {
    pub fn submit(&self) -> Result<(), AuthError> {
        if self.email.is_empty() || self.password.0.is_empty() || self.confirm_password.0.is_empty()
        {
            return Err(AuthError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        tracing::info!(email = %self.email, "account created");
        Ok(())
    }
}

/// Password-reset request form.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn submit(&self) -> Result<(), AuthError> {
        if self.email.is_empty() {
            return Err(AuthError::MissingContact);
        }
        tracing::info!(email = %self.email, "password reset instructions sent");
        Ok(())
    }
}
