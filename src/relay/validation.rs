use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::error::RelayError;
use crate::constants::{ERROR_FIELDS_REQUIRED, ERROR_INVALID_EMAIL};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

/// Body of `POST /contact`. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// All fields must be non-blank and the email must look like `user@host.tld`
pub fn validate(request: ContactRequest) -> Result<ValidContact, RelayError> {
    let name = request.name.trim();
    let email = request.email.trim();
    let message = request.message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(RelayError::Validation(ERROR_FIELDS_REQUIRED));
    }
    if !is_valid_email(email) {
        return Err(RelayError::Validation(ERROR_INVALID_EMAIL));
    }

    Ok(ValidContact {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}
