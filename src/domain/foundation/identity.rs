//! Identity of the business owner filling the diagnostic.
//!
//! Issued by the external auth collaborator; the wizard only reads it.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Opaque `{ name, email }` context attached to every submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    name: String,
    email: String,
}

impl Identity {
    /// Creates an identity, rejecting blank or malformed emails.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();

        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }

        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Case-insensitive key used to index per-user state.
    pub fn key(&self) -> String {
        self.email.to_lowercase()
    }
}
