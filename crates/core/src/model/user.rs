use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("player name cannot be empty")]
    EmptyUsername,
}

/// A player identity.
///
/// Passwords are optional and kept as plain text; an empty password is
/// treated the same as no password at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    username: String,
    password: Option<String>,
}

impl User {
    /// Builds a user, trimming the name and normalizing blank passwords to `None`.
    ///
    /// # Errors
    ///
    /// Returns `UserError::EmptyUsername` if the trimmed name is empty.
    pub fn new(username: impl Into<String>, password: Option<String>) -> Result<Self, UserError> {
        let username = normalize_username(&username.into())?;
        Ok(Self {
            username,
            password: password.filter(|p| !p.is_empty()),
        })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Compares a login attempt against the stored password.
    #[must_use]
    pub fn password_matches(&self, candidate: Option<&str>) -> bool {
        self.password().unwrap_or_default() == candidate.unwrap_or_default()
    }

    /// Copy of this user without the password, safe to hand to the UI.
    #[must_use]
    pub fn public(&self) -> Self {
        Self {
            username: self.username.clone(),
            password: None,
        }
    }
}

/// Trims surrounding whitespace from a player name.
///
/// # Errors
///
/// Returns `UserError::EmptyUsername` if nothing is left.
pub fn normalize_username(raw: &str) -> Result<String, UserError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UserError::EmptyUsername);
    }
    Ok(trimmed.to_string())
}
