use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateEmail;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ValueObjectError {
  #[error("Invalid email format: {0}")]
  InvalidEmail(String),

  #[error("Password is too short (minimum {0} characters)")]
  PasswordTooShort(usize),

  #[error("Password is too long (maximum {0} characters)")]
  PasswordTooLong(usize),

  #[error("Name is required")]
  MissingName,

  #[error("Invalid user identifier: {0}")]
  InvalidIdentifier(String),
}

// ============================================================================
// Email Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
  /// Creates a new Email after validation, trimmed and normalized to
  /// lowercase.
  pub fn new(email: impl Into<String>) -> Result<Self, ValueObjectError> {
    let email = email.into();
    let email = email.trim();

    if !email.validate_email() {
      return Err(ValueObjectError::InvalidEmail(email.to_string()));
    }

    Ok(Self(email.to_lowercase()))
  }

  /// Returns the email as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for Email {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

/// The plain password forwarded to the auth provider over TLS. It is never
/// hashed or persisted locally; the provider owns credential storage.
#[derive(Clone)]
pub struct Password(String);

impl Password {
  const MIN_LENGTH: usize = 8;
  const MAX_LENGTH: usize = 128;

  /// Creates a new Password after validation
  pub fn new(password: impl Into<String>) -> Result<Self, ValueObjectError> {
    let password = password.into();

    if password.len() < Self::MIN_LENGTH {
      return Err(ValueObjectError::PasswordTooShort(Self::MIN_LENGTH));
    }

    if password.len() > Self::MAX_LENGTH {
      return Err(ValueObjectError::PasswordTooLong(Self::MAX_LENGTH));
    }

    Ok(Self(password))
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

// Implement Debug without exposing the password
impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

// Implement Display without exposing the password
impl fmt::Display for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

// ============================================================================
// AuthIdentity Value Object
// ============================================================================

/// The external auth provider's unique user reference. Assigned by the
/// provider on signup; this service references it but never mints one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthIdentity(Uuid);

impl AuthIdentity {
  /// Creates an AuthIdentity from a UUID returned by the provider
  pub fn from_uuid(uuid: Uuid) -> Self {
    Self(uuid)
  }

  /// Parses an AuthIdentity from its string form, rejecting anything that
  /// is not UUID-shaped before any external call is made
  pub fn parse(value: &str) -> Result<Self, ValueObjectError> {
    Uuid::from_str(value)
      .map(Self)
      .map_err(|_| ValueObjectError::InvalidIdentifier(value.to_string()))
  }

  /// Returns the inner UUID
  pub fn into_inner(self) -> Uuid {
    self.0
  }

  /// Returns a reference to the inner UUID
  pub fn as_uuid(&self) -> &Uuid {
    &self.0
  }
}

impl fmt::Display for AuthIdentity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<Uuid> for AuthIdentity {
  fn from(uuid: Uuid) -> Self {
    Self(uuid)
  }
}

impl From<AuthIdentity> for Uuid {
  fn from(identity: AuthIdentity) -> Self {
    identity.0
  }
}
