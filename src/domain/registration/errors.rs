use std::fmt;
use thiserror::Error;

use super::value_objects::ValueObjectError;

/// Errors reported by the external auth provider
#[derive(Debug, Error)]
pub enum ProviderError {
  #[error("Email is already registered")]
  EmailTaken,

  #[error("Signup rejected by auth provider: {0}")]
  Rejected(String),

  #[error("Auth provider unavailable: {0}")]
  Unavailable(String),
}

/// Errors reported by the hosted datastore
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Insert into {table} failed: {message}")]
  InsertFailed { table: String, message: String },

  #[error("Query against {table} failed: {message}")]
  QueryFailed { table: String, message: String },

  #[error("Datastore unavailable: {0}")]
  Unavailable(String),
}

/// Registration workflow failure, tagged with the stage that failed.
///
/// Validation failures happen before any external call. Auth failures need
/// no compensation since no identity was created. Persistence failures are
/// reported after the compensating identity delete has been attempted.
#[derive(Debug, Error)]
pub enum RegistrationError {
  #[error("Validation failed: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Auth signup failed: {0}")]
  AuthProvider(#[from] ProviderError),

  #[error("Profile persistence failed: {0}")]
  Persistence(#[from] StoreError),
}

impl RegistrationError {
  /// The workflow stage this failure belongs to
  pub fn stage(&self) -> FailureStage {
    match self {
      RegistrationError::Validation(_) => FailureStage::Validation,
      RegistrationError::AuthProvider(_) => FailureStage::Auth,
      RegistrationError::Persistence(_) => FailureStage::Persistence,
    }
  }
}

/// Workflow stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
  Validation,
  Auth,
  Persistence,
}

impl FailureStage {
  /// Wire name used in error responses
  pub fn as_str(&self) -> &'static str {
    match self {
      FailureStage::Validation => "validation",
      FailureStage::Auth => "auth",
      FailureStage::Persistence => "persistence",
    }
  }
}

impl fmt::Display for FailureStage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
