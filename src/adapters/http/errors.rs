use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::registration::errors::{ProviderError, RegistrationError};

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses.
///
/// Real status codes are used (the always-200 convention of earlier variants
/// is not preserved), but every error body still carries `success: false` so
/// callers that branch on the flag keep working.
#[derive(Debug)]
pub enum ApiError {
  /// Request failed validation before any external call (400)
  Validation(String),

  /// The auth provider already has this email (409)
  EmailTaken,

  /// The auth provider rejected the signup for another reason (422)
  SignupRejected(String),

  /// The auth provider could not be reached (502)
  AuthUnavailable(String),

  /// The profile insert or query failed (502)
  Persistence(String),

  /// No profile exists for the requested identifier (404)
  UserNotFound,

  /// Unexpected internal error (500)
  Internal(String),
}

/// Whether error detail may be included in response bodies. Outside of
/// production the detail helps local debugging; in production it is logged
/// and hidden.
fn expose_error_detail() -> bool {
  std::env::var("RUN_MODE").map(|mode| mode != "production").unwrap_or(true)
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::EmailTaken => write!(f, "Email already registered"),
      ApiError::SignupRejected(msg) => write!(f, "Signup rejected: {}", msg),
      ApiError::AuthUnavailable(msg) => write!(f, "Auth provider unavailable: {}", msg),
      ApiError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
      ApiError::UserNotFound => write!(f, "User not found"),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::EmailTaken => StatusCode::CONFLICT,
      ApiError::SignupRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::AuthUnavailable(_) => StatusCode::BAD_GATEWAY,
      ApiError::Persistence(_) => StatusCode::BAD_GATEWAY,
      ApiError::UserNotFound => StatusCode::NOT_FOUND,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();

    let (error_type, message, stage) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone(), Some("validation")),
      ApiError::EmailTaken => (
        "email_already_registered",
        "An account with this email already exists".to_string(),
        Some("auth"),
      ),
      ApiError::SignupRejected(msg) => ("signup_rejected", msg.clone(), Some("auth")),
      ApiError::AuthUnavailable(msg) => {
        tracing::error!("Auth provider unavailable: {}", msg);
        let message = if expose_error_detail() {
          format!("Auth provider unavailable: {}", msg)
        } else {
          "The authentication service is currently unavailable".to_string()
        };
        ("auth_provider_unavailable", message, Some("auth"))
      }
      ApiError::Persistence(msg) => {
        tracing::error!("Profile persistence failed: {}", msg);
        let message = if expose_error_detail() {
          format!("Profile could not be saved: {}", msg)
        } else {
          "The user profile could not be saved".to_string()
        };
        ("persistence_failed", message, Some("persistence"))
      }
      ApiError::UserNotFound => ("user_not_found", "User not found".to_string(), None),
      ApiError::Internal(msg) => {
        tracing::error!("Internal error: {}", msg);
        let message = if expose_error_detail() {
          msg.clone()
        } else {
          "An internal server error occurred".to_string()
        };
        ("internal_error", message, None)
      }
    };

    let error_response = ErrorResponse {
      success: false,
      error: error_type.to_string(),
      message,
      stage: stage.map(str::to_string),
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

/// Convert RegistrationError to ApiError
impl From<RegistrationError> for ApiError {
  fn from(error: RegistrationError) -> Self {
    match error {
      RegistrationError::Validation(err) => ApiError::Validation(err.to_string()),
      RegistrationError::AuthProvider(ProviderError::EmailTaken) => ApiError::EmailTaken,
      RegistrationError::AuthProvider(ProviderError::Rejected(msg)) => {
        ApiError::SignupRejected(msg)
      }
      RegistrationError::AuthProvider(ProviderError::Unavailable(msg)) => {
        ApiError::AuthUnavailable(msg)
      }
      RegistrationError::Persistence(err) => ApiError::Persistence(err.to_string()),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ApiError::Validation(messages.join(", "))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::registration::errors::StoreError;
  use crate::domain::registration::value_objects::ValueObjectError;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::Validation("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(ApiError::EmailTaken.status_code(), StatusCode::CONFLICT);
    assert_eq!(
      ApiError::SignupRejected("weak password".to_string()).status_code(),
      StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
      ApiError::Persistence("insert failed".to_string()).status_code(),
      StatusCode::BAD_GATEWAY
    );
    assert_eq!(ApiError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
      ApiError::Internal("test".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_registration_error_conversion() {
    let api_error: ApiError = RegistrationError::from(ValueObjectError::MissingName).into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);

    let api_error: ApiError = RegistrationError::from(ProviderError::EmailTaken).into();
    assert_eq!(api_error.status_code(), StatusCode::CONFLICT);

    let api_error: ApiError = RegistrationError::from(StoreError::Unavailable(
      "connection reset".to_string(),
    ))
    .into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_GATEWAY);
  }
}
