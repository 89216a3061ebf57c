use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request for user registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
  /// User's display name
  #[validate(length(
    min = 1,
    max = 255,
    message = "Name must be between 1 and 255 characters"
  ))]
  pub name: String,

  /// User's email address
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  /// User's password
  #[validate(length(
    min = 8,
    max = 128,
    message = "Password must be between 8 and 128 characters"
  ))]
  pub password: String,

  /// Optional industry
  pub industry: Option<String>,

  /// Optional country
  pub country: Option<String>,

  /// Optional phone number
  pub phone: Option<String>,
}

/// Response after successful user registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
  /// Always true for this response; callers branch on this field
  pub success: bool,

  /// Confirmation message
  pub message: String,

  /// Identity assigned by the auth provider
  #[serde(rename = "userId")]
  pub user_id: Uuid,
}

/// Response containing a user's profile data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
  /// Identity assigned by the auth provider
  pub user_id: Uuid,

  /// User's display name
  pub name: String,

  /// User's email address
  pub email: String,

  /// Optional industry
  #[serde(skip_serializing_if = "Option::is_none")]
  pub industry: Option<String>,

  /// Optional country
  #[serde(skip_serializing_if = "Option::is_none")]
  pub country: Option<String>,

  /// Optional phone number
  #[serde(skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,

  /// Timestamp when the profile was created
  pub created_at: DateTime<Utc>,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Always false for this response; callers branch on this field
  pub success: bool,

  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Registration workflow stage that failed, when applicable
  #[serde(skip_serializing_if = "Option::is_none")]
  pub stage: Option<String>,
}

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
  /// Always "ok" when the service is able to respond
  pub status: String,

  /// Server time at the moment of the check
  pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use validator::Validate;

  fn request() -> RegisterRequest {
    RegisterRequest {
      name: "Test User".to_string(),
      email: "test@example.com".to_string(),
      password: "SecureP@ss123".to_string(),
      industry: None,
      country: None,
      phone: None,
    }
  }

  #[test]
  fn test_register_request_validation_valid() {
    assert!(request().validate().is_ok());
  }

  #[test]
  fn test_register_request_validation_invalid_email() {
    let invalid = RegisterRequest {
      email: "invalid-email".to_string(),
      ..request()
    };
    assert!(invalid.validate().is_err());
  }

  #[test]
  fn test_register_request_validation_short_password() {
    let invalid = RegisterRequest {
      password: "short".to_string(),
      ..request()
    };
    assert!(invalid.validate().is_err());
  }

  #[test]
  fn test_register_request_validation_empty_name() {
    let invalid = RegisterRequest {
      name: String::new(),
      ..request()
    };
    assert!(invalid.validate().is_err());
  }

  #[test]
  fn test_register_response_wire_format() {
    let response = RegisterResponse {
      success: true,
      message: "Registration successful".to_string(),
      user_id: Uuid::nil(),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["success"], true);
    assert!(json.get("userId").is_some());
    assert!(json.get("user_id").is_none());
  }

  #[test]
  fn test_error_response_omits_missing_stage() {
    let response = ErrorResponse {
      success: false,
      error: "user_not_found".to_string(),
      message: "User not found".to_string(),
      stage: None,
    };

    let json = serde_json::to_value(&response).unwrap();
    assert!(json.get("stage").is_none());
  }
}
