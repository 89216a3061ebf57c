use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::AuthIdentity;

/// Optional profile attributes collected at registration and stored both as
/// provider metadata and on the profile row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
  pub industry: Option<String>,
  pub country: Option<String>,
  pub phone: Option<String>,
}

/// User profile row keyed by the auth provider's identity.
///
/// A profile is created only after the auth identity exists and must never
/// outlive it: when the insert fails the identity is rolled back. Immutable
/// after creation (no update or delete routes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
  /// The auth provider's identifier for this user (row key, not owned here)
  pub id: Uuid,
  /// User's display name
  pub name: String,
  /// Normalized email address
  pub email: String,
  /// Optional industry
  pub industry: Option<String>,
  /// Optional country
  pub country: Option<String>,
  /// Optional phone number
  pub phone: Option<String>,
  /// Timestamp when the profile row was created
  pub created_at: DateTime<Utc>,
}

impl UserProfile {
  /// Creates a new profile for a freshly signed-up identity
  pub fn new(identity: AuthIdentity, name: String, email: String, details: ProfileDetails) -> Self {
    Self {
      id: identity.into_inner(),
      name,
      email,
      industry: details.industry,
      country: details.country,
      phone: details.phone,
      created_at: Utc::now(),
    }
  }

  /// The auth identity this profile references
  pub fn identity(&self) -> AuthIdentity {
    AuthIdentity::from_uuid(self.id)
  }
}
