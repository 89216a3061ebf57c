use async_trait::async_trait;

use super::entities::{ProfileDetails, UserProfile};
use super::errors::{ProviderError, StoreError};
use super::value_objects::{AuthIdentity, Email, Password};

/// Port for the external auth provider.
///
/// Duplicate-email rejection, password policy and metadata storage semantics
/// are provider-defined; this service only maps them onto `ProviderError`.
#[async_trait]
pub trait AuthProvider: Send + Sync {
  /// Creates a new auth user and returns the identity the provider assigned
  async fn sign_up(
    &self,
    email: &Email,
    password: &Password,
    name: &str,
    details: &ProfileDetails,
  ) -> Result<AuthIdentity, ProviderError>;

  /// Deletes an auth user. Used as the compensating action when profile
  /// persistence fails after signup.
  async fn delete_user(&self, identity: AuthIdentity) -> Result<(), ProviderError>;
}

/// Port for the hosted profile table
#[async_trait]
pub trait ProfileStore: Send + Sync {
  /// Inserts a new profile row
  async fn insert(&self, profile: &UserProfile) -> Result<(), StoreError>;

  /// Fetches a profile by its auth identity
  async fn find_by_id(&self, identity: AuthIdentity) -> Result<Option<UserProfile>, StoreError>;
}
