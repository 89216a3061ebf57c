use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::registration::errors::RegistrationError;
use crate::domain::registration::services::RegistrationService;
use crate::domain::registration::value_objects::AuthIdentity;

/// Response containing a user's profile data
#[derive(Debug, Clone)]
pub struct GetUserProfileResponse {
  /// Identity assigned by the auth provider
  pub user_id: Uuid,
  /// User's display name
  pub name: String,
  /// User's email address
  pub email: String,
  /// Optional industry
  pub industry: Option<String>,
  /// Optional country
  pub country: Option<String>,
  /// Optional phone number
  pub phone: Option<String>,
  /// Timestamp when the profile was created
  pub created_at: DateTime<Utc>,
}

/// Use case for looking up a user profile by its identifier
pub struct GetUserProfileUseCase {
  registration_service: Arc<RegistrationService>,
}

impl GetUserProfileUseCase {
  /// Creates a new instance of GetUserProfileUseCase
  pub fn new(registration_service: Arc<RegistrationService>) -> Self {
    Self {
      registration_service,
    }
  }

  /// Executes the profile lookup use case
  ///
  /// The identifier's UUID shape is checked first; a malformed identifier
  /// fails without querying the datastore.
  ///
  /// # Errors
  /// Returns `RegistrationError::Validation` for a malformed identifier and
  /// `RegistrationError::Persistence` for datastore failures
  pub async fn execute(
    &self,
    user_id: String,
  ) -> Result<Option<GetUserProfileResponse>, RegistrationError> {
    // Validate identifier format before touching the datastore
    let identity = AuthIdentity::parse(&user_id)?;

    let profile = self.registration_service.lookup(identity).await?;

    Ok(profile.map(|p| GetUserProfileResponse {
      user_id: p.id,
      name: p.name,
      email: p.email,
      industry: p.industry,
      country: p.country,
      phone: p.phone,
      created_at: p.created_at,
    }))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::registration::entities::{ProfileDetails, UserProfile};
  use crate::domain::registration::errors::{FailureStage, ProviderError, StoreError};
  use crate::domain::registration::ports::{AuthProvider, ProfileStore};
  use crate::domain::registration::value_objects::{Email, Password};
  use async_trait::async_trait;
  use std::sync::atomic::{AtomicUsize, Ordering};

  struct UnusedAuth;

  #[async_trait]
  impl AuthProvider for UnusedAuth {
    async fn sign_up(
      &self,
      _email: &Email,
      _password: &Password,
      _name: &str,
      _details: &ProfileDetails,
    ) -> Result<AuthIdentity, ProviderError> {
      unreachable!("lookup must not call the auth provider")
    }

    async fn delete_user(&self, _identity: AuthIdentity) -> Result<(), ProviderError> {
      unreachable!("lookup must not call the auth provider")
    }
  }

  struct RecordingStore {
    profile: Option<UserProfile>,
    find_calls: AtomicUsize,
  }

  #[async_trait]
  impl ProfileStore for RecordingStore {
    async fn insert(&self, _profile: &UserProfile) -> Result<(), StoreError> {
      Ok(())
    }

    async fn find_by_id(&self, _identity: AuthIdentity) -> Result<Option<UserProfile>, StoreError> {
      self.find_calls.fetch_add(1, Ordering::SeqCst);
      Ok(self.profile.clone())
    }
  }

  fn use_case(profile: Option<UserProfile>) -> (GetUserProfileUseCase, Arc<RecordingStore>) {
    let store = Arc::new(RecordingStore {
      profile,
      find_calls: AtomicUsize::new(0),
    });
    let service = Arc::new(RegistrationService::new(Arc::new(UnusedAuth), store.clone()));
    (GetUserProfileUseCase::new(service), store)
  }

  #[tokio::test]
  async fn test_malformed_id_fails_without_querying_store() {
    let (use_case, store) = use_case(None);

    let err = use_case.execute("not-a-uuid".to_string()).await.unwrap_err();

    assert_eq!(err.stage(), FailureStage::Validation);
    assert_eq!(store.find_calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn test_lookup_returns_profile_fields() {
    let identity = AuthIdentity::from_uuid(Uuid::new_v4());
    let profile = UserProfile::new(
      identity,
      "Ann".to_string(),
      "ann@x.com".to_string(),
      ProfileDetails {
        industry: Some("fintech".to_string()),
        country: None,
        phone: None,
      },
    );
    let (use_case, store) = use_case(Some(profile));

    let response = use_case
      .execute(identity.to_string())
      .await
      .unwrap()
      .unwrap();

    assert_eq!(response.user_id, identity.into_inner());
    assert_eq!(response.industry.as_deref(), Some("fintech"));
    assert_eq!(store.find_calls.load(Ordering::SeqCst), 1);
  }

  #[tokio::test]
  async fn test_lookup_miss_returns_none() {
    let (use_case, _store) = use_case(None);

    let result = use_case.execute(Uuid::new_v4().to_string()).await.unwrap();

    assert!(result.is_none());
  }
}
