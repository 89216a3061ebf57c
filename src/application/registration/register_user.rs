use std::sync::Arc;
use uuid::Uuid;

use crate::domain::registration::entities::ProfileDetails;
use crate::domain::registration::errors::RegistrationError;
use crate::domain::registration::services::RegistrationService;
use crate::domain::registration::value_objects::{Email, Password, ValueObjectError};

/// Command for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
  /// User's display name
  pub name: String,
  /// User's email address
  pub email: String,
  /// User's password (plain text, forwarded to the auth provider)
  pub password: String,
  /// Optional industry
  pub industry: Option<String>,
  /// Optional country
  pub country: Option<String>,
  /// Optional phone number
  pub phone: Option<String>,
}

/// Response after successful user registration
#[derive(Debug, Clone)]
pub struct RegisterUserResponse {
  /// Identity assigned by the auth provider
  pub user_id: Uuid,
  /// User's normalized email address
  pub email: String,
}

/// Use case for registering a new user
pub struct RegisterUserUseCase {
  registration_service: Arc<RegistrationService>,
}

impl RegisterUserUseCase {
  /// Creates a new instance of RegisterUserUseCase
  pub fn new(registration_service: Arc<RegistrationService>) -> Self {
    Self {
      registration_service,
    }
  }

  /// Executes the user registration use case
  ///
  /// Input validation happens here, before any external call: a command that
  /// fails validation never reaches the auth provider or the datastore.
  ///
  /// # Errors
  /// Returns `RegistrationError` tagged with the stage that failed
  /// (validation, auth or persistence)
  pub async fn execute(
    &self,
    command: RegisterUserCommand,
  ) -> Result<RegisterUserResponse, RegistrationError> {
    // Parse and validate email
    let email = Email::new(command.email)?;

    // Parse and validate password
    let password = Password::new(command.password)?;

    // Name is required
    let name = command.name.trim().to_string();
    if name.is_empty() {
      return Err(ValueObjectError::MissingName.into());
    }

    let details = ProfileDetails {
      industry: command.industry,
      country: command.country,
      phone: command.phone,
    };

    // Run the registration workflow
    let profile = self
      .registration_service
      .register(email, password, name, details)
      .await?;

    // Build and return the response
    Ok(RegisterUserResponse {
      user_id: profile.id,
      email: profile.email,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::registration::entities::UserProfile;
  use crate::domain::registration::errors::{FailureStage, ProviderError, StoreError};
  use crate::domain::registration::ports::{AuthProvider, ProfileStore};
  use crate::domain::registration::value_objects::AuthIdentity;
  use async_trait::async_trait;
  use std::sync::atomic::{AtomicUsize, Ordering};

  /// Fake collaborators that only count calls; the workflow branches are
  /// covered by the service tests
  struct CountingAuth {
    calls: AtomicUsize,
  }

  #[async_trait]
  impl AuthProvider for CountingAuth {
    async fn sign_up(
      &self,
      _email: &Email,
      _password: &Password,
      _name: &str,
      _details: &ProfileDetails,
    ) -> Result<AuthIdentity, ProviderError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      Ok(AuthIdentity::from_uuid(Uuid::new_v4()))
    }

    async fn delete_user(&self, _identity: AuthIdentity) -> Result<(), ProviderError> {
      Ok(())
    }
  }

  struct CountingStore {
    calls: AtomicUsize,
  }

  #[async_trait]
  impl ProfileStore for CountingStore {
    async fn insert(&self, _profile: &UserProfile) -> Result<(), StoreError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      Ok(())
    }

    async fn find_by_id(&self, _identity: AuthIdentity) -> Result<Option<UserProfile>, StoreError> {
      Ok(None)
    }
  }

  fn use_case() -> (RegisterUserUseCase, Arc<CountingAuth>, Arc<CountingStore>) {
    let auth = Arc::new(CountingAuth {
      calls: AtomicUsize::new(0),
    });
    let store = Arc::new(CountingStore {
      calls: AtomicUsize::new(0),
    });
    let service = Arc::new(RegistrationService::new(auth.clone(), store.clone()));
    (RegisterUserUseCase::new(service), auth, store)
  }

  fn command() -> RegisterUserCommand {
    RegisterUserCommand {
      name: "Ann".to_string(),
      email: "ann@x.com".to_string(),
      password: "secret12".to_string(),
      industry: None,
      country: None,
      phone: None,
    }
  }

  #[tokio::test]
  async fn test_invalid_email_fails_before_any_external_call() {
    let (use_case, auth, store) = use_case();

    let err = use_case
      .execute(RegisterUserCommand {
        email: "bad-email".to_string(),
        ..command()
      })
      .await
      .unwrap_err();

    assert_eq!(err.stage(), FailureStage::Validation);
    assert_eq!(auth.calls.load(Ordering::SeqCst), 0);
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn test_short_password_fails_validation() {
    let (use_case, auth, _store) = use_case();

    let err = use_case
      .execute(RegisterUserCommand {
        password: "short".to_string(),
        ..command()
      })
      .await
      .unwrap_err();

    assert_eq!(err.stage(), FailureStage::Validation);
    assert_eq!(auth.calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn test_blank_name_fails_validation() {
    let (use_case, auth, _store) = use_case();

    let err = use_case
      .execute(RegisterUserCommand {
        name: "   ".to_string(),
        ..command()
      })
      .await
      .unwrap_err();

    assert_eq!(err.stage(), FailureStage::Validation);
    assert_eq!(auth.calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn test_valid_command_registers_and_normalizes_email() {
    let (use_case, auth, store) = use_case();

    let response = use_case
      .execute(RegisterUserCommand {
        email: " Ann@X.com ".to_string(),
        ..command()
      })
      .await
      .unwrap();

    assert_eq!(response.email, "ann@x.com");
    assert_eq!(auth.calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.calls.load(Ordering::SeqCst), 1);
  }
}
