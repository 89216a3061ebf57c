use std::sync::Arc;

use super::entities::{ProfileDetails, UserProfile};
use super::errors::RegistrationError;
use super::ports::{AuthProvider, ProfileStore};
use super::value_objects::{AuthIdentity, Email, Password};

/// Registration service coordinating the auth provider and the profile store.
///
/// Both collaborators are external systems with no shared transaction, so a
/// persistence failure after signup triggers an explicit compensating delete
/// of the just-created identity.
pub struct RegistrationService {
  auth: Arc<dyn AuthProvider>,
  store: Arc<dyn ProfileStore>,
}

impl RegistrationService {
  /// Creates a new instance of RegistrationService
  pub fn new(auth: Arc<dyn AuthProvider>, store: Arc<dyn ProfileStore>) -> Self {
    Self { auth, store }
  }

  /// Registers a new user: signup at the auth provider, then insert the
  /// profile row referencing the returned identity.
  ///
  /// The two calls are strictly sequential. If the insert fails, a
  /// best-effort delete of the identity is issued exactly once; its own
  /// failure is logged and never changes the reported outcome, which leaves
  /// a known consistency gap (an orphaned identity with no profile).
  ///
  /// # Errors
  /// Returns `RegistrationError::AuthProvider` when signup is rejected
  /// (duplicate email, password policy, outage) and
  /// `RegistrationError::Persistence` when the profile insert fails.
  pub async fn register(
    &self,
    email: Email,
    password: Password,
    name: String,
    details: ProfileDetails,
  ) -> Result<UserProfile, RegistrationError> {
    let identity = self.auth.sign_up(&email, &password, &name, &details).await?;

    tracing::debug!(user_id = %identity, "auth signup succeeded, inserting profile");

    let profile = UserProfile::new(identity, name, email.into_inner(), details);

    if let Err(insert_err) = self.store.insert(&profile).await {
      // A profile must never outlive its identity, and the reverse gap is
      // closed here: roll back the identity created above.
      if let Err(cleanup_err) = self.auth.delete_user(identity).await {
        tracing::warn!(
          user_id = %identity,
          error = %cleanup_err,
          "compensating identity delete failed, auth user orphaned"
        );
      } else {
        tracing::info!(user_id = %identity, "rolled back auth identity after failed insert");
      }

      return Err(RegistrationError::Persistence(insert_err));
    }

    Ok(profile)
  }

  /// Fetches the profile for an identity, or None when no row exists
  pub async fn lookup(
    &self,
    identity: AuthIdentity,
  ) -> Result<Option<UserProfile>, RegistrationError> {
    Ok(self.store.find_by_id(identity).await?)
  }
}
