use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::registration::entities::ProfileDetails;
use crate::domain::registration::errors::ProviderError;
use crate::domain::registration::ports::AuthProvider;
use crate::domain::registration::value_objects::{AuthIdentity, Email, Password};

use super::client::SupabaseClient;

/// Auth provider adapter speaking the hosted GoTrue-style API:
/// `POST /auth/v1/signup` and `DELETE /auth/v1/admin/users/{id}`.
pub struct SupabaseAuthProvider {
  client: SupabaseClient,
}

impl SupabaseAuthProvider {
  /// Creates a new instance of SupabaseAuthProvider
  pub fn new(client: SupabaseClient) -> Self {
    Self { client }
  }
}

#[derive(Debug, Serialize)]
struct SignUpBody<'a> {
  email: &'a str,
  password: &'a str,
  data: SignUpMetadata<'a>,
}

/// Profile attributes stored as user metadata on the auth record
#[derive(Debug, Serialize)]
struct SignUpMetadata<'a> {
  name: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  industry: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  country: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  phone: Option<&'a str>,
}

/// Signup response. Depending on the provider's email-confirmation setting
/// the user object is either the top-level body or nested under `user`.
#[derive(Debug, Deserialize)]
struct SignUpResponse {
  id: Option<Uuid>,
  user: Option<SignUpUser>,
}

#[derive(Debug, Deserialize)]
struct SignUpUser {
  id: Uuid,
}

/// Error body shapes used across the auth API versions
#[derive(Debug, Default, Deserialize)]
struct AuthApiError {
  error_code: Option<String>,
  msg: Option<String>,
  message: Option<String>,
  error_description: Option<String>,
}

/// Maps a non-success auth API response onto the provider error taxonomy
fn map_rejection(status: StatusCode, body: AuthApiError) -> ProviderError {
  let message = body
    .msg
    .or(body.message)
    .or(body.error_description)
    .unwrap_or_else(|| format!("auth api returned {}", status));

  if status.is_server_error() {
    return ProviderError::Unavailable(message);
  }

  if body.error_code.as_deref() == Some("user_already_exists")
    || message.to_lowercase().contains("already registered")
  {
    return ProviderError::EmailTaken;
  }

  ProviderError::Rejected(message)
}

#[async_trait]
impl AuthProvider for SupabaseAuthProvider {
  async fn sign_up(
    &self,
    email: &Email,
    password: &Password,
    name: &str,
    details: &ProfileDetails,
  ) -> Result<AuthIdentity, ProviderError> {
    let body = SignUpBody {
      email: email.as_str(),
      password: password.as_str(),
      data: SignUpMetadata {
        name,
        industry: details.industry.as_deref(),
        country: details.country.as_deref(),
        phone: details.phone.as_deref(),
      },
    };

    let response = self
      .client
      .request(Method::POST, self.client.auth_url("signup"))
      .json(&body)
      .send()
      .await
      .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
      let parsed: SignUpResponse = response
        .json()
        .await
        .map_err(|e| ProviderError::Unavailable(format!("invalid signup response: {}", e)))?;

      let id = parsed
        .id
        .or(parsed.user.map(|u| u.id))
        .ok_or_else(|| ProviderError::Rejected("signup response missing user id".to_string()))?;

      return Ok(AuthIdentity::from_uuid(id));
    }

    let error_body = response.json::<AuthApiError>().await.unwrap_or_default();
    Err(map_rejection(status, error_body))
  }

  async fn delete_user(&self, identity: AuthIdentity) -> Result<(), ProviderError> {
    let url = self.client.auth_url(&format!("admin/users/{}", identity));

    let response = self
      .client
      .request(Method::DELETE, url)
      .send()
      .await
      .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

    let status = response.status();
    // 404 means the user is already gone, which is the desired end state
    if status.is_success() || status == StatusCode::NOT_FOUND {
      return Ok(());
    }

    let error_body = response.json::<AuthApiError>().await.unwrap_or_default();
    Err(map_rejection(status, error_body))
  }
}
