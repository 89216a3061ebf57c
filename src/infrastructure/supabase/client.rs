use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

use crate::infrastructure::config::ProviderConfig;

/// Shared HTTP client for the hosted auth + database service.
///
/// Stateless and cheap to clone; the inner reqwest client is safe for
/// concurrent reuse across requests. The request timeout is applied here
/// once and inherited by every call to the hosted service.
#[derive(Clone)]
pub struct SupabaseClient {
  http: Client,
  base_url: String,
  service_key: String,
}

impl SupabaseClient {
  /// Creates a client from the provider configuration
  pub fn new(config: &ProviderConfig) -> Result<Self, reqwest::Error> {
    let http = Client::builder()
      .timeout(Duration::from_secs(config.timeout_seconds))
      .build()?;

    Ok(Self {
      http,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      service_key: config.service_key.clone(),
    })
  }

  /// URL under the auth API
  pub(crate) fn auth_url(&self, path: &str) -> String {
    format!("{}/auth/v1/{}", self.base_url, path)
  }

  /// URL under the table API
  pub(crate) fn rest_url(&self, path: &str) -> String {
    format!("{}/rest/v1/{}", self.base_url, path)
  }

  /// Starts a request with the service-role credentials attached
  pub(crate) fn request(&self, method: Method, url: String) -> RequestBuilder {
    self
      .http
      .request(method, url)
      .header("apikey", &self.service_key)
      .bearer_auth(&self.service_key)
  }
}
