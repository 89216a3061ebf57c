use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::registration::entities::UserProfile;
use crate::domain::registration::errors::StoreError;
use crate::domain::registration::ports::ProfileStore;
use crate::domain::registration::value_objects::AuthIdentity;

use super::client::SupabaseClient;

/// Profile store adapter speaking the hosted PostgREST-style table API:
/// `POST /rest/v1/{table}` and `GET /rest/v1/{table}?id=eq.{uuid}`.
pub struct SupabaseProfileStore {
  client: SupabaseClient,
  table: String,
}

impl SupabaseProfileStore {
  /// Creates a new instance of SupabaseProfileStore
  pub fn new(client: SupabaseClient, table: String) -> Self {
    Self { client, table }
  }
}

/// JSON row structure for the profiles table
#[derive(Debug, Serialize, Deserialize)]
struct ProfileRow {
  id: Uuid,
  name: String,
  email: String,
  industry: Option<String>,
  country: Option<String>,
  phone: Option<String>,
  created_at: DateTime<Utc>,
}

impl From<ProfileRow> for UserProfile {
  fn from(row: ProfileRow) -> Self {
    UserProfile {
      id: row.id,
      name: row.name,
      email: row.email,
      industry: row.industry,
      country: row.country,
      phone: row.phone,
      created_at: row.created_at,
    }
  }
}

impl From<&UserProfile> for ProfileRow {
  fn from(profile: &UserProfile) -> Self {
    ProfileRow {
      id: profile.id,
      name: profile.name.clone(),
      email: profile.email.clone(),
      industry: profile.industry.clone(),
      country: profile.country.clone(),
      phone: profile.phone.clone(),
      created_at: profile.created_at,
    }
  }
}

#[async_trait]
impl ProfileStore for SupabaseProfileStore {
  async fn insert(&self, profile: &UserProfile) -> Result<(), StoreError> {
    let row = ProfileRow::from(profile);

    let response = self
      .client
      .request(Method::POST, self.client.rest_url(&self.table))
      .header("Prefer", "return=minimal")
      .json(&row)
      .send()
      .await
      .map_err(|e| StoreError::Unavailable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(StoreError::InsertFailed {
        table: self.table.clone(),
        message: format!("{}: {}", status, body),
      });
    }

    Ok(())
  }

  async fn find_by_id(&self, identity: AuthIdentity) -> Result<Option<UserProfile>, StoreError> {
    let response = self
      .client
      .request(Method::GET, self.client.rest_url(&self.table))
      .query(&[
        ("id", format!("eq.{}", identity)),
        ("select", "*".to_string()),
      ])
      .send()
      .await
      .map_err(|e| StoreError::Unavailable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(StoreError::QueryFailed {
        table: self.table.clone(),
        message: format!("{}: {}", status, body),
      });
    }

    let rows: Vec<ProfileRow> = response.json().await.map_err(|e| StoreError::QueryFailed {
      table: self.table.clone(),
      message: format!("invalid response body: {}", e),
    })?;

    Ok(rows.into_iter().next().map(UserProfile::from))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::registration::entities::ProfileDetails;

  #[test]
  fn test_row_maps_back_to_entity() {
    let identity = AuthIdentity::from_uuid(Uuid::new_v4());
    let profile = UserProfile::new(
      identity,
      "Ann".to_string(),
      "ann@x.com".to_string(),
      ProfileDetails {
        industry: Some("retail".to_string()),
        country: Some("NL".to_string()),
        phone: None,
      },
    );

    let row = ProfileRow::from(&profile);
    let restored = UserProfile::from(row);

    assert_eq!(restored.id, profile.id);
    assert_eq!(restored.email, profile.email);
    assert_eq!(restored.industry, profile.industry);
    assert_eq!(restored.created_at, profile.created_at);
  }
}
