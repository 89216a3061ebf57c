use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{dtos::UserProfileResponse, errors::ApiError};
use crate::application::registration::GetUserProfileUseCase;

/// Handler for fetching a user profile
///
/// GET /users/{id}
/// Response: UserProfileResponse (JSON) with status 200, or 404 when no
/// profile exists for the identifier
pub async fn get_user_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<GetUserProfileUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user_id = path.into_inner();

  // Execute use case
  let profile = use_case
    .execute(user_id)
    .await?
    .ok_or(ApiError::UserNotFound)?;

  // Map to API response
  Ok(HttpResponse::Ok().json(UserProfileResponse {
    user_id: profile.user_id,
    name: profile.name,
    email: profile.email,
    industry: profile.industry,
    country: profile.country,
    phone: profile.phone,
    created_at: profile.created_at,
  }))
}
