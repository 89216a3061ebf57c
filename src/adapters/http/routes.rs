use actix_web::web;
use std::sync::Arc;

use crate::application::registration::{GetUserProfileUseCase, RegisterUserUseCase};

use super::errors::ApiError;
use super::handlers::health::health_handler;
use super::handlers::registration::register_handler;
use super::handlers::users::get_user_handler;

/// Configure API routes
///
/// # Routes
///
/// - POST /register - Register a new user account
/// - GET /users/{id} - Fetch a user profile by identifier
/// - GET /health - Liveness probe with a timestamp
///
/// # Arguments
///
/// * `register_use_case` - Use case for user registration
/// * `get_user_profile_use_case` - Use case for profile lookup
pub fn configure_api_routes(
  cfg: &mut web::ServiceConfig,
  register_use_case: Arc<RegisterUserUseCase>,
  get_user_profile_use_case: Arc<GetUserProfileUseCase>,
) {
  // Store use cases in app data so handlers can access them
  cfg
    .app_data(web::Data::new(register_use_case))
    .app_data(web::Data::new(get_user_profile_use_case))
    // Malformed or incomplete JSON bodies get the same validation envelope
    // as field-level failures
    .app_data(
      web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    // Configure routes
    .route("/register", web::post().to(register_handler))
    .route("/users/{id}", web::get().to(get_user_handler))
    .route("/health", web::get().to(health_handler));
}
