use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{RegisterRequest, RegisterResponse},
  errors::ApiError,
};
use crate::application::registration::{RegisterUserCommand, RegisterUserUseCase};

/// Handler for user registration
///
/// POST /register
/// Body: RegisterRequest (JSON)
/// Response: RegisterResponse (JSON) with status 201
pub async fn register_handler(
  request: web::Json<RegisterRequest>,
  use_case: web::Data<Arc<RegisterUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  // Validate request
  request.validate()?;

  // Create command from request
  let command = RegisterUserCommand {
    name: request.name.clone(),
    email: request.email.clone(),
    password: request.password.clone(),
    industry: request.industry.clone(),
    country: request.country.clone(),
    phone: request.phone.clone(),
  };

  // Execute use case
  let response = use_case.execute(command).await?;

  // Map to API response
  Ok(HttpResponse::Created().json(RegisterResponse {
    success: true,
    message: "Registration successful".to_string(),
    user_id: response.user_id,
  }))
}
