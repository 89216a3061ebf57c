pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{
  ErrorResponse, HealthResponse, RegisterRequest, RegisterResponse, UserProfileResponse,
};
pub use errors::ApiError;
pub use middleware::RequestIdMiddleware;
pub use routes::configure_api_routes;
