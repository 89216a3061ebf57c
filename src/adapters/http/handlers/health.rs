use actix_web::HttpResponse;
use chrono::Utc;

use crate::adapters::http::dtos::HealthResponse;

/// Liveness probe
///
/// GET /health
/// Response: HealthResponse (JSON) with status 200
pub async fn health_handler() -> HttpResponse {
  HttpResponse::Ok().json(HealthResponse {
    status: "ok".to_string(),
    timestamp: Utc::now(),
  })
}
