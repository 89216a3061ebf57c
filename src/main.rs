use actix_web::{App, HttpServer, middleware::Logger};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use onboard::{
  adapters::http::{RequestIdMiddleware, configure_api_routes},
  application::registration::{GetUserProfileUseCase, RegisterUserUseCase},
  domain::registration::services::RegistrationService,
  infrastructure::{
    config::Config,
    supabase::{SupabaseAuthProvider, SupabaseClient, SupabaseProfileStore},
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "onboard=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting onboard service");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!(
    "Configuration loaded, provider at {}",
    config.provider.base_url
  );

  // Shared HTTP client for the hosted auth + database service
  let supabase =
    SupabaseClient::new(&config.provider).expect("Failed to build provider HTTP client");

  // Initialize port adapters
  let auth_provider = Arc::new(SupabaseAuthProvider::new(supabase.clone()));
  let profile_store = Arc::new(SupabaseProfileStore::new(
    supabase,
    config.provider.profiles_table.clone(),
  ));

  // Initialize domain service
  let registration_service = Arc::new(RegistrationService::new(auth_provider, profile_store));

  // Initialize use cases
  let register_use_case = Arc::new(RegisterUserUseCase::new(registration_service.clone()));
  let get_user_profile_use_case = Arc::new(GetUserProfileUseCase::new(registration_service));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add request ID middleware
      .wrap(RequestIdMiddleware::new())
      // Add logging middleware
      .wrap(Logger::default())
      .configure(|cfg| {
        configure_api_routes(
          cfg,
          register_use_case.clone(),
          get_user_profile_use_case.clone(),
        )
      })
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}
