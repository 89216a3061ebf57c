pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{ProfileDetails, UserProfile};
pub use errors::{FailureStage, ProviderError, RegistrationError, StoreError};
pub use services::RegistrationService;
pub use value_objects::{AuthIdentity, Email, Password, ValueObjectError};
