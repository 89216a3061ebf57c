//! Adapters for the hosted auth + database service

pub mod auth_provider;
pub mod client;
pub mod profile_store;

pub use auth_provider::SupabaseAuthProvider;
pub use client::SupabaseClient;
pub use profile_store::SupabaseProfileStore;
