//! Registration proxy service for a hosted auth + database backend.
//!
//! The service validates registration requests, creates the user at the
//! external auth provider, inserts a profile row into the hosted table, and
//! rolls the auth identity back when the insert fails.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
