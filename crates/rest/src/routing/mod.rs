//! Route configuration for the participant REST API.
//!
//! This module contains the routing configuration that maps HTTP paths to
//! handlers.

pub mod routes;

pub use routes::create_routes;
