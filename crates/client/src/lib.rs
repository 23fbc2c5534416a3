//! Typed REST client for the HarPalJob backend.
//!
//! [`gateway::ApiClient`] issues the JSON requests, [`resources`] binds each
//! backend resource's path templates onto it, and [`models`] holds the wire
//! records exchanged with the backend.

pub mod gateway;
pub mod models;
pub mod resources;
pub mod session;

pub use gateway::{ApiClient, ApiError, ApiResult, GatewayConfig};
pub use session::Session;
