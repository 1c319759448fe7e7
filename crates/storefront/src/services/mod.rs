//! Stub collaborator services.
//!
//! Payment and authentication are external concerns; the implementations
//! here stand in until real integrations are connected.

pub mod auth;
pub mod payment;

pub use auth::LocalAuthService;
pub use payment::UnconnectedGateway;
