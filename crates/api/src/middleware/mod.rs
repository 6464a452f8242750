/// `X-API-Key` guard for the reservation endpoints
pub mod auth;
/// Mapping of domain errors to HTTP responses
pub mod error_handling;
