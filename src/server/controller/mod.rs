//! HTTP request handlers.
//!
//! Controllers extract request data, call into the service layer and convert domain
//! models into DTOs. Each handler carries a `utoipa::path` annotation that feeds the
//! generated OpenAPI document served under `/api/docs`.

pub mod health;
pub mod house;
pub mod mentee;
