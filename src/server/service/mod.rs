//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Orchestration**: Coordinating repository calls, such as joining mentees with their
//!   response counts
//! - **Business Logic**: Sorting and not-found handling that the queries don't cover
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod mentee;

#[cfg(test)]
mod test;
