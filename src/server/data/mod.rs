//! Database repository layer.
//!
//! Repositories handle database queries for each domain and convert SeaORM entity
//! models into domain models at the boundary, keeping entities out of the service layer.

pub mod mentee;
pub mod response;

#[cfg(test)]
mod test;
