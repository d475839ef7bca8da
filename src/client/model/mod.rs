pub mod dashboard;
pub mod error;
