//! Domain models and operation parameters.

pub mod mentee;
