pub mod api;
pub mod mentee;
