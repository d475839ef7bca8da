#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod mentee;

#[cfg(feature = "web")]
pub use mentee::{get_houses, get_mentee_responses, get_mentees};
