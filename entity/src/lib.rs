pub mod prelude;

pub mod mentee;
pub mod response;
