pub use super::mentee::Entity as Mentee;
pub use super::response::Entity as Response;
