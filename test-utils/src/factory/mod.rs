//! Factory methods for creating test data.
//!
//! Factories create entities with sensible defaults so tests only spell out the fields
//! they care about. Each entity has a `Factory` builder for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let mentee = factory::create_mentee(&db).await?;
//! let response = factory::create_response(&db, mentee.id, 1).await?;
//!
//! let mentee = factory::mentee::MenteeFactory::new(&db)
//!     .name("Ann")
//!     .house_role("Gryffindor")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `mentee` - Create mentee entities
//! - `response` - Create weekly response entities
//! - `helpers` - ID generation and mentees seeded with responses

pub mod helpers;
pub mod mentee;
pub mod response;

pub use helpers::create_mentee_with_responses;
pub use mentee::create_mentee;
pub use response::create_response;
