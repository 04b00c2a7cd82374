//! Repository layer for database operations.
//!
//! Repositories keep entities as pure data models while providing reusable
//! database access methods, following the Data Mapper pattern recommended by
//! SeaORM.

pub mod submission;

pub use submission::{DeliveryUpdate, SubmissionRepository};
