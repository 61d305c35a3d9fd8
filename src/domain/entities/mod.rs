//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`ShortUrlEntry`] - A shortened URL mapping

pub mod entry;

pub use entry::ShortUrlEntry;
