//! Request and response DTOs for the API layer.

pub mod shorten;

pub use shorten::{ShortenRequest, ShortenResponse};
