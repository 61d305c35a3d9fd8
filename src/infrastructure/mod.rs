//! Infrastructure layer with concrete implementations of the domain traits.
//!
//! - [`persistence`] - registry store implementations
//! - [`dns`] - hostname-resolving URL validator

pub mod dns;
pub mod persistence;
