//! Shared building blocks for the movie services.
//!
//! This crate contains **pure** primitives (no IO, no HTTP, no storage):
//! the error model, string document identifiers and field validation.

pub mod entity;
pub mod error;
pub mod id;
pub mod validation;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{DocumentId, MovieInfoId, ReviewId};
pub use validation::{FieldViolation, Violations};
