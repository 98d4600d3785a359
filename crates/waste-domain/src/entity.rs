//! Core Entity Trait
//!
//! Basic contract for all domain entities plus the shared error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's identifier
    fn id(&self) -> Self::Id;
}

/// Remove every entity with the given id, returning how many were removed
pub fn remove_by_id<T: Entity>(entities: &mut Vec<T>, id: T::Id) -> usize {
    let before = entities.len();
    entities.retain(|entity| entity.id() != id);
    before - entities.len()
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
