//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique ID and be thread-safe.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StoreError {
    NotFound(String),
    InvalidResponse(String),
    Network(String),
    Persistence(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(msg) => write!(f, "Not found: {}", msg),
            StoreError::InvalidResponse(msg) => write!(f, "Invalid API response format: {}", msg),
            StoreError::Network(msg) => write!(f, "Network error: {}", msg),
            StoreError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Insert or replace an entity in a list by its id.
///
/// Replaces the first element with a matching id, otherwise appends.
pub fn upsert_by_id<T: Entity>(items: &mut Vec<T>, entity: T) {
    match items.iter().position(|e| e.id() == entity.id()) {
        Some(idx) => items[idx] = entity,
        None => items.push(entity),
    }
}
