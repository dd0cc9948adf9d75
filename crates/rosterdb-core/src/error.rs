use crate::{traits::EntityKind, types::RecordId};
use thiserror::Error as ThisError;

///
/// Error
///
/// Shared runtime error. NotFound is the only failure condition the store
/// defines: lookups signal absence via `Option`, and mutations against a
/// missing id surface here instead of synthesizing a malformed record.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: RecordId },
}

impl Error {
    /// Construct a NotFound error for the given entity type and id.
    #[must_use]
    pub fn not_found<E: EntityKind>(id: &RecordId) -> Self {
        Self::NotFound {
            entity: E::ENTITY_NAME,
            id: id.clone(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

///
/// TESTS
///
