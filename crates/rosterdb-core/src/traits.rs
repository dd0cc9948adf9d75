use crate::types::RecordId;

///
/// EntityKind
///
/// Minimal runtime contract for a stored entity: a stable external name
/// (used in error messages and minted ids) and access to the record's
/// opaque identifier.
///

pub trait EntityKind: Clone {
    /// Stable external name, unique per entity type.
    const ENTITY_NAME: &'static str;

    /// The record's opaque identifier.
    fn id(&self) -> &RecordId;
}
