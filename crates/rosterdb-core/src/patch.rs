//! Field-level patch application.
//!
//! A patch names a subset of an entity's fields; merging replaces exactly
//! the named fields and leaves the rest untouched. No validation happens
//! here: whatever value the patch carries is accepted as-is.

///
/// Patchable
///
/// Implemented by every entity that supports partial-field updates.
/// `Patch` is a struct of per-field slots; `Default` is the empty patch.
///

pub trait Patchable {
    /// Payload accepted when patching this entity.
    type Patch: Default;

    /// Merge the patch into self, replacing only the named fields.
    fn merge(&mut self, patch: Self::Patch);
}

/// Replace a required field when the patch names it.
pub fn merge_field<T>(slot: &mut T, patch: Option<T>) {
    if let Some(value) = patch {
        *slot = value;
    }
}

/// Merge an optional field. The outer option is presence in the patch;
/// the inner option sets or clears the field.
pub fn merge_optional<T>(slot: &mut Option<T>, patch: Option<Option<T>>) {
    if let Some(value) = patch {
        *slot = value;
    }
}

///
/// TESTS
///
