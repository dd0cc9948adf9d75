//! Core runtime for RosterDB: record identifiers, calendar dates, the
//! id-keyed record map, patch merge helpers, and the shared error type.
//!
//! Nothing in this crate knows about the roster domain; the entity model
//! and the store itself live in the `rosterdb` facade crate.

pub mod error;
pub mod patch;
pub mod traits;
pub mod types;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only core vocabulary; the facade crate re-exports the
/// domain surface on top of it.
///

pub mod prelude {
    pub use crate::{
        error::Error,
        patch::{Patchable, merge_field, merge_optional},
        traits::EntityKind,
        types::{Date, RecordId, RecordMap},
    };
}
