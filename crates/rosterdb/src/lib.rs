//! ## Crate layout
//! - `model`: the roster entity records, their patch payloads, and the
//!   wire enums shared with the dashboard views.
//! - `db`: the `RosterDb` store (lookups, derived queries, patches,
//!   quote creation) and the list-view filter helpers.
//! - `seed`: the fixed dataset every session starts from.
//!
//! The `prelude` module mirrors the surface a view layer consumes.

pub mod db;
pub mod model;
pub mod seed;

pub use db::RosterDb;
pub use rosterdb_core as core;
pub use rosterdb_core::Error;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        db::{RosterDb, filter},
        model::{
            Agent, AgentMetrics, AgentPatch, AgentPhoto, AgentPhotoPatch, Brokerage, ClientQuote,
            ClientQuotePatch, NewClientQuote, Office, Organization, PhotoKind, SaleType,
            SoldProperty, SoldPropertyPatch,
        },
    };
    pub use rosterdb_core::{
        Error,
        patch::Patchable,
        traits::EntityKind,
        types::{Date, RecordId, RecordMap},
    };
}
