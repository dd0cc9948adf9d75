//! Roster entity records.
//!
//! Each entity carries an opaque `RecordId` and expresses relationships as
//! foreign-key id fields, never as nested objects. Optional attributes are
//! `Option<T>`; absent is absent, not an empty string. Records serialize
//! in the camelCase wire shape the dashboard views exchange.

mod agent;
mod office;
mod organization;
mod photo;
mod property;
mod quote;

pub use agent::{Agent, AgentMetrics, AgentPatch};
pub use office::Office;
pub use organization::{Brokerage, Organization};
pub use photo::{AgentPhoto, AgentPhotoPatch, PhotoKind};
pub use property::{SoldProperty, SoldPropertyPatch};
pub use quote::{ClientQuote, ClientQuotePatch, NewClientQuote, SaleType};
