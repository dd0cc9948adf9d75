use rosterdb_core::{
    patch::{Patchable, merge_field, merge_optional},
    traits::EntityKind,
    types::{Date, RecordId},
};
use serde::{Deserialize, Serialize};

///
/// Agent
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: RecordId,
    pub office_id: RecordId,
    pub brokerage_id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub license_number: Option<String>,
    pub license_state: Option<String>,
    pub joined_at: Option<Date>,
    pub is_active: bool,
}

impl Agent {
    /// Display name composed from the name fields.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl EntityKind for Agent {
    const ENTITY_NAME: &'static str = "agent";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

///
/// AgentPatch
///
/// Field subset for `update_agent`. Absent slots leave the record's field
/// untouched; the id itself is never patchable.
///

#[derive(Clone, Debug, Default)]
pub struct AgentPatch {
    pub office_id: Option<RecordId>,
    pub brokerage_id: Option<RecordId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub title: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub license_number: Option<Option<String>>,
    pub license_state: Option<Option<String>>,
    pub joined_at: Option<Option<Date>>,
    pub is_active: Option<bool>,
}

impl Patchable for Agent {
    type Patch = AgentPatch;

    fn merge(&mut self, patch: AgentPatch) {
        merge_field(&mut self.office_id, patch.office_id);
        merge_field(&mut self.brokerage_id, patch.brokerage_id);
        merge_field(&mut self.first_name, patch.first_name);
        merge_field(&mut self.last_name, patch.last_name);
        merge_field(&mut self.email, patch.email);
        merge_optional(&mut self.phone, patch.phone);
        merge_optional(&mut self.title, patch.title);
        merge_optional(&mut self.bio, patch.bio);
        merge_optional(&mut self.license_number, patch.license_number);
        merge_optional(&mut self.license_state, patch.license_state);
        merge_optional(&mut self.joined_at, patch.joined_at);
        merge_field(&mut self.is_active, patch.is_active);
    }
}

///
/// AgentMetrics
///
/// Yearly sales rollup. Carries no id of its own; the natural key is
/// (agent_id, year), and duplicate pairs are not prevented.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentMetrics {
    pub agent_id: RecordId,
    pub year: i32,
    /// Transaction count.
    pub total_sales: u32,
    /// Total dollar volume.
    pub volume: i64,
    pub rank_in_office: Option<u32>,
    pub rank_in_org: Option<u32>,
    pub average_price: Option<i64>,
}

///
/// TESTS
///
