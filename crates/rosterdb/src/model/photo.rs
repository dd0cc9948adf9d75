use rosterdb_core::{
    patch::{Patchable, merge_field, merge_optional},
    traits::EntityKind,
    types::{Date, RecordId},
};
use serde::{Deserialize, Serialize};

///
/// PhotoKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoKind {
    Headshot,
    Banner,
    Gallery,
}

///
/// AgentPhoto
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPhoto {
    pub id: RecordId,
    pub agent_id: RecordId,
    pub url: String,
    pub caption: Option<String>,
    /// Sparse ordering key; ascending, ties keep collection order.
    pub sort_order: i32,
    #[serde(rename = "type")]
    pub kind: PhotoKind,
    pub uploaded_at: Option<Date>,
}

impl EntityKind for AgentPhoto {
    const ENTITY_NAME: &'static str = "agent_photo";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

///
/// AgentPhotoPatch
///

#[derive(Clone, Debug, Default)]
pub struct AgentPhotoPatch {
    pub agent_id: Option<RecordId>,
    pub url: Option<String>,
    pub caption: Option<Option<String>>,
    pub sort_order: Option<i32>,
    pub kind: Option<PhotoKind>,
    pub uploaded_at: Option<Option<Date>>,
}

impl Patchable for AgentPhoto {
    type Patch = AgentPhotoPatch;

    fn merge(&mut self, patch: AgentPhotoPatch) {
        merge_field(&mut self.agent_id, patch.agent_id);
        merge_field(&mut self.url, patch.url);
        merge_optional(&mut self.caption, patch.caption);
        merge_field(&mut self.sort_order, patch.sort_order);
        merge_field(&mut self.kind, patch.kind);
        merge_optional(&mut self.uploaded_at, patch.uploaded_at);
    }
}

///
/// TESTS
///
