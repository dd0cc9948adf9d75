use rosterdb_core::{
    patch::{Patchable, merge_field, merge_optional},
    traits::EntityKind,
    types::{Date, RecordId},
};
use serde::{Deserialize, Serialize};

///
/// SoldProperty
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoldProperty {
    pub id: RecordId,
    pub agent_id: RecordId,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    /// Whole dollars. Signed because patches are unvalidated; the store
    /// accepts whatever the caller writes.
    pub sale_price: i64,
    pub sale_date: Date,
    pub image_url: Option<String>,
    pub mls_id: Option<String>,
    pub display_order: Option<i32>,
}

impl EntityKind for SoldProperty {
    const ENTITY_NAME: &'static str = "sold_property";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

///
/// SoldPropertyPatch
///

#[derive(Clone, Debug, Default)]
pub struct SoldPropertyPatch {
    pub agent_id: Option<RecordId>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub sale_price: Option<i64>,
    pub sale_date: Option<Date>,
    pub image_url: Option<Option<String>>,
    pub mls_id: Option<Option<String>>,
    pub display_order: Option<Option<i32>>,
}

impl Patchable for SoldProperty {
    type Patch = SoldPropertyPatch;

    fn merge(&mut self, patch: SoldPropertyPatch) {
        merge_field(&mut self.agent_id, patch.agent_id);
        merge_field(&mut self.address, patch.address);
        merge_field(&mut self.city, patch.city);
        merge_field(&mut self.state, patch.state);
        merge_field(&mut self.zip, patch.zip);
        merge_field(&mut self.sale_price, patch.sale_price);
        merge_field(&mut self.sale_date, patch.sale_date);
        merge_optional(&mut self.image_url, patch.image_url);
        merge_optional(&mut self.mls_id, patch.mls_id);
        merge_optional(&mut self.display_order, patch.display_order);
    }
}

///
/// TESTS
///
