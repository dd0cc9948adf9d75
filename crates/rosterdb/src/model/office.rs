use rosterdb_core::{traits::EntityKind, types::RecordId};
use serde::{Deserialize, Serialize};

///
/// Office
///
/// A physical brokerage location. Read-only through the store contract;
/// agents reference offices by id and a dangling reference simply comes
/// back empty on lookup.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Office {
    pub id: RecordId,
    pub brokerage_id: RecordId,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl EntityKind for Office {
    const ENTITY_NAME: &'static str = "office";

    fn id(&self) -> &RecordId {
        &self.id
    }
}
