use rosterdb_core::{traits::EntityKind, types::RecordId};
use serde::{Deserialize, Serialize};

///
/// Organization
///
/// Top of the roster hierarchy. Read-only through the store contract.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: RecordId,
    pub name: String,
    pub slug: Option<String>,
    pub logo_url: Option<String>,
}

impl EntityKind for Organization {
    const ENTITY_NAME: &'static str = "organization";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

///
/// Brokerage
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Brokerage {
    pub id: RecordId,
    pub organization_id: RecordId,
    pub name: String,
    pub website: Option<String>,
}

impl EntityKind for Brokerage {
    const ENTITY_NAME: &'static str = "brokerage";

    fn id(&self) -> &RecordId {
        &self.id
    }
}
