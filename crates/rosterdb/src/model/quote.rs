use rosterdb_core::{
    patch::{Patchable, merge_field, merge_optional},
    traits::EntityKind,
    types::{Date, RecordId},
};
use serde::{Deserialize, Serialize};

///
/// SaleType
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleType {
    Buyer,
    Seller,
    Both,
}

///
/// ClientQuote
///
/// A client testimonial. The one entity with an append operation; there is
/// still no delete.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientQuote {
    pub id: RecordId,
    pub agent_id: RecordId,
    pub quote: String,
    pub client_name: Option<String>,
    /// For privacy, some quotes carry initials instead of a name.
    pub client_initials: Option<String>,
    pub sale_type: Option<SaleType>,
    pub created_at: Date,
    pub display_order: Option<i32>,
}

impl EntityKind for ClientQuote {
    const ENTITY_NAME: &'static str = "client_quote";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

///
/// ClientQuotePatch
///

#[derive(Clone, Debug, Default)]
pub struct ClientQuotePatch {
    pub agent_id: Option<RecordId>,
    pub quote: Option<String>,
    pub client_name: Option<Option<String>>,
    pub client_initials: Option<Option<String>>,
    pub sale_type: Option<Option<SaleType>>,
    pub created_at: Option<Date>,
    pub display_order: Option<Option<i32>>,
}

impl Patchable for ClientQuote {
    type Patch = ClientQuotePatch;

    fn merge(&mut self, patch: ClientQuotePatch) {
        merge_field(&mut self.agent_id, patch.agent_id);
        merge_field(&mut self.quote, patch.quote);
        merge_optional(&mut self.client_name, patch.client_name);
        merge_optional(&mut self.client_initials, patch.client_initials);
        merge_optional(&mut self.sale_type, patch.sale_type);
        merge_field(&mut self.created_at, patch.created_at);
        merge_optional(&mut self.display_order, patch.display_order);
    }
}

///
/// NewClientQuote
///
/// Caller-supplied fields for `add_client_quote`; everything else is
/// defaulted by the store and edited afterwards.
///

#[derive(Clone, Debug, Default)]
pub struct NewClientQuote {
    pub quote: String,
    pub client_name: Option<String>,
}
