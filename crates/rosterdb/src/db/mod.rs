pub mod filter;

use crate::model::{
    Agent, AgentMetrics, AgentPatch, AgentPhoto, AgentPhotoPatch, Brokerage, ClientQuote,
    ClientQuotePatch, NewClientQuote, Office, Organization, SoldProperty, SoldPropertyPatch,
};
use rosterdb_core::{
    error::Error,
    patch::Patchable,
    traits::EntityKind,
    types::{Date, RecordId, RecordMap},
};

///
/// RosterDb
///
/// The normalized in-memory roster store: one id-keyed map per entity plus
/// the metrics sequence. The store is the sole owner of this state: reads
/// hand out `&` views, every write goes through a method below, and each
/// mutation is a single replace-in-place of one record. A single logical
/// writer is assumed; there are no transactions and no conflict detection.
///

#[derive(Clone, Debug, Default)]
pub struct RosterDb {
    pub(crate) organizations: RecordMap<Organization>,
    pub(crate) brokerages: RecordMap<Brokerage>,
    pub(crate) offices: RecordMap<Office>,
    pub(crate) agents: RecordMap<Agent>,
    pub(crate) agent_photos: RecordMap<AgentPhoto>,
    pub(crate) client_quotes: RecordMap<ClientQuote>,
    pub(crate) sold_properties: RecordMap<SoldProperty>,
    pub(crate) agent_metrics: Vec<AgentMetrics>,
}

impl RosterDb {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with the startup dataset.
    #[must_use]
    pub fn seeded() -> Self {
        crate::seed::roster()
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------
    // Missing ids yield `None`, never a panic and never a default record;
    // dangling foreign keys are tolerated and surface here as absence.

    #[must_use]
    pub fn organization(&self, id: &RecordId) -> Option<&Organization> {
        self.organizations.get(id)
    }

    #[must_use]
    pub fn brokerage(&self, id: &RecordId) -> Option<&Brokerage> {
        self.brokerages.get(id)
    }

    #[must_use]
    pub fn office(&self, id: &RecordId) -> Option<&Office> {
        self.offices.get(id)
    }

    #[must_use]
    pub fn agent(&self, id: &RecordId) -> Option<&Agent> {
        self.agents.get(id)
    }

    #[must_use]
    pub fn agent_photo(&self, id: &RecordId) -> Option<&AgentPhoto> {
        self.agent_photos.get(id)
    }

    #[must_use]
    pub fn client_quote(&self, id: &RecordId) -> Option<&ClientQuote> {
        self.client_quotes.get(id)
    }

    #[must_use]
    pub fn sold_property(&self, id: &RecordId) -> Option<&SoldProperty> {
        self.sold_properties.get(id)
    }

    // ------------------------------------------------------------------
    // Collection views
    // ------------------------------------------------------------------

    pub fn organizations(&self) -> impl Iterator<Item = &Organization> {
        self.organizations.rows()
    }

    pub fn brokerages(&self) -> impl Iterator<Item = &Brokerage> {
        self.brokerages.rows()
    }

    pub fn offices(&self) -> impl Iterator<Item = &Office> {
        self.offices.rows()
    }

    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.rows()
    }

    #[must_use]
    pub fn metrics(&self) -> &[AgentMetrics] {
        &self.agent_metrics
    }

    // ------------------------------------------------------------------
    // Derived queries
    // ------------------------------------------------------------------
    // Recomputed on every call against live state, never cached. All four
    // sort stably, so equal keys keep their collection order.

    /// Photos for one agent, ascending by `sort_order`.
    #[must_use]
    pub fn agent_photos(&self, agent_id: &RecordId) -> Vec<&AgentPhoto> {
        let mut photos: Vec<_> = self
            .agent_photos
            .rows()
            .filter(|p| p.agent_id == *agent_id)
            .collect();
        photos.sort_by_key(|p| p.sort_order);

        photos
    }

    /// Quotes for one agent, ascending by `display_order` (missing = 0).
    #[must_use]
    pub fn client_quotes(&self, agent_id: &RecordId) -> Vec<&ClientQuote> {
        let mut quotes: Vec<_> = self
            .client_quotes
            .rows()
            .filter(|q| q.agent_id == *agent_id)
            .collect();
        quotes.sort_by_key(|q| q.display_order.unwrap_or(0));

        quotes
    }

    /// Sold properties for one agent, ascending by `display_order`
    /// (missing = 0).
    #[must_use]
    pub fn sold_properties(&self, agent_id: &RecordId) -> Vec<&SoldProperty> {
        let mut properties: Vec<_> = self
            .sold_properties
            .rows()
            .filter(|s| s.agent_id == *agent_id)
            .collect();
        properties.sort_by_key(|s| s.display_order.unwrap_or(0));

        properties
    }

    /// Yearly metrics for one agent, descending by `year`. This is the one
    /// query that orders most-recent-first.
    #[must_use]
    pub fn agent_metrics(&self, agent_id: &RecordId) -> Vec<&AgentMetrics> {
        let mut metrics: Vec<_> = self
            .agent_metrics
            .iter()
            .filter(|m| m.agent_id == *agent_id)
            .collect();
        metrics.sort_by(|a, b| b.year.cmp(&a.year));

        metrics
    }

    // ------------------------------------------------------------------
    // Patch updates
    // ------------------------------------------------------------------
    // A patch merges only its named fields; no field value is validated.
    // A missing id reports NotFound and leaves the store unchanged.

    pub fn update_agent(&mut self, id: &RecordId, patch: AgentPatch) -> Result<(), Error> {
        Self::patch_row(&mut self.agents, id, patch)
    }

    pub fn update_agent_photo(
        &mut self,
        id: &RecordId,
        patch: AgentPhotoPatch,
    ) -> Result<(), Error> {
        Self::patch_row(&mut self.agent_photos, id, patch)
    }

    pub fn update_client_quote(
        &mut self,
        id: &RecordId,
        patch: ClientQuotePatch,
    ) -> Result<(), Error> {
        Self::patch_row(&mut self.client_quotes, id, patch)
    }

    pub fn update_sold_property(
        &mut self,
        id: &RecordId,
        patch: SoldPropertyPatch,
    ) -> Result<(), Error> {
        Self::patch_row(&mut self.sold_properties, id, patch)
    }

    fn patch_row<E>(map: &mut RecordMap<E>, id: &RecordId, patch: E::Patch) -> Result<(), Error>
    where
        E: EntityKind + Patchable,
    {
        match map.get_mut(id) {
            Some(row) => {
                row.merge(patch);
                Ok(())
            }
            None => Err(Error::not_found::<E>(id)),
        }
    }

    // ------------------------------------------------------------------
    // Quote creation
    // ------------------------------------------------------------------

    /// Append a new client quote for `agent_id` and return its minted id.
    ///
    /// The new row lands at the end of the agent's display order with
    /// `created_at` set to today; the caller edits it afterwards. No
    /// entity has a delete operation.
    pub fn add_client_quote(&mut self, agent_id: &RecordId, new: NewClientQuote) -> RecordId {
        let display_order = self
            .client_quotes
            .rows()
            .filter(|q| q.agent_id == *agent_id)
            .map(|q| q.display_order.unwrap_or(0))
            .max()
            .map_or(0, |n| n + 1);

        let id = RecordId::mint("quote");
        let quote = ClientQuote {
            id: id.clone(),
            agent_id: agent_id.clone(),
            quote: new.quote,
            client_name: new.client_name,
            client_initials: None,
            sale_type: None,
            created_at: Date::today(),
            display_order: Some(display_order),
        };

        self.client_quotes.insert(id.clone(), quote);

        id
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PhotoKind;
    use proptest::prelude::*;

    fn photo(id: &str, agent: &str, sort_order: i32) -> AgentPhoto {
        AgentPhoto {
            id: RecordId::from(id),
            agent_id: RecordId::from(agent),
            url: format!("https://example.com/{id}.jpg"),
            caption: None,
            sort_order,
            kind: PhotoKind::Gallery,
            uploaded_at: None,
        }
    }

    #[test]
    fn empty_store_finds_nothing() {
        let db = RosterDb::new();
        let missing = RecordId::from("does-not-exist");

        assert!(db.office(&missing).is_none());
        assert!(db.agent_photos(&missing).is_empty());
        assert!(db.agent_metrics(&missing).is_empty());
    }

    #[test]
    fn patch_on_a_missing_id_is_rejected_without_side_effects() {
        let mut db = RosterDb::new();
        let missing = RecordId::from("agent-404");

        let err = db.update_agent(&missing, AgentPatch::default()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(db.agents().count(), 0);
    }

    proptest! {
        // Equal sort keys must keep collection order regardless of how the
        // keys are distributed.
        #[test]
        fn photo_ordering_is_stable_for_equal_keys(orders in prop::collection::vec(0i32..4, 1..16)) {
            let mut db = RosterDb::new();
            let agent = RecordId::from("agent-1");

            for (n, order) in orders.iter().enumerate() {
                let id = format!("photo-{n:03}");
                db.agent_photos.insert(RecordId::from(id.as_str()), photo(&id, "agent-1", *order));
            }

            let sorted = db.agent_photos(&agent);
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].sort_order <= pair[1].sort_order);
                if pair[0].sort_order == pair[1].sort_order {
                    // Zero-padded ids match the map's key order, so a
                    // stable sort keeps them ascending.
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }
}
