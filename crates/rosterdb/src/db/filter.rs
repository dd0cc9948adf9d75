//! List-view search and filter helpers.
//!
//! These compose the store's raw collections the way the dashboard list
//! pages do: free-text search is a case-insensitive substring match over a
//! per-row haystack, a selected brokerage narrows the candidate set before
//! the search applies, and office filter options are recomputed from the
//! agents that currently match. None of this is a store invariant; it
//! lives here so every consumer matches the same behavior.

use crate::{
    db::RosterDb,
    model::{Agent, Brokerage, Office},
};
use rosterdb_core::types::RecordId;

/// Normalize a search query: trim, lowercase, treat empty as no query.
fn normalize(query: &str) -> Option<String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() { None } else { Some(q) }
}

/// Concatenated lowercase search haystack for one agent: name, email,
/// office name, brokerage name.
fn agent_haystack(db: &RosterDb, agent: &Agent) -> String {
    let office = db.office(&agent.office_id).map_or("", |o| o.name.as_str());
    let brokerage = db
        .brokerage(&agent.brokerage_id)
        .map_or("", |b| b.name.as_str());

    format!(
        "{} {} {office} {brokerage}",
        agent.full_name(),
        agent.email
    )
    .to_lowercase()
}

/// Active agents matching the query and filters.
///
/// A selected brokerage narrows the candidate set before the free-text
/// search applies; the office filter narrows further.
#[must_use]
pub fn search_agents<'a>(
    db: &'a RosterDb,
    query: &str,
    brokerage_id: Option<&RecordId>,
    office_id: Option<&RecordId>,
) -> Vec<&'a Agent> {
    let q = normalize(query);

    db.agents()
        .filter(|a| a.is_active)
        .filter(|a| brokerage_id.is_none_or(|id| a.brokerage_id == *id))
        .filter(|a| office_id.is_none_or(|id| a.office_id == *id))
        .filter(|a| {
            q.as_ref()
                .is_none_or(|q| agent_haystack(db, a).contains(q))
        })
        .collect()
}

/// Office filter options for the agent list: offices that belong to the
/// selected brokerage (all brokerages when none is selected) and currently
/// have at least one matching agent. Sorted by name.
#[must_use]
pub fn office_options<'a>(
    db: &'a RosterDb,
    query: &str,
    brokerage_id: Option<&RecordId>,
) -> Vec<&'a Office> {
    let matching = search_agents(db, query, brokerage_id, None);

    let mut offices: Vec<_> = db
        .offices()
        .filter(|o| brokerage_id.is_none_or(|id| o.brokerage_id == *id))
        .filter(|o| matching.iter().any(|a| a.office_id == o.id))
        .collect();
    offices.sort_by(|a, b| a.name.cmp(&b.name));

    offices
}

/// Offices matching the query (office name, city, or brokerage name),
/// narrowed by the selected brokerage. Sorted by name.
#[must_use]
pub fn search_offices<'a>(
    db: &'a RosterDb,
    query: &str,
    brokerage_id: Option<&RecordId>,
) -> Vec<&'a Office> {
    let q = normalize(query);

    let mut offices: Vec<_> = db
        .offices()
        .filter(|o| brokerage_id.is_none_or(|id| o.brokerage_id == *id))
        .filter(|o| {
            q.as_ref().is_none_or(|q| {
                let brokerage = db.brokerage(&o.brokerage_id).map_or("", |b| b.name.as_str());
                let haystack = format!(
                    "{} {} {brokerage}",
                    o.name,
                    o.city.as_deref().unwrap_or_default()
                )
                .to_lowercase();

                haystack.contains(q)
            })
        })
        .collect();
    offices.sort_by(|a, b| a.name.cmp(&b.name));

    offices
}

/// Brokerages whose name matches the query. Sorted by name.
#[must_use]
pub fn search_brokerages<'a>(db: &'a RosterDb, query: &str) -> Vec<&'a Brokerage> {
    let q = normalize(query);

    let mut brokerages: Vec<_> = db
        .brokerages()
        .filter(|b| q.as_ref().is_none_or(|q| b.name.to_lowercase().contains(q)))
        .collect();
    brokerages.sort_by(|a, b| a.name.cmp(&b.name));

    brokerages
}

/// Active agents attached to one office.
#[must_use]
pub fn office_agent_count(db: &RosterDb, office_id: &RecordId) -> usize {
    db.agents()
        .filter(|a| a.is_active && a.office_id == *office_id)
        .count()
}

/// Active agents attached to one brokerage.
#[must_use]
pub fn brokerage_agent_count(db: &RosterDb, brokerage_id: &RecordId) -> usize {
    db.agents()
        .filter(|a| a.is_active && a.brokerage_id == *brokerage_id)
        .count()
}

/// Offices attached to one brokerage.
#[must_use]
pub fn brokerage_office_count(db: &RosterDb, brokerage_id: &RecordId) -> usize {
    db.offices()
        .filter(|o| o.brokerage_id == *brokerage_id)
        .count()
}

///
/// TESTS
///
