//! End-to-end behaviour of the seeded roster store: lookups, derived
//! queries, patches, and quote creation across a full session.

use rosterdb::prelude::*;

#[test]
fn agent_office_lookup_round_trips() {
    let db = RosterDb::seeded();

    for agent in db.agents() {
        let office = db.office(&agent.office_id);
        assert!(office.is_some(), "agent {} has a dangling office", agent.id);
    }

    let jordan = db.agent(&RecordId::from("agent-1")).unwrap();
    let office = db.office(&jordan.office_id).unwrap();
    assert_eq!(office.name, "Downtown Office");
}

#[test]
fn missing_ids_resolve_to_none() {
    let db = RosterDb::seeded();

    assert!(db.office(&RecordId::from("does-not-exist")).is_none());
    assert!(db.agent(&RecordId::from("agent-999")).is_none());
    assert!(db.client_quote(&RecordId::from("")).is_none());
}

#[test]
fn photos_come_back_in_ascending_sort_order() {
    let mut db = RosterDb::seeded();

    // Seed rows tie on sort_order, so push one to the front explicitly.
    db.update_agent_photo(
        &RecordId::from("photo-2"),
        AgentPhotoPatch {
            sort_order: Some(-1),
            ..Default::default()
        },
    )
    .unwrap();

    let photos = db.agent_photos(&RecordId::from("agent-1"));
    assert_eq!(photos.len(), 2);
    assert_eq!(photos[0].id.as_str(), "photo-2");
    assert_eq!(photos[1].id.as_str(), "photo-1");
}

#[test]
fn equal_sort_orders_keep_collection_order() {
    let db = RosterDb::seeded();

    // photo-1 and photo-2 both carry sort_order 0 and ids sort that way.
    let photos = db.agent_photos(&RecordId::from("agent-1"));
    assert_eq!(photos[0].id.as_str(), "photo-1");
    assert_eq!(photos[1].id.as_str(), "photo-2");
}

#[test]
fn headshot_and_banner_are_both_returned() {
    let db = RosterDb::seeded();

    let photos = db.agent_photos(&RecordId::from("agent-1"));
    assert_eq!(photos.len(), 2);

    let headshots: Vec<_> = photos
        .iter()
        .filter(|p| p.kind == PhotoKind::Headshot)
        .collect();
    assert_eq!(headshots.len(), 1);
    assert_eq!(
        headshots[0].url,
        "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=400&h=400&fit=crop"
    );
    assert!(photos.iter().any(|p| p.kind == PhotoKind::Banner));
}

#[test]
fn metrics_come_back_newest_year_first() {
    let db = RosterDb::seeded();

    let metrics = db.agent_metrics(&RecordId::from("agent-1"));
    assert_eq!(metrics.len(), 2);
    assert_eq!(metrics[0].year, 2024);
    assert_eq!(metrics[1].year, 2023);
    assert_eq!(metrics[0].total_sales, 42);
}

#[test]
fn quotes_and_sold_properties_follow_display_order() {
    let db = RosterDb::seeded();

    let quotes = db.client_quotes(&RecordId::from("agent-1"));
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].id.as_str(), "quote-1");
    assert_eq!(quotes[1].id.as_str(), "quote-2");

    let sold = db.sold_properties(&RecordId::from("agent-1"));
    assert_eq!(sold.len(), 2);
    assert_eq!(sold[0].address, "2400 Lake Austin Blvd");
    assert_eq!(sold[1].address, "1505 W 6th St");
}

#[test]
fn bio_edit_touches_only_the_bio() {
    let mut db = RosterDb::seeded();
    let id = RecordId::from("agent-1");
    let before = db.agent(&id).unwrap().clone();
    let morgan_before = db.agent(&RecordId::from("agent-2")).unwrap().clone();

    db.update_agent(
        &id,
        AgentPatch {
            bio: Some(Some("Austin specialist since 2012.".to_string())),
            ..Default::default()
        },
    )
    .unwrap();

    let after = db.agent(&id).unwrap();
    assert_eq!(after.bio.as_deref(), Some("Austin specialist since 2012."));
    assert_eq!(after.first_name, before.first_name);
    assert_eq!(after.email, before.email);
    assert_eq!(after.joined_at, before.joined_at);
    assert_eq!(after.is_active, before.is_active);

    // The other agent is untouched.
    let morgan = db.agent(&RecordId::from("agent-2")).unwrap();
    assert_eq!(morgan.bio, morgan_before.bio);
    assert_eq!(morgan.first_name, "Morgan");
}

#[test]
fn patching_twice_with_the_same_payload_is_idempotent() {
    let mut db = RosterDb::seeded();
    let id = RecordId::from("sold-2");

    let patch = SoldPropertyPatch {
        sale_price: Some(700_000),
        image_url: Some(None),
        ..Default::default()
    };

    db.update_sold_property(&id, patch.clone()).unwrap();
    let once = db.sold_property(&id).unwrap().clone();

    db.update_sold_property(&id, patch).unwrap();
    let twice = db.sold_property(&id).unwrap();

    assert_eq!(once.sale_price, twice.sale_price);
    assert_eq!(once.image_url, twice.image_url);
    assert_eq!(once.address, twice.address);
}

#[test]
fn patching_a_missing_id_fails_and_changes_nothing() {
    let mut db = RosterDb::seeded();
    let before: Vec<_> = db.agents().cloned().collect();

    let err = db
        .update_agent(
            &RecordId::from("agent-999"),
            AgentPatch {
                first_name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();

    assert!(err.is_not_found());
    let after: Vec<_> = db.agents().cloned().collect();
    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!(b.first_name, a.first_name);
    }
}

#[test]
fn clearing_an_optional_field_sets_it_to_none() {
    let mut db = RosterDb::seeded();
    let id = RecordId::from("quote-1");

    db.update_client_quote(
        &id,
        ClientQuotePatch {
            client_name: Some(None),
            ..Default::default()
        },
    )
    .unwrap();

    assert!(db.client_quote(&id).unwrap().client_name.is_none());
}

#[test]
fn added_quote_lands_at_the_end_of_the_agent_list() {
    let mut db = RosterDb::seeded();
    let agent_id = RecordId::from("agent-1");
    let before: Vec<RecordId> = db
        .client_quotes(&agent_id)
        .iter()
        .map(|q| q.id.clone())
        .collect();

    let new_id = db.add_client_quote(
        &agent_id,
        NewClientQuote {
            quote: "A pleasure from listing to close.".to_string(),
            client_name: Some("D. Okafor".to_string()),
        },
    );

    let after = db.client_quotes(&agent_id);
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last().unwrap().id, new_id);

    // Existing rows keep their positions and contents.
    for (i, id) in before.iter().enumerate() {
        assert_eq!(&after[i].id, id);
    }

    let added = db.client_quote(&new_id).unwrap();
    assert_eq!(added.agent_id, agent_id);
    assert_eq!(added.quote, "A pleasure from listing to close.");
    assert_eq!(added.client_name.as_deref(), Some("D. Okafor"));
    assert_eq!(added.display_order, Some(2));
}

#[test]
fn first_quote_for_an_agent_gets_display_order_zero() {
    let mut db = RosterDb::new();

    let id = db.add_client_quote(
        &RecordId::from("agent-1"),
        NewClientQuote {
            quote: "Great experience.".to_string(),
            client_name: None,
        },
    );

    let quote = db.client_quote(&id).unwrap();
    assert_eq!(quote.display_order, Some(0));
    assert!(id.as_str().starts_with("quote-"));
}

#[test]
fn minted_quote_ids_never_collide() {
    let mut db = RosterDb::seeded();
    let agent_id = RecordId::from("agent-2");

    let a = db.add_client_quote(
        &agent_id,
        NewClientQuote {
            quote: "First.".to_string(),
            client_name: None,
        },
    );
    let b = db.add_client_quote(
        &agent_id,
        NewClientQuote {
            quote: "Second.".to_string(),
            client_name: None,
        },
    );

    assert_ne!(a, b);
    assert_eq!(db.client_quotes(&agent_id).len(), 3);
}

#[test]
fn negative_sale_price_is_accepted_verbatim() {
    let mut db = RosterDb::seeded();
    let id = RecordId::from("sold-3");

    db.update_sold_property(
        &id,
        SoldPropertyPatch {
            sale_price: Some(-1),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(db.sold_property(&id).unwrap().sale_price, -1);
}
