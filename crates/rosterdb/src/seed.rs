//! The fixed dataset every session starts from.
//!
//! This is the only "persisted" state the dashboard has; it is rebuilt on
//! every session start and edited in place through the store contract.

use crate::{
    RosterDb,
    model::{
        Agent, AgentMetrics, AgentPhoto, Brokerage, ClientQuote, Office, Organization, PhotoKind,
        SaleType, SoldProperty,
    },
};
use rosterdb_core::types::{Date, RecordId, RecordMap};

/// Build the seeded roster store.
#[must_use]
pub fn roster() -> RosterDb {
    RosterDb {
        organizations: RecordMap::from_rows(organizations()),
        brokerages: RecordMap::from_rows(brokerages()),
        offices: RecordMap::from_rows(offices()),
        agents: RecordMap::from_rows(agents()),
        agent_photos: RecordMap::from_rows(agent_photos()),
        client_quotes: RecordMap::from_rows(client_quotes()),
        sold_properties: RecordMap::from_rows(sold_properties()),
        agent_metrics: agent_metrics(),
    }
}

fn organizations() -> Vec<Organization> {
    vec![Organization {
        id: RecordId::from("org-1"),
        name: "HSoA Realty".to_string(),
        slug: Some("hsoa".to_string()),
        logo_url: None,
    }]
}

fn brokerages() -> Vec<Brokerage> {
    vec![
        Brokerage {
            id: RecordId::from("brokerage-1"),
            organization_id: RecordId::from("org-1"),
            name: "HSoA Realty Group".to_string(),
            website: Some("https://hsoa.com".to_string()),
        },
        Brokerage {
            id: RecordId::from("brokerage-2"),
            organization_id: RecordId::from("org-1"),
            name: "HSoA Realty North".to_string(),
            website: None,
        },
    ]
}

fn offices() -> Vec<Office> {
    vec![
        Office {
            id: RecordId::from("office-1"),
            brokerage_id: RecordId::from("brokerage-1"),
            name: "Downtown Office".to_string(),
            address: Some("100 Main Street".to_string()),
            city: Some("Austin".to_string()),
            state: Some("TX".to_string()),
            zip: Some("78701".to_string()),
            phone: Some("(512) 555-0100".to_string()),
            email: Some("downtown@hsoa.com".to_string()),
        },
        Office {
            id: RecordId::from("office-2"),
            brokerage_id: RecordId::from("brokerage-2"),
            name: "North Office".to_string(),
            address: Some("5000 Research Blvd".to_string()),
            city: Some("Austin".to_string()),
            state: Some("TX".to_string()),
            zip: Some("78758".to_string()),
            phone: Some("(512) 555-0200".to_string()),
            email: Some("north@hsoa.com".to_string()),
        },
    ]
}

fn agents() -> Vec<Agent> {
    vec![
        Agent {
            id: RecordId::from("agent-1"),
            office_id: RecordId::from("office-1"),
            brokerage_id: RecordId::from("brokerage-1"),
            first_name: "Jordan".to_string(),
            last_name: "Smith".to_string(),
            email: "jordan.smith@hsoa.com".to_string(),
            phone: Some("(512) 555-1001".to_string()),
            title: Some("Senior Agent".to_string()),
            bio: Some(
                "With over 12 years of experience in Austin real estate, I help buyers \
                 and sellers navigate the market with confidence. My focus is on clear \
                 communication and results."
                    .to_string(),
            ),
            license_number: Some("12345678".to_string()),
            license_state: Some("TX".to_string()),
            joined_at: Some(Date::new(2018, 3, 15)),
            is_active: true,
        },
        Agent {
            id: RecordId::from("agent-2"),
            office_id: RecordId::from("office-2"),
            brokerage_id: RecordId::from("brokerage-2"),
            first_name: "Morgan".to_string(),
            last_name: "Chen".to_string(),
            email: "morgan.chen@hsoa.com".to_string(),
            phone: Some("(512) 555-1002".to_string()),
            title: Some("Broker Associate".to_string()),
            bio: Some(
                "Specializing in first-time buyers and luxury listings. Let's find the \
                 right fit for you."
                    .to_string(),
            ),
            license_number: Some("87654321".to_string()),
            license_state: Some("TX".to_string()),
            joined_at: Some(Date::new(2020, 7, 1)),
            is_active: true,
        },
    ]
}

fn agent_photos() -> Vec<AgentPhoto> {
    vec![
        AgentPhoto {
            id: RecordId::from("photo-1"),
            agent_id: RecordId::from("agent-1"),
            url: "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=400&h=400&fit=crop"
                .to_string(),
            caption: Some("Professional headshot".to_string()),
            sort_order: 0,
            kind: PhotoKind::Headshot,
            uploaded_at: None,
        },
        AgentPhoto {
            id: RecordId::from("photo-2"),
            agent_id: RecordId::from("agent-1"),
            url: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800&h=300&fit=crop"
                .to_string(),
            caption: Some("Cover banner".to_string()),
            sort_order: 0,
            kind: PhotoKind::Banner,
            uploaded_at: None,
        },
        AgentPhoto {
            id: RecordId::from("photo-3"),
            agent_id: RecordId::from("agent-2"),
            url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&h=400&fit=crop"
                .to_string(),
            caption: Some("Headshot".to_string()),
            sort_order: 0,
            kind: PhotoKind::Headshot,
            uploaded_at: None,
        },
    ]
}

fn client_quotes() -> Vec<ClientQuote> {
    vec![
        ClientQuote {
            id: RecordId::from("quote-1"),
            agent_id: RecordId::from("agent-1"),
            quote: "Jordan made our first home purchase smooth and stress-free. Couldn't \
                    recommend more."
                .to_string(),
            client_name: Some("Sarah M.".to_string()),
            client_initials: None,
            sale_type: Some(SaleType::Buyer),
            created_at: Date::new(2024, 6, 1),
            display_order: Some(0),
        },
        ClientQuote {
            id: RecordId::from("quote-2"),
            agent_id: RecordId::from("agent-1"),
            quote: "Professional, responsive, and got us over ask in a competitive market."
                .to_string(),
            client_name: None,
            client_initials: Some("J. & K.".to_string()),
            sale_type: Some(SaleType::Seller),
            created_at: Date::new(2024, 8, 15),
            display_order: Some(1),
        },
        ClientQuote {
            id: RecordId::from("quote-3"),
            agent_id: RecordId::from("agent-2"),
            quote: "Morgan understood exactly what we were looking for and found it.".to_string(),
            client_name: Some("The Rivera Family".to_string()),
            client_initials: None,
            sale_type: Some(SaleType::Buyer),
            created_at: Date::new(2024, 9, 1),
            display_order: Some(0),
        },
    ]
}

fn sold_properties() -> Vec<SoldProperty> {
    vec![
        SoldProperty {
            id: RecordId::from("sold-1"),
            agent_id: RecordId::from("agent-1"),
            address: "2400 Lake Austin Blvd".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip: "78703".to_string(),
            sale_price: 1_250_000,
            sale_date: Date::new(2024, 10, 1),
            image_url: Some(
                "https://images.unsplash.com/photo-1613490493576-7fde63acd811?w=400&h=300&fit=crop"
                    .to_string(),
            ),
            mls_id: None,
            display_order: Some(0),
        },
        SoldProperty {
            id: RecordId::from("sold-2"),
            agent_id: RecordId::from("agent-1"),
            address: "1505 W 6th St".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip: "78703".to_string(),
            sale_price: 685_000,
            sale_date: Date::new(2024, 9, 15),
            image_url: None,
            mls_id: None,
            display_order: Some(1),
        },
        SoldProperty {
            id: RecordId::from("sold-3"),
            agent_id: RecordId::from("agent-2"),
            address: "9012 Mesa Dr".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip: "78759".to_string(),
            sale_price: 920_000,
            sale_date: Date::new(2024, 10, 10),
            image_url: Some(
                "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=400&h=300&fit=crop"
                    .to_string(),
            ),
            mls_id: None,
            display_order: Some(0),
        },
    ]
}

fn agent_metrics() -> Vec<AgentMetrics> {
    vec![
        AgentMetrics {
            agent_id: RecordId::from("agent-1"),
            year: 2024,
            total_sales: 42,
            volume: 18_500_000,
            rank_in_office: Some(1),
            rank_in_org: Some(2),
            average_price: Some(440_476),
        },
        AgentMetrics {
            agent_id: RecordId::from("agent-1"),
            year: 2023,
            total_sales: 38,
            volume: 15_200_000,
            rank_in_office: Some(1),
            rank_in_org: Some(3),
            average_price: Some(400_000),
        },
        AgentMetrics {
            agent_id: RecordId::from("agent-2"),
            year: 2024,
            total_sales: 28,
            volume: 12_100_000,
            rank_in_office: Some(2),
            rank_in_org: Some(5),
            average_price: Some(432_143),
        },
    ]
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_foreign_key_resolves_at_session_start() {
        let db = roster();

        for brokerage in db.brokerages() {
            assert!(db.organization(&brokerage.organization_id).is_some());
        }
        for office in db.offices() {
            assert!(db.brokerage(&office.brokerage_id).is_some());
        }
        for agent in db.agents() {
            assert!(db.office(&agent.office_id).is_some());
            assert!(db.brokerage(&agent.brokerage_id).is_some());
        }
        for metrics in db.metrics() {
            assert!(db.agent(&metrics.agent_id).is_some());
        }
    }

    #[test]
    fn seed_counts_match_the_fixture() {
        let db = roster();

        assert_eq!(db.organizations().count(), 1);
        assert_eq!(db.brokerages().count(), 2);
        assert_eq!(db.offices().count(), 2);
        assert_eq!(db.agents().count(), 2);
        assert_eq!(db.metrics().len(), 3);
    }
}
