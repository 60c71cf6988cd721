use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitbill_domain::SettlementContext;

use crate::{
    error::SnapshotError,
    model::{Initiator, RestaurantInfo},
    session::BillSession,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub qty: Decimal,
    pub total_price: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(default)]
    pub email: String,
}

/// Serializable form of a [`BillSession`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub initiator: Initiator,
    #[serde(default)]
    pub restaurant: RestaurantInfo,
    #[serde(default)]
    pub items: IndexMap<String, ItemRecord>,
    #[serde(default)]
    pub people: IndexMap<String, PersonRecord>,
    #[serde(default)]
    pub shares: IndexMap<String, IndexMap<String, Decimal>>,
    #[serde(default)]
    pub tax: Decimal,
}

impl BillSession {
    pub fn snapshot(&self) -> SessionSnapshot {
        let items = self
            .catalog()
            .iter()
            .map(|(name, item)| {
                (
                    name.to_string(),
                    ItemRecord {
                        qty: item.quantity,
                        total_price: item.total_price,
                    },
                )
            })
            .collect();
        let people = self
            .roster()
            .iter()
            .map(|(name, participant)| {
                (
                    name.to_string(),
                    PersonRecord {
                        email: participant.contact.clone().unwrap_or_default(),
                    },
                )
            })
            .collect();
        let shares = self
            .ledger()
            .rows()
            .map(|(participant, row)| {
                let row = row
                    .iter()
                    .map(|(item, quantity)| (item.to_string(), *quantity))
                    .collect();
                (participant.to_string(), row)
            })
            .collect();

        SessionSnapshot {
            initiator: self.initiator().clone(),
            restaurant: self.restaurant().clone(),
            items,
            people,
            shares,
            tax: self.tax_total(),
        }
    }

    /// Rebuilds a session by replaying the snapshot through the validated operations.
    pub fn from_snapshot(
        snapshot: &SessionSnapshot,
        context: SettlementContext,
    ) -> Result<Self, SnapshotError> {
        let mut session = BillSession::with_context(context);

        session.set_initiator(&snapshot.initiator.name, &snapshot.initiator.email);
        for account in &snapshot.initiator.accounts {
            if !session.add_payment_account(&account.label, &account.detail) {
                tracing::warn!(label = %account.label, "Skipping incomplete payment account");
            }
        }
        let restaurant = &snapshot.restaurant;
        session.set_restaurant(&restaurant.name, &restaurant.address, &restaurant.phone);

        for (name, record) in &snapshot.items {
            session
                .upsert_item(name, record.qty, record.total_price)
                .map_err(|source| SnapshotError::Item {
                    name: name.clone(),
                    source,
                })?;
        }
        for (name, person) in &snapshot.people {
            if session.upsert_participant(name, Some(person.email.as_str())).is_none() {
                tracing::warn!("Skipping participant with an empty name");
            }
        }
        for (participant, row) in &snapshot.shares {
            for (item, quantity) in row {
                session
                    .set_share(participant, item, *quantity)
                    .map_err(|source| SnapshotError::Share {
                        participant: participant.clone(),
                        item: item.clone(),
                        source,
                    })?;
            }
        }
        session.set_tax_total(snapshot.tax).map_err(SnapshotError::Tax)?;

        tracing::debug!(
            items = session.catalog().len(),
            participants = session.roster().len(),
            "Session restored from snapshot"
        );
        Ok(session)
    }
}
