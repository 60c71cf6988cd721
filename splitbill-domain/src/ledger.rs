use fxhash::FxHashMap;
use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::{
    catalog::Catalog,
    error::{BillError, ConservationViolation, NotFoundError, NumericField, ValidationError},
    model::{ALLOCATION_EPSILON, ItemName, ParticipantName, ensure_amount},
    roster::Roster,
};

/// Assigned quantities per participant and item.
///
/// Rows are keyed by participant; each row keeps its items in the order they were
/// first assigned. An absent entry means zero. For every item the assigned total
/// never exceeds the catalog quantity (see [`Ledger::check_conservation`]).
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    rows: IndexMap<ParticipantName, IndexMap<ItemName, Decimal>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ensure_row(&mut self, participant: &str) {
        if let Some(name) = ParticipantName::new(participant) {
            self.rows.entry(name).or_default();
        }
    }

    pub fn share_of(&self, participant: &str, item: &str) -> Decimal {
        self.rows
            .get(participant)
            .and_then(|row| row.get(item))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn assigned_total(&self, item: &str) -> Decimal {
        self.rows.values().filter_map(|row| row.get(item)).sum()
    }

    /// Quantity of `item` not yet assigned to anyone; zero for unknown items.
    pub fn remaining_quantity(&self, catalog: &Catalog, item: &str) -> Decimal {
        catalog.get(item).map_or(Decimal::ZERO, |entry| {
            entry.quantity - self.assigned_total(item)
        })
    }

    /// Items with a positive share for `participant`, in first-assignment order.
    pub fn positive_shares<'a>(
        &'a self,
        participant: &str,
    ) -> impl Iterator<Item = (&'a ItemName, Decimal)> + 'a {
        self.rows
            .get(participant)
            .into_iter()
            .flat_map(|row| row.iter())
            .filter(|(_, quantity)| quantity.is_sign_positive() && !quantity.is_zero())
            .map(|(item, quantity)| (item, *quantity))
    }

    pub fn has_positive_share(&self, participant: &str) -> bool {
        self.positive_shares(participant).next().is_some()
    }

    pub fn rows(
        &self,
    ) -> impl Iterator<Item = (&ParticipantName, &IndexMap<ItemName, Decimal>)> + '_ {
        self.rows.iter()
    }

    /// Checks that both names exist, participant first.
    pub fn resolve<'c>(
        catalog: &'c Catalog,
        roster: &'c Roster,
        participant: &str,
        item: &str,
    ) -> Result<(&'c ParticipantName, &'c ItemName), NotFoundError> {
        let participant = roster
            .resolve(participant)
            .ok_or_else(|| NotFoundError::Participant(participant.to_owned()))?;
        let item = catalog
            .resolve(item)
            .ok_or_else(|| NotFoundError::Item(item.to_owned()))?;
        Ok((participant, item))
    }

    /// Replaces the quantity `participant` holds of `item`.
    ///
    /// The participant's current hold is released before checking that the new
    /// quantity fits, so a share can always be reduced.
    pub fn set_share(
        &mut self,
        catalog: &Catalog,
        roster: &Roster,
        participant: &str,
        item: &str,
        quantity: Decimal,
    ) -> Result<(), BillError> {
        let (participant, item) = Self::resolve(catalog, roster, participant, item)?;
        let quantity = ensure_amount(NumericField::Share, quantity)?;

        let current = self.share_of(participant.as_str(), item.as_str());
        let available = self.remaining_quantity(catalog, item.as_str()) + current;
        if quantity > available {
            tracing::warn!(
                participant = %participant,
                item = %item,
                requested = %quantity,
                available = %available,
                "Share rejected: not enough quantity left"
            );
            return Err(BillError::Capacity {
                item: item.clone(),
                available,
            });
        }

        self.rows
            .entry(participant.clone())
            .or_default()
            .insert(item.clone(), quantity);
        debug_assert!(self.check_item(catalog, item).is_ok());

        tracing::debug!(
            participant = %participant,
            item = %item,
            quantity = %quantity,
            "Share set"
        );
        Ok(())
    }

    /// Adds `delta` to the quantity `participant` holds of `item`.
    pub fn add_share(
        &mut self,
        catalog: &Catalog,
        roster: &Roster,
        participant: &str,
        item: &str,
        delta: Decimal,
    ) -> Result<(), BillError> {
        let (participant, item) = Self::resolve(catalog, roster, participant, item)?;
        if delta <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveDelta { value: delta }.into());
        }

        let remaining = self.remaining_quantity(catalog, item.as_str());
        if delta > remaining {
            tracing::warn!(
                participant = %participant,
                item = %item,
                requested = %delta,
                available = %remaining,
                "Share increase rejected: not enough quantity left"
            );
            return Err(BillError::Capacity {
                item: item.clone(),
                available: remaining,
            });
        }

        *self
            .rows
            .entry(participant.clone())
            .or_default()
            .entry(item.clone())
            .or_insert(Decimal::ZERO) += delta;
        debug_assert!(self.check_item(catalog, item).is_ok());

        tracing::debug!(
            participant = %participant,
            item = %item,
            delta = %delta,
            "Share increased"
        );
        Ok(())
    }

    /// Verifies that no item is assigned beyond its catalog quantity.
    pub fn check_conservation(&self, catalog: &Catalog) -> Result<(), ConservationViolation> {
        let mut assigned: FxHashMap<&ItemName, Decimal> = FxHashMap::default();
        for row in self.rows.values() {
            for (item, quantity) in row {
                *assigned.entry(item).or_default() += *quantity;
            }
        }

        assigned
            .into_iter()
            .try_for_each(|(item, quantity)| Self::within_limit(catalog, item, quantity))
    }

    /// Like [`Ledger::check_conservation`], restricted to a single item.
    pub fn check_item(
        &self,
        catalog: &Catalog,
        item: &ItemName,
    ) -> Result<(), ConservationViolation> {
        Self::within_limit(catalog, item, self.assigned_total(item.as_str()))
    }

    fn within_limit(
        catalog: &Catalog,
        item: &ItemName,
        assigned: Decimal,
    ) -> Result<(), ConservationViolation> {
        let limit = catalog
            .get(item.as_str())
            .map_or(Decimal::ZERO, |entry| entry.quantity);
        if assigned > limit + ALLOCATION_EPSILON {
            return Err(ConservationViolation {
                item: item.clone(),
                assigned,
                quantity: limit,
            });
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
