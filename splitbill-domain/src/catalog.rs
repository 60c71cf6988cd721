use indexmap::{IndexMap, map::Entry};
use rust_decimal::Decimal;

use crate::{
    error::{NumericField, ValidationError},
    ledger::Ledger,
    model::{Item, ItemName, UpsertKind, ensure_amount},
};

/// Billable items keyed by name, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    items: IndexMap<ItemName, Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item or overwrites the quantity and price of an existing one.
    pub fn upsert_item(
        &mut self,
        name: &str,
        quantity: Decimal,
        total_price: Decimal,
    ) -> Result<UpsertKind, ValidationError> {
        let name = ItemName::new(name).ok_or(ValidationError::EmptyItemName)?;
        let item = Item {
            quantity: ensure_amount(NumericField::Quantity, quantity)?,
            total_price: ensure_amount(NumericField::TotalPrice, total_price)?,
        };
        if !item.has_representable_unit_price() {
            return Err(ValidationError::UnitPriceOutOfRange { item: name, quantity });
        }

        let kind = match self.items.entry(name) {
            Entry::Occupied(mut entry) => {
                entry.insert(item);
                UpsertKind::Updated
            }
            Entry::Vacant(entry) => {
                entry.insert(item);
                UpsertKind::Added
            }
        };
        Ok(kind)
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn resolve(&self, name: &str) -> Option<&ItemName> {
        self.items.get_key_value(name).map(|(key, _)| key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Unit price of the item, or zero when it is unknown or has no quantity.
    pub fn unit_price(&self, name: &str) -> Decimal {
        self.get(name).map_or(Decimal::ZERO, Item::unit_price)
    }

    pub fn remaining_quantity(&self, name: &str, ledger: &Ledger) -> Decimal {
        ledger.remaining_quantity(self, name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, &Item)> + '_ {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
