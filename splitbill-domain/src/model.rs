use std::{borrow::Borrow, fmt};

use rust_decimal::Decimal;

use crate::error::{NumericField, ValidationError};

/// Tolerance used when checking the conservation invariant.
pub const ALLOCATION_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 9);

/// Name of a billable item. Always trimmed and non-empty.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        (!name.is_empty()).then(|| Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a participant. Always trimmed and non-empty.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantName(String);

impl ParticipantName {
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        (!name.is_empty()).then(|| Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ParticipantName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub quantity: Decimal,
    pub total_price: Decimal,
}

impl Item {
    /// Price of a single unit; zero when the item has no quantity.
    ///
    /// Also zero when the ratio does not fit a `Decimal`; [`Catalog`](crate::Catalog)
    /// never stores such an item.
    pub fn unit_price(&self) -> Decimal {
        if self.quantity.is_zero() {
            Decimal::ZERO
        } else {
            self.total_price
                .checked_div(self.quantity)
                .unwrap_or_default()
        }
    }

    pub(crate) fn has_representable_unit_price(&self) -> bool {
        self.quantity.is_zero() || self.total_price.checked_div(self.quantity).is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Participant {
    pub contact: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpsertKind {
    Added,
    Updated,
}

/// Largest quantity, price, share or tax accepted (10^15).
///
/// Keeps every subtotal, sum and tax product far below `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Accepts `value` when `0 <= value <= MAX_AMOUNT` (negative zero counts as zero).
pub fn ensure_amount(field: NumericField, value: Decimal) -> Result<Decimal, ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::Negative { field, value });
    }
    if value > MAX_AMOUNT {
        return Err(ValidationError::TooLarge {
            field,
            value,
            max: MAX_AMOUNT,
        });
    }
    Ok(value)
}
