use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::model::ItemName;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericField {
    Quantity,
    TotalPrice,
    Share,
    TaxTotal,
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NumericField::Quantity => "quantity",
            NumericField::TotalPrice => "total price",
            NumericField::Share => "share",
            NumericField::TaxTotal => "tax total",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("item name is required")]
    EmptyItemName,
    #[error("{field} must be a number (got '{input}')")]
    InvalidNumber { field: NumericField, input: String },
    #[error("{field} must be a finite number")]
    NonFinite { field: NumericField },
    #[error("{field} must be >= 0 (got {value})")]
    Negative { field: NumericField, value: Decimal },
    #[error("{field} must be <= {max} (got {value})")]
    TooLarge {
        field: NumericField,
        value: Decimal,
        max: Decimal,
    },
    #[error("unit price of '{item}' is out of range: quantity {quantity} is too small")]
    UnitPriceOutOfRange { item: ItemName, quantity: Decimal },
    #[error("quantity to add must be > 0 (got {value})")]
    NonPositiveDelta { value: Decimal },
    #[error("quantity of '{item}' cannot drop below the {assigned} already assigned")]
    QuantityBelowAssigned { item: ItemName, assigned: Decimal },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("item '{0}' not found")]
    Item(String),
    #[error("participant '{0}' not found")]
    Participant(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BillError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error("not enough '{item}' left (available: {available})")]
    Capacity { item: ItemName, available: Decimal },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("item '{item}' is over-allocated: {assigned} assigned of {quantity}")]
pub struct ConservationViolation {
    pub item: ItemName,
    pub assigned: Decimal,
    pub quantity: Decimal,
}
