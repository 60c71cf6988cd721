#![warn(clippy::uninlined_format_args)]

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod model;
pub mod roster;
pub mod services;

pub use catalog::Catalog;
pub use error::{
    BillError, ConservationViolation, NotFoundError, NumericField, ValidationError,
};
pub use ledger::Ledger;
pub use model::{
    ALLOCATION_EPSILON, Item, ItemName, MAX_AMOUNT, Participant, ParticipantName, UpsertKind,
};
pub use roster::Roster;
pub use services::{
    BreakdownLine, ParseRoundingModeError, ParticipantTotal, RoundingMode, SettlementCalculator,
    SettlementContext,
};
