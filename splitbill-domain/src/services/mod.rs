pub mod settlement_calculator;
pub mod tax_distribution;

pub use settlement_calculator::{BreakdownLine, ParticipantTotal, SettlementCalculator};
pub use tax_distribution::{ParseRoundingModeError, RoundingMode, SettlementContext, distribute_tax};
