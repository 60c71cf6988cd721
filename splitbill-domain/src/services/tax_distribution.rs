//! Proportional tax distribution with zero-sum rounding.
//!
//! Each weight receives `weight / Σ weights * tax` quantized to the atomic unit
//! of the [`SettlementContext`]. The residual left by rounding is handed out one
//! atomic unit at a time so that the shares add up to the rounded tax exactly:
//! 1. Residual > 0: give a unit to the shares that lost most by rounding
//! 2. Residual < 0: take a unit from the shares that gained most by rounding
//! 3. Exact ties go to the earlier position
//!
//! No share moves further than one atomic unit from its exact value.

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use thiserror::Error;

/// Rounding mode for money quantization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round half away from zero (e.g., 0.125 -> 0.13).
    #[default]
    HalfUp,
    /// Round half to nearest even number (banker's rounding).
    HalfEven,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::HalfUp => f.write_str("half-up"),
            RoundingMode::HalfEven => f.write_str("half-even"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown rounding mode '{0}' (expected 'half-up' or 'half-even')")]
pub struct ParseRoundingModeError(String);

impl FromStr for RoundingMode {
    type Err = ParseRoundingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-up" | "half_up" | "halfup" => Ok(RoundingMode::HalfUp),
            "half-even" | "half_even" | "halfeven" | "bankers" => Ok(RoundingMode::HalfEven),
            _ => Err(ParseRoundingModeError(s.to_owned())),
        }
    }
}

/// Context for money quantization.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use splitbill_domain::services::{RoundingMode, SettlementContext};
///
/// let ctx = SettlementContext::cents_default();
/// assert_eq!(ctx.rounding_mode, RoundingMode::HalfUp);
/// assert_eq!(ctx.round(Decimal::new(12345, 3)), Decimal::new(1235, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementContext {
    /// Number of decimal places of the atomic unit.
    pub scale: u32,
    pub rounding_mode: RoundingMode,
}

impl SettlementContext {
    /// Two decimal places, half-up rounding.
    pub fn cents_default() -> Self {
        Self {
            scale: 2,
            rounding_mode: RoundingMode::HalfUp,
        }
    }

    pub fn with_rounding_mode(self, rounding_mode: RoundingMode) -> Self {
        Self {
            rounding_mode,
            ..self
        }
    }

    pub fn round(self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.scale, self.rounding_mode.strategy())
    }

    pub fn atomic_unit(self) -> Decimal {
        Decimal::new(1, self.scale)
    }
}

impl Default for SettlementContext {
    fn default() -> Self {
        Self::cents_default()
    }
}

/// Splits `tax_total` proportionally to `weights`.
///
/// Returns one share per weight. When the weights sum to zero (or less) every
/// share is zero; otherwise the shares sum to `context.round(tax_total)`.
pub fn distribute_tax(
    weights: &[Decimal],
    tax_total: Decimal,
    context: SettlementContext,
) -> Vec<Decimal> {
    let total_weight: Decimal = weights.iter().sum();
    if total_weight <= Decimal::ZERO {
        return vec![Decimal::ZERO; weights.len()];
    }

    let tax = context.round(tax_total);
    let exact: Vec<Decimal> = weights
        .iter()
        .map(|weight| weight / total_weight * tax)
        .collect();
    let mut shares: Vec<Decimal> = exact.iter().map(|share| context.round(*share)).collect();

    let unit = context.atomic_unit();
    let residual = tax - shares.iter().sum::<Decimal>();
    let steps = (residual.abs() / unit).round().to_usize().unwrap_or(0);
    if steps == 0 {
        return shares;
    }

    let mut candidates: Vec<usize> = (0..weights.len())
        .filter(|&idx| weights[idx] > Decimal::ZERO)
        .collect();
    let diff = |idx: usize| shares[idx] - exact[idx];
    if residual.is_sign_positive() {
        candidates.sort_by(|&a, &b| diff(a).cmp(&diff(b)).then(a.cmp(&b)));
    } else {
        candidates.sort_by(|&a, &b| diff(b).cmp(&diff(a)).then(a.cmp(&b)));
    }

    if steps > candidates.len() {
        tracing::warn!(
            steps,
            candidate_count = candidates.len(),
            residual = %residual,
            "Tax residual exceeds candidate count; distributing what fits"
        );
    }

    let adjustment = if residual.is_sign_positive() { unit } else { -unit };
    for idx in candidates.into_iter().take(steps) {
        shares[idx] += adjustment;
    }

    tracing::debug!(
        tax = %tax,
        residual = %residual,
        steps,
        rounding_mode = %context.rounding_mode,
        "Tax residual distributed"
    );
    shares
}
