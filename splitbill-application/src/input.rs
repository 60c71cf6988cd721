use std::str::FromStr;

use rust_decimal::{Decimal, prelude::FromPrimitive};
use splitbill_domain::{NumericField, ValidationError};

/// Raw numeric input as it arrives from a form field or a caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericInput<'a> {
    Text(&'a str),
    Decimal(Decimal),
    Float(f64),
}

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(value: &'a str) -> Self {
        NumericInput::Text(value)
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    fn from(value: &'a String) -> Self {
        NumericInput::Text(value)
    }
}

impl From<Decimal> for NumericInput<'_> {
    fn from(value: Decimal) -> Self {
        NumericInput::Decimal(value)
    }
}

impl From<f64> for NumericInput<'_> {
    fn from(value: f64) -> Self {
        NumericInput::Float(value)
    }
}

impl From<i64> for NumericInput<'_> {
    fn from(value: i64) -> Self {
        NumericInput::Decimal(Decimal::from(value))
    }
}

impl NumericInput<'_> {
    /// Parses the input into a decimal. Malformed input is an error, never zero.
    pub fn parse(self, field: NumericField) -> Result<Decimal, ValidationError> {
        match self {
            NumericInput::Text(raw) => {
                let trimmed = raw.trim();
                Decimal::from_str(trimmed)
                    .or_else(|_| Decimal::from_scientific(trimmed))
                    .map_err(|_| ValidationError::InvalidNumber {
                        field,
                        input: raw.to_owned(),
                    })
            }
            NumericInput::Decimal(value) => Ok(value),
            NumericInput::Float(value) => {
                if !value.is_finite() {
                    return Err(ValidationError::NonFinite { field });
                }
                Decimal::from_f64(value).ok_or_else(|| ValidationError::InvalidNumber {
                    field,
                    input: value.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::integer("2", Decimal::from(2))]
    #[case::fraction(" 0.5 ", Decimal::new(5, 1))]
    #[case::negative("-1", Decimal::NEGATIVE_ONE)]
    #[case::scientific("1e3", Decimal::from(1000))]
    fn text_parses(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(
            NumericInput::from(raw).parse(NumericField::Quantity),
            Ok(expected)
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::word("two")]
    #[case::thousands("7,000")]
    fn malformed_text_is_rejected(#[case] raw: &str) {
        assert_eq!(
            NumericInput::from(raw).parse(NumericField::TotalPrice),
            Err(ValidationError::InvalidNumber {
                field: NumericField::TotalPrice,
                input: raw.to_owned(),
            })
        );
    }

    #[rstest]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn non_finite_float_is_rejected(#[case] value: f64) {
        assert_eq!(
            NumericInput::from(value).parse(NumericField::Share),
            Err(ValidationError::NonFinite {
                field: NumericField::Share
            })
        );
    }

    #[test]
    fn float_is_converted() {
        assert_eq!(
            NumericInput::from(0.5).parse(NumericField::Share),
            Ok(Decimal::new(5, 1))
        );
    }
}
