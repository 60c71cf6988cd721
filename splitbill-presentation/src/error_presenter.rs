use splitbill_application::SnapshotError;
use splitbill_domain::{BillError, NotFoundError, NumericField, ValidationError};
use splitbill_i18n as i18n;

use crate::number_format::format_number;

fn field_label(field: NumericField) -> &'static str {
    match field {
        NumericField::Quantity => i18n::FIELD_QUANTITY,
        NumericField::TotalPrice => i18n::FIELD_TOTAL_PRICE,
        NumericField::Share => i18n::FIELD_SHARE,
        NumericField::TaxTotal => i18n::FIELD_TAX_TOTAL,
    }
}

pub fn format_validation_error(error: &ValidationError) -> String {
    match error {
        ValidationError::EmptyItemName => i18n::ITEM_NAME_REQUIRED.to_string(),
        ValidationError::InvalidNumber { field, .. } => i18n::must_be_number(field_label(*field)),
        ValidationError::NonFinite { field } => i18n::must_be_finite(field_label(*field)),
        ValidationError::Negative { field, .. } => i18n::must_not_be_negative(field_label(*field)),
        ValidationError::TooLarge { field, max, .. } => {
            i18n::must_not_exceed(field_label(*field), format_number(*max))
        }
        ValidationError::UnitPriceOutOfRange { item, .. } => i18n::unit_price_out_of_range(item),
        ValidationError::NonPositiveDelta { .. } => i18n::QTY_MUST_BE_POSITIVE.to_string(),
        ValidationError::QuantityBelowAssigned { item, assigned } => {
            i18n::quantity_below_assigned(item, format_number(*assigned))
        }
    }
}

pub fn format_bill_error(error: &BillError) -> String {
    match error {
        BillError::Validation(error) => format_validation_error(error),
        BillError::NotFound(NotFoundError::Item(name)) => i18n::item_not_found(name),
        BillError::NotFound(NotFoundError::Participant(name)) => {
            i18n::participant_not_found(name)
        }
        BillError::Capacity { item, available } => {
            i18n::not_enough_left(item, format_number(*available))
        }
    }
}

/// Names the offending entry, then the localized cause.
pub fn format_snapshot_error(error: &SnapshotError) -> String {
    match error {
        SnapshotError::Item { name, source } => format!("{name}: {}", format_bill_error(source)),
        SnapshotError::Share {
            participant,
            source,
            ..
        } => format!("{participant}: {}", format_bill_error(source)),
        SnapshotError::Tax(source) => format_validation_error(source),
    }
}
