use indexmap::IndexMap;
use rust_decimal::Decimal;
use splitbill_domain::{
    BillError, BreakdownLine, Catalog, ConservationViolation, ItemName, Ledger, NumericField,
    ParticipantName, ParticipantTotal, Roster, SettlementCalculator, SettlementContext, UpsertKind,
    ValidationError, model::ensure_amount,
};

use crate::{
    input::NumericInput,
    model::{Initiator, PaymentAccount, RestaurantInfo},
};

/// One bill being split: everything the organizer has entered so far.
///
/// All mutations validate fully before touching state. Derived values
/// (totals, breakdowns) are recomputed on every call.
#[derive(Clone, Debug, Default)]
pub struct BillSession {
    initiator: Initiator,
    restaurant: RestaurantInfo,
    catalog: Catalog,
    roster: Roster,
    ledger: Ledger,
    tax_total: Decimal,
    context: SettlementContext,
}

impl BillSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: SettlementContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }

    pub fn initiator(&self) -> &Initiator {
        &self.initiator
    }

    pub fn restaurant(&self) -> &RestaurantInfo {
        &self.restaurant
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn tax_total(&self) -> Decimal {
        self.tax_total
    }

    pub fn context(&self) -> SettlementContext {
        self.context
    }

    pub fn set_initiator(&mut self, name: &str, email: &str) {
        self.initiator.name = name.trim().to_owned();
        self.initiator.email = email.trim().to_owned();
    }

    /// Appends an account; ignored unless both label and detail are present.
    pub fn add_payment_account(&mut self, label: &str, detail: &str) -> bool {
        let (label, detail) = (label.trim(), detail.trim());
        if label.is_empty() || detail.is_empty() {
            return false;
        }
        self.initiator.accounts.push(PaymentAccount {
            label: label.to_owned(),
            detail: detail.to_owned(),
        });
        true
    }

    pub fn set_restaurant(&mut self, name: &str, address: &str, phone: &str) {
        self.restaurant = RestaurantInfo {
            name: name.trim().to_owned(),
            address: address.trim().to_owned(),
            phone: phone.trim().to_owned(),
        };
    }

    /// Adds an item or overwrites an existing one.
    ///
    /// The new quantity may not drop below what is already assigned.
    pub fn upsert_item<'a>(
        &mut self,
        name: &str,
        quantity: impl Into<NumericInput<'a>>,
        total_price: impl Into<NumericInput<'a>>,
    ) -> Result<UpsertKind, BillError> {
        let Some(item) = ItemName::new(name) else {
            return Err(ValidationError::EmptyItemName.into());
        };
        let quantity = quantity.into().parse(NumericField::Quantity)?;
        let total_price = total_price.into().parse(NumericField::TotalPrice)?;

        let assigned = self.ledger.assigned_total(item.as_str());
        if quantity < assigned {
            tracing::warn!(
                item = %item,
                quantity = %quantity,
                assigned = %assigned,
                "Item update rejected: quantity below assigned total"
            );
            return Err(ValidationError::QuantityBelowAssigned { item, assigned }.into());
        }

        let kind = self
            .catalog
            .upsert_item(item.as_str(), quantity, total_price)?;
        tracing::debug!(
            item = %item,
            quantity = %quantity,
            total_price = %total_price,
            kind = ?kind,
            "Item upserted"
        );
        Ok(kind)
    }

    /// Adds or updates a participant and makes sure they have a ledger row.
    pub fn upsert_participant(&mut self, name: &str, contact: Option<&str>) -> Option<UpsertKind> {
        let kind = self.roster.upsert_participant(name, contact)?;
        self.ledger.ensure_row(name);
        tracing::debug!(participant = name.trim(), kind = ?kind, "Participant upserted");
        Some(kind)
    }

    pub fn set_share<'a>(
        &mut self,
        participant: &str,
        item: &str,
        quantity: impl Into<NumericInput<'a>>,
    ) -> Result<(), BillError> {
        Ledger::resolve(&self.catalog, &self.roster, participant, item)?;
        let quantity = quantity.into().parse(NumericField::Share)?;
        self.ledger
            .set_share(&self.catalog, &self.roster, participant, item, quantity)
    }

    pub fn add_share<'a>(
        &mut self,
        participant: &str,
        item: &str,
        delta: impl Into<NumericInput<'a>>,
    ) -> Result<(), BillError> {
        Ledger::resolve(&self.catalog, &self.roster, participant, item)?;
        let delta = delta.into().parse(NumericField::Share)?;
        self.ledger
            .add_share(&self.catalog, &self.roster, participant, item, delta)
    }

    pub fn set_tax_total<'a>(
        &mut self,
        amount: impl Into<NumericInput<'a>>,
    ) -> Result<(), ValidationError> {
        let amount = amount.into().parse(NumericField::TaxTotal)?;
        self.tax_total = ensure_amount(NumericField::TaxTotal, amount)?;
        Ok(())
    }

    /// Drops every item, participant, share and account. The rounding context is kept.
    pub fn reset(&mut self) {
        *self = Self::with_context(self.context);
        tracing::info!("Bill session reset");
    }

    pub fn unit_price(&self, item: &str) -> Decimal {
        self.catalog.unit_price(item)
    }

    pub fn remaining_quantity(&self, item: &str) -> Decimal {
        self.ledger.remaining_quantity(&self.catalog, item)
    }

    pub fn share_of(&self, participant: &str, item: &str) -> Decimal {
        self.ledger.share_of(participant, item)
    }

    pub fn subtotal(&self, participant: &str) -> Decimal {
        SettlementCalculator.subtotal(&self.catalog, &self.ledger, participant)
    }

    /// Totals using the session's tax amount.
    pub fn all_totals(&self) -> IndexMap<ParticipantName, ParticipantTotal> {
        self.totals_for_tax(self.tax_total)
    }

    pub fn totals_for_tax(
        &self,
        tax_total: Decimal,
    ) -> IndexMap<ParticipantName, ParticipantTotal> {
        SettlementCalculator.all_totals(
            &self.catalog,
            &self.roster,
            &self.ledger,
            tax_total,
            self.context,
        )
    }

    pub fn breakdown(&self, participant: &str) -> Vec<BreakdownLine> {
        SettlementCalculator.breakdown(&self.catalog, &self.ledger, participant, self.context)
    }

    pub fn check_conservation(&self) -> Result<(), ConservationViolation> {
        self.ledger.check_conservation(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use splitbill_domain::NotFoundError;

    #[fixture]
    fn session() -> BillSession {
        let mut session = BillSession::new();
        session.upsert_item("Pizza", "2", "30000").expect("valid item");
        session.upsert_participant("A", None);
        session.upsert_participant("B", Some("b@example.com"));
        session
    }

    #[rstest]
    fn existence_is_checked_before_parsing(mut session: BillSession) {
        let err = session
            .set_share("Z", "Pizza", "not a number")
            .expect_err("unknown participant");
        assert_eq!(err, BillError::NotFound(NotFoundError::Participant("Z".to_owned())));

        let err = session
            .set_share("A", "Pizza", "not a number")
            .expect_err("malformed quantity");
        assert_eq!(
            err,
            BillError::Validation(ValidationError::InvalidNumber {
                field: NumericField::Share,
                input: "not a number".to_owned(),
            })
        );
    }

    #[rstest]
    fn item_name_is_checked_before_numbers(mut session: BillSession) {
        let err = session.upsert_item("  ", "x", "y").expect_err("empty name");
        assert_eq!(err, BillError::Validation(ValidationError::EmptyItemName));
    }

    #[rstest]
    fn item_cannot_shrink_below_assigned(mut session: BillSession) {
        session.set_share("A", "Pizza", "1.5").expect("fits");

        let err = session.upsert_item("Pizza", "1", "15000").expect_err("shrinks");
        assert!(matches!(
            err,
            BillError::Validation(ValidationError::QuantityBelowAssigned { .. })
        ));

        session.upsert_item("Pizza", "1.5", "22500").expect("exactly assigned");
        assert_eq!(session.remaining_quantity("Pizza"), Decimal::ZERO);
        assert!(session.check_conservation().is_ok());
    }

    #[rstest]
    #[case::negative("-5")]
    #[case::text("five")]
    fn invalid_tax_keeps_previous_value(mut session: BillSession, #[case] raw: &str) {
        session.set_tax_total("100").expect("valid tax");
        assert!(session.set_tax_total(raw).is_err());
        assert_eq!(session.tax_total(), Decimal::from(100));
    }

    #[test]
    fn reset_clears_everything_but_context() {
        let context = SettlementContext::cents_default()
            .with_rounding_mode(splitbill_domain::RoundingMode::HalfEven);
        let mut session = BillSession::with_context(context);
        session.upsert_item("Tea", "2", "10").expect("valid item");
        session.upsert_participant("Ann", None);
        session.set_share("Ann", "Tea", "1").expect("fits");
        session.set_initiator("Ann", "ann@example.com");
        session.add_payment_account("BCA", "123");
        session.set_tax_total(10.0).expect("valid tax");

        session.reset();

        assert!(session.catalog().is_empty());
        assert!(session.roster().is_empty());
        assert!(session.all_totals().is_empty());
        assert!(session.initiator().accounts.is_empty());
        assert_eq!(session.tax_total(), Decimal::ZERO);
        assert_eq!(session.context(), context);
    }

    #[rstest]
    #[case::missing_label("", "123")]
    #[case::missing_detail("BCA", "  ")]
    fn incomplete_accounts_are_ignored(
        mut session: BillSession,
        #[case] label: &str,
        #[case] detail: &str,
    ) {
        assert!(!session.add_payment_account(label, detail));
        assert!(session.initiator().accounts.is_empty());
    }
}
