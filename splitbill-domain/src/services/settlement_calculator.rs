use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::{
    catalog::Catalog,
    ledger::Ledger,
    model::{ItemName, ParticipantName},
    roster::Roster,
    services::tax_distribution::{SettlementContext, distribute_tax},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticipantTotal {
    /// Item subtotal, already rounded to the context scale.
    pub subtotal: Decimal,
    pub tax_share: Decimal,
    pub total: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakdownLine {
    pub item: ItemName,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// Settlement calculation service
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Unrounded cost of everything assigned to `participant`.
    pub fn subtotal(&self, catalog: &Catalog, ledger: &Ledger, participant: &str) -> Decimal {
        ledger
            .positive_shares(participant)
            .map(|(item, quantity)| quantity * catalog.unit_price(item.as_str()))
            .sum()
    }

    /// Final amounts per participant, in roster order.
    ///
    /// Only participants holding at least one positive share are included.
    /// Subtotals are rounded once, before the tax is split proportionally to them.
    ///
    /// # Arguments
    /// * `tax_total` - Aggregate tax/service charge to distribute
    /// * `context` - Scale and rounding mode for money values
    pub fn all_totals(
        &self,
        catalog: &Catalog,
        roster: &Roster,
        ledger: &Ledger,
        tax_total: Decimal,
        context: SettlementContext,
    ) -> IndexMap<ParticipantName, ParticipantTotal> {
        let subtotals: Vec<(&ParticipantName, Decimal)> = roster
            .names()
            .filter(|name| ledger.has_positive_share(name.as_str()))
            .map(|name| {
                let subtotal = context.round(self.subtotal(catalog, ledger, name.as_str()));
                (name, subtotal)
            })
            .collect();

        let weights: Vec<Decimal> = subtotals.iter().map(|(_, subtotal)| *subtotal).collect();
        let tax_shares = distribute_tax(&weights, tax_total, context);

        subtotals
            .into_iter()
            .zip(tax_shares)
            .map(|((name, subtotal), tax_share)| {
                (
                    name.clone(),
                    ParticipantTotal {
                        subtotal,
                        tax_share,
                        total: subtotal + tax_share,
                    },
                )
            })
            .collect()
    }

    /// Itemized lines for `participant` in first-assignment order, rounded for display.
    pub fn breakdown(
        &self,
        catalog: &Catalog,
        ledger: &Ledger,
        participant: &str,
        context: SettlementContext,
    ) -> Vec<BreakdownLine> {
        ledger
            .positive_shares(participant)
            .map(|(item, quantity)| {
                let unit_price = catalog.unit_price(item.as_str());
                BreakdownLine {
                    item: item.clone(),
                    quantity: context.round(quantity),
                    unit_price: context.round(unit_price),
                    subtotal: context.round(quantity * unit_price),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    struct Bill {
        catalog: Catalog,
        roster: Roster,
        ledger: Ledger,
    }

    impl Bill {
        fn new(items: &[(&str, i64, i64)], people: &[&str]) -> Self {
            let mut catalog = Catalog::new();
            for &(name, quantity, price) in items {
                catalog
                    .upsert_item(name, Decimal::from(quantity), Decimal::from(price))
                    .expect("valid item");
            }
            let mut roster = Roster::new();
            let mut ledger = Ledger::new();
            for name in people {
                roster.upsert_participant(name, None);
                ledger.ensure_row(name);
            }
            Self {
                catalog,
                roster,
                ledger,
            }
        }

        fn assign(mut self, participant: &str, item: &str, quantity: Decimal) -> Self {
            self.ledger
                .set_share(&self.catalog, &self.roster, participant, item, quantity)
                .expect("valid share");
            self
        }

        fn totals(&self, tax: i64) -> IndexMap<ParticipantName, ParticipantTotal> {
            SettlementCalculator.all_totals(
                &self.catalog,
                &self.roster,
                &self.ledger,
                Decimal::from(tax),
                SettlementContext::cents_default(),
            )
        }
    }

    #[fixture]
    fn burger_and_fries() -> Bill {
        Bill::new(
            &[("Burger", 1, 10_000), ("Fries", 1, 5_000)],
            &["Ann", "Bo", "Cy"],
        )
        .assign("Ann", "Burger", Decimal::ONE)
        .assign("Bo", "Fries", Decimal::ONE)
    }

    #[rstest]
    fn tax_is_split_by_subtotal(burger_and_fries: Bill) {
        let totals = burger_and_fries.totals(1_500);

        assert_eq!(
            totals.get("Ann"),
            Some(&ParticipantTotal {
                subtotal: Decimal::from(10_000),
                tax_share: Decimal::from(1_000),
                total: Decimal::from(11_000),
            })
        );
        assert_eq!(
            totals.get("Bo"),
            Some(&ParticipantTotal {
                subtotal: Decimal::from(5_000),
                tax_share: Decimal::from(500),
                total: Decimal::from(5_500),
            })
        );
    }

    #[rstest]
    fn participants_without_shares_are_excluded(burger_and_fries: Bill) {
        let totals = burger_and_fries.totals(1_500);

        let names: Vec<&str> = totals.keys().map(ParticipantName::as_str).collect();
        assert_eq!(names, ["Ann", "Bo"]);
        assert!(!totals.contains_key("Cy"));
    }

    #[rstest]
    fn zero_tax_total_equals_subtotal(burger_and_fries: Bill) {
        for total in burger_and_fries.totals(0).values() {
            assert_eq!(total.total, total.subtotal);
            assert_eq!(total.tax_share, Decimal::ZERO);
        }
    }

    #[test]
    fn free_items_get_no_tax() {
        let bill = Bill::new(&[("Water", 2, 0)], &["Ann", "Bo"])
            .assign("Ann", "Water", Decimal::ONE)
            .assign("Bo", "Water", Decimal::ONE);

        let totals = bill.totals(300);

        assert_eq!(totals.len(), 2);
        assert!(totals.values().all(|t| t.total.is_zero()));
    }

    #[test]
    fn subtotal_is_rounded_before_tax() {
        let bill = Bill::new(&[("Cake", 3, 10)], &["Ann", "Bo"])
            .assign("Ann", "Cake", Decimal::ONE)
            .assign("Bo", "Cake", Decimal::from(2));

        let totals = bill.totals(1);

        let ann = totals.get("Ann").expect("Ann included");
        let bo = totals.get("Bo").expect("Bo included");
        assert_eq!(ann.subtotal, Decimal::new(333, 2));
        assert_eq!(bo.subtotal, Decimal::new(667, 2));
        assert_eq!(ann.tax_share + bo.tax_share, Decimal::ONE);
        assert_eq!(ann.total + bo.total, Decimal::from(11));
    }

    #[test]
    fn empty_bill_has_no_totals() {
        let bill = Bill::new(&[], &["Ann"]);
        assert!(bill.totals(100).is_empty());
    }

    #[rstest]
    fn breakdown_lists_positive_shares_in_assignment_order() {
        let bill = Bill::new(&[("Tea", 4, 10), ("Pie", 3, 10)], &["Ann"])
            .assign("Ann", "Pie", Decimal::ONE)
            .assign("Ann", "Tea", Decimal::new(15, 1))
            .assign("Ann", "Pie", Decimal::ZERO);

        let lines = SettlementCalculator.breakdown(
            &bill.catalog,
            &bill.ledger,
            "Ann",
            SettlementContext::cents_default(),
        );

        assert_eq!(
            lines,
            vec![BreakdownLine {
                item: ItemName::new("Tea").expect("name"),
                quantity: Decimal::new(15, 1),
                unit_price: Decimal::new(25, 1),
                subtotal: Decimal::new(375, 2),
            }]
        );
    }
}
