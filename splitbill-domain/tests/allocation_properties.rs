use proptest::prelude::*;
use rust_decimal::Decimal;
use splitbill_domain::{
    ALLOCATION_EPSILON, Catalog, Ledger, Roster, SettlementCalculator, SettlementContext,
};

const ITEMS: [&str; 3] = ["Pizza", "Cola", "Salad"];
const PEOPLE: [&str; 4] = ["Ann", "Bo", "Cy", "Di"];

#[derive(Debug, Clone)]
enum Op {
    Set { person: usize, item: usize, halves: i64 },
    Add { person: usize, item: usize, halves: i64 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..PEOPLE.len(), 0usize..ITEMS.len(), -2i64..=12)
            .prop_map(|(person, item, halves)| Op::Set { person, item, halves }),
        (0usize..PEOPLE.len(), 0usize..ITEMS.len(), -2i64..=12)
            .prop_map(|(person, item, halves)| Op::Add { person, item, halves }),
    ]
}

fn build(quantities: &[u32], prices: &[u32]) -> (Catalog, Roster, Ledger) {
    let mut catalog = Catalog::new();
    for (idx, name) in ITEMS.iter().enumerate() {
        catalog
            .upsert_item(
                name,
                Decimal::from(quantities[idx]),
                Decimal::new(i64::from(prices[idx]), 2),
            )
            .expect("valid item");
    }
    let mut roster = Roster::new();
    let mut ledger = Ledger::new();
    for name in PEOPLE {
        roster.upsert_participant(name, None);
        ledger.ensure_row(name);
    }
    (catalog, roster, ledger)
}

fn apply(ops: &[Op], catalog: &Catalog, roster: &Roster, ledger: &mut Ledger) {
    for op in ops {
        let _ = match *op {
            Op::Set { person, item, halves } => ledger.set_share(
                catalog,
                roster,
                PEOPLE[person],
                ITEMS[item],
                Decimal::new(halves * 5, 1),
            ),
            Op::Add { person, item, halves } => ledger.add_share(
                catalog,
                roster,
                PEOPLE[person],
                ITEMS[item],
                Decimal::new(halves * 5, 1),
            ),
        };
    }
}

proptest! {
    #[test]
    fn assigned_quantity_never_exceeds_item_quantity(
        quantities in prop::collection::vec(0u32..=5, ITEMS.len()),
        prices in prop::collection::vec(0u32..=1_000_000, ITEMS.len()),
        ops in prop::collection::vec(op_strategy(), 0..=40),
    ) {
        let (catalog, roster, mut ledger) = build(&quantities, &prices);

        for op in &ops {
            apply(std::slice::from_ref(op), &catalog, &roster, &mut ledger);
            prop_assert!(ledger.check_conservation(&catalog).is_ok());
        }

        for (name, item) in catalog.iter() {
            let assigned = ledger.assigned_total(name.as_str());
            prop_assert!(assigned <= item.quantity + ALLOCATION_EPSILON);
            prop_assert!(ledger.remaining_quantity(&catalog, name.as_str()) >= Decimal::ZERO);
        }
    }

    #[test]
    fn totals_add_up_to_subtotals_plus_tax(
        quantities in prop::collection::vec(1u32..=5, ITEMS.len()),
        prices in prop::collection::vec(0u32..=1_000_000, ITEMS.len()),
        ops in prop::collection::vec(op_strategy(), 0..=40),
        tax_cents in 0u32..=500_000,
    ) {
        let (catalog, roster, mut ledger) = build(&quantities, &prices);
        apply(&ops, &catalog, &roster, &mut ledger);

        let tax = Decimal::new(i64::from(tax_cents), 2);
        let totals = SettlementCalculator.all_totals(
            &catalog,
            &roster,
            &ledger,
            tax,
            SettlementContext::cents_default(),
        );

        let subtotal_sum: Decimal = totals.values().map(|t| t.subtotal).sum();
        let total_sum: Decimal = totals.values().map(|t| t.total).sum();
        let tolerance = Decimal::new(1, 2) * Decimal::from(totals.len());
        if subtotal_sum > Decimal::ZERO {
            prop_assert!((total_sum - (subtotal_sum + tax)).abs() <= tolerance);
        } else {
            prop_assert_eq!(total_sum, subtotal_sum);
        }

        for (name, total) in &totals {
            prop_assert!(ledger.has_positive_share(name.as_str()));
            prop_assert!(total.tax_share >= Decimal::ZERO);
        }
    }

    #[test]
    fn zero_tax_totals_equal_rounded_subtotals(
        quantities in prop::collection::vec(1u32..=5, ITEMS.len()),
        prices in prop::collection::vec(0u32..=1_000_000, ITEMS.len()),
        ops in prop::collection::vec(op_strategy(), 0..=40),
    ) {
        let (catalog, roster, mut ledger) = build(&quantities, &prices);
        apply(&ops, &catalog, &roster, &mut ledger);

        let context = SettlementContext::cents_default();
        let totals =
            SettlementCalculator.all_totals(&catalog, &roster, &ledger, Decimal::ZERO, context);
        for (name, total) in &totals {
            let subtotal = SettlementCalculator.subtotal(&catalog, &ledger, name.as_str());
            let expected = context.round(subtotal);
            prop_assert_eq!(total.total, expected);
        }
    }

    #[test]
    fn repeated_upsert_is_idempotent(
        quantity in 0u32..=10,
        price in 0u32..=1_000_000,
    ) {
        let (mut catalog, _, ledger) = build(&[1, 1, 1], &[0, 0, 0]);
        let quantity = Decimal::from(quantity);
        let price = Decimal::new(i64::from(price), 2);

        catalog.upsert_item("Soup", quantity, price).expect("valid item");
        let observe = |catalog: &Catalog| {
            (
                catalog.get("Soup").copied(),
                catalog.remaining_quantity("Soup", &ledger),
                catalog.len(),
            )
        };
        let first = observe(&catalog);
        catalog.upsert_item("Soup", quantity, price).expect("valid item");
        let second = observe(&catalog);

        prop_assert_eq!(first, second);
    }
}
