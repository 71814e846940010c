use emi_schedule::amortization::schedule::AmortizationCalculator;
use emi_schedule::amortization::summary::ScheduleSummary;
use emi_schedule::core::loan::LoanQuery;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Principal in cents, from 1.00 to 10,000,000.00.
fn arb_principal() -> impl Strategy<Value = Decimal> {
    (100i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Annual rate in basis points, 0% to 36%, with zero drawn often.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        1 => Just(Decimal::ZERO),
        4 => (1i64..3_600i64).prop_map(|bps| Decimal::new(bps, 2)),
    ]
}

/// Tenure from one month to forty years.
fn arb_tenure() -> impl Strategy<Value = u32> {
    1u32..=480
}

fn arb_query() -> impl Strategy<Value = LoanQuery> {
    (arb_principal(), arb_rate(), arb_tenure()).prop_map(|(principal, rate, tenure)| {
        LoanQuery::new(principal, rate, tenure).expect("strategies only produce valid inputs")
    })
}

proptest! {
    // ===================================================================
    // INVARIANT 1: One entry per month, numbered 1..=tenure.
    // ===================================================================
    #[test]
    fn one_entry_per_month(query in arb_query()) {
        let schedule = AmortizationCalculator::compute(&query).unwrap();
        prop_assert_eq!(schedule.len(), query.tenure_months() as usize);
        for (i, entry) in schedule.iter().enumerate() {
            prop_assert_eq!(entry.month, i as u32 + 1);
        }
    }

    // ===================================================================
    // INVARIANT 2: Components add up to the installment within a cent.
    //
    // Each field is rounded on its own, so the split may be off by at most
    // one cent, never more.
    // ===================================================================
    #[test]
    fn components_sum_to_installment(query in arb_query()) {
        let schedule = AmortizationCalculator::compute(&query).unwrap();
        for entry in &schedule {
            let diff = (entry.principal_component + entry.interest_component - entry.installment).abs();
            prop_assert!(
                diff <= dec!(0.01),
                "month {}: {} + {} vs {}",
                entry.month,
                entry.principal_component,
                entry.interest_component,
                entry.installment
            );
        }
    }

    // ===================================================================
    // INVARIANT 3: The schedule closes at exactly zero.
    // ===================================================================
    #[test]
    fn final_balance_is_zero(query in arb_query()) {
        let schedule = AmortizationCalculator::compute(&query).unwrap();
        prop_assert_eq!(schedule.last().unwrap().remaining_principal, Decimal::ZERO);
    }

    // ===================================================================
    // INVARIANT 4: The balance never goes up and never goes negative.
    // ===================================================================
    #[test]
    fn balance_non_increasing(query in arb_query()) {
        let schedule = AmortizationCalculator::compute(&query).unwrap();
        let mut previous = query.principal();
        for entry in &schedule {
            prop_assert!(entry.remaining_principal >= Decimal::ZERO);
            prop_assert!(
                entry.remaining_principal <= previous,
                "month {}: {} after {}",
                entry.month,
                entry.remaining_principal,
                previous
            );
            previous = entry.remaining_principal;
        }
    }

    // ===================================================================
    // INVARIANT 5: The installment is the same every month.
    //
    // A tiny loan over a long tenure can round its installment down to
    // 0.00, so only the unrounded installment is strictly positive.
    // ===================================================================
    #[test]
    fn installment_is_constant(query in arb_query()) {
        let schedule = AmortizationCalculator::compute(&query).unwrap();
        let emi = schedule.installment().unwrap();
        prop_assert!(emi >= Decimal::ZERO);
        prop_assert!(schedule.iter().all(|e| e.installment == emi));

        let unrounded = AmortizationCalculator::installment(
            query.principal(),
            query.monthly_rate(),
            query.tenure_months(),
        )
        .unwrap();
        prop_assert!(unrounded > Decimal::ZERO);
    }

    // ===================================================================
    // INVARIANT 6: Repaid principal matches the loan within rounding.
    //
    // Per-entry rounding is at most half a cent, so the total cannot drift
    // by more than half a cent per month.
    // ===================================================================
    #[test]
    fn principal_repaid_within_rounding(query in arb_query()) {
        let schedule = AmortizationCalculator::compute(&query).unwrap();
        let summary = ScheduleSummary::from_schedule(&schedule);
        let tolerance = dec!(0.005) * Decimal::from(query.tenure_months()) + dec!(0.01);
        prop_assert!(
            (summary.total_principal - query.principal()).abs() <= tolerance,
            "repaid {} of {}",
            summary.total_principal,
            query.principal()
        );
    }

    // ===================================================================
    // INVARIANT 7: Zero interest means no interest, ever.
    // ===================================================================
    #[test]
    fn zero_rate_charges_no_interest(principal in arb_principal(), tenure in arb_tenure()) {
        let schedule = AmortizationCalculator::compute_schedule(principal, Decimal::ZERO, tenure).unwrap();
        prop_assert!(schedule.iter().all(|e| e.interest_component.is_zero()));
        let summary = ScheduleSummary::from_schedule(&schedule);
        prop_assert_eq!(summary.total_interest, Decimal::ZERO);
    }

    // ===================================================================
    // INVARIANT 8: A higher rate never lowers the installment.
    // ===================================================================
    #[test]
    fn installment_monotone_in_rate(
        principal in arb_principal(),
        low in 0i64..1_800i64,
        step in 1i64..1_800i64,
        tenure in arb_tenure(),
    ) {
        let low_rate = Decimal::new(low, 2);
        let high_rate = Decimal::new(low + step, 2);
        let a = AmortizationCalculator::compute_schedule(principal, low_rate, tenure).unwrap();
        let b = AmortizationCalculator::compute_schedule(principal, high_rate, tenure).unwrap();
        prop_assert!(a.installment().unwrap() <= b.installment().unwrap());
    }

    // ===================================================================
    // INVARIANT 9: Invalid inputs never produce a schedule.
    // ===================================================================
    #[test]
    fn non_positive_principal_rejected(cents in -1_000_000i64..=0i64, tenure in arb_tenure()) {
        let result = AmortizationCalculator::compute_schedule(Decimal::new(cents, 2), dec!(5), tenure);
        prop_assert!(result.is_err());
    }

    #[test]
    fn negative_rate_rejected(bps in -10_000i64..0i64, tenure in arb_tenure()) {
        let result = AmortizationCalculator::compute_schedule(dec!(1000), Decimal::new(bps, 2), tenure);
        prop_assert!(result.is_err());
    }
}
