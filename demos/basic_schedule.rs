//! Basic amortization example.
//!
//! Prints the repayment schedule of a standard loan, a zero-interest loan
//! and the totals of a small random loan book.

use emi_schedule::amortization::schedule::AmortizationCalculator;
use emi_schedule::amortization::summary::ScheduleSummary;
use emi_schedule::core::loan::LoanQuery;
use emi_schedule::simulation::loan_book::{generate_random_queries, LoanBookConfig};
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  emi-schedule: Basic Schedule Example    ║");
    println!("╚══════════════════════════════════════════╝\n");

    // --- Scenario 1: Standard loan ---
    println!("━━━ Scenario 1: 100,000 at 10% over 12 months ━━━\n");

    let query = LoanQuery::new(dec!(100000), dec!(10), 12).expect("valid loan");
    let schedule = AmortizationCalculator::compute(&query).expect("schedule");
    println!("{}", schedule);
    println!("{}", ScheduleSummary::from_schedule(&schedule));

    // --- Scenario 2: Zero interest ---
    println!("━━━ Scenario 2: 1,000 at 0% over 3 months ━━━\n");

    let schedule =
        AmortizationCalculator::compute_schedule(dec!(1000), dec!(0), 3).expect("schedule");
    println!("{}", schedule);
    println!("{}", ScheduleSummary::from_schedule(&schedule));

    // --- Scenario 3: Invalid input ---
    println!("━━━ Scenario 3: Zero tenure ━━━\n");

    match AmortizationCalculator::compute_schedule(dec!(1000), dec!(10), 0) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("Rejected: {}\n", e),
    }

    // --- Scenario 4: Random loan book ---
    println!("━━━ Scenario 4: Random loan book (10 loans) ━━━\n");

    let book = generate_random_queries(&LoanBookConfig {
        loan_count: 10,
        ..Default::default()
    });
    for query in &book {
        let schedule = AmortizationCalculator::compute(query).expect("schedule");
        let summary = ScheduleSummary::from_schedule(&schedule);
        println!(
            "{:>14} @ {:>6}% x {:>3}m  EMI {:>12}  interest {:>14}",
            query.principal(),
            query.annual_rate_percent(),
            query.tenure_months(),
            summary.installment,
            summary.total_interest
        );
    }
}
