//! Random loan books for benchmarking and stress runs.
//!
//! Generates batches of valid loan queries spread over realistic principal,
//! rate and tenure ranges.

use crate::core::loan::{LoanQuery, MAX_TENURE_MONTHS};
use rand::Rng;
use rust_decimal::Decimal;

/// Configuration for generating a random loan book.
#[derive(Debug, Clone)]
pub struct LoanBookConfig {
    /// Number of loans to generate.
    pub loan_count: usize,
    /// Minimum principal (inclusive).
    pub min_principal: Decimal,
    /// Maximum principal (inclusive).
    pub max_principal: Decimal,
    /// Maximum annual rate in percent; rates are drawn from `[0, max)`.
    pub max_annual_rate: Decimal,
    /// Share of loans issued at 0% interest, between 0 and 1.
    pub zero_rate_share: f64,
    /// Shortest tenure in months.
    pub min_tenure_months: u32,
    /// Longest tenure in months.
    pub max_tenure_months: u32,
}

impl Default for LoanBookConfig {
    fn default() -> Self {
        Self {
            loan_count: 100,
            min_principal: Decimal::from(1_000),
            max_principal: Decimal::from(5_000_000),
            max_annual_rate: Decimal::from(24),
            zero_rate_share: 0.05,
            min_tenure_months: 1,
            max_tenure_months: 360,
        }
    }
}

/// Generate a random loan book.
///
/// Every returned query is valid; draws that fail validation (for example a
/// principal that rounds to zero) are skipped, so the book can be slightly
/// shorter than `loan_count`.
pub fn generate_random_queries(config: &LoanBookConfig) -> Vec<LoanQuery> {
    let mut rng = rand::thread_rng();

    let min_principal = config
        .min_principal
        .to_string()
        .parse::<f64>()
        .unwrap_or(1_000.0);
    let max_principal = config
        .max_principal
        .to_string()
        .parse::<f64>()
        .unwrap_or(5_000_000.0)
        .max(min_principal);
    let max_rate = config
        .max_annual_rate
        .to_string()
        .parse::<f64>()
        .unwrap_or(24.0);
    let zero_rate_share = if config.zero_rate_share.is_finite() {
        config.zero_rate_share.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let min_tenure = config.min_tenure_months.clamp(1, MAX_TENURE_MONTHS);
    let max_tenure = config.max_tenure_months.clamp(min_tenure, MAX_TENURE_MONTHS);

    let mut book = Vec::with_capacity(config.loan_count);
    for _ in 0..config.loan_count {
        let principal = Decimal::from_f64_retain(rng.gen_range(min_principal..=max_principal))
            .unwrap_or(Decimal::from(1_000))
            .round_dp(2);

        let annual_rate = if rng.gen_bool(zero_rate_share) || max_rate <= 0.0 {
            Decimal::ZERO
        } else {
            Decimal::from_f64_retain(rng.gen_range(0.0..max_rate))
                .unwrap_or(Decimal::ZERO)
                .round_dp(2)
        };

        let tenure = rng.gen_range(min_tenure..=max_tenure);

        if let Ok(query) = LoanQuery::new(principal, annual_rate, tenure) {
            book.push(query);
        }
    }

    book
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::schedule::AmortizationCalculator;

    #[test]
    fn test_random_book_generation() {
        let config = LoanBookConfig {
            loan_count: 50,
            ..Default::default()
        };

        let book = generate_random_queries(&config);
        assert!(!book.is_empty());
        assert!(book.len() <= config.loan_count);
        for query in &book {
            assert!(query.principal() >= config.min_principal);
            assert!(query.tenure_months() >= 1);
            assert!(query.tenure_months() <= config.max_tenure_months);
        }
    }

    #[test]
    fn test_all_zero_rate_book() {
        let config = LoanBookConfig {
            loan_count: 20,
            zero_rate_share: 1.0,
            ..Default::default()
        };

        let book = generate_random_queries(&config);
        assert!(book.iter().all(|q| q.annual_rate_percent().is_zero()));
    }

    #[test]
    fn test_out_of_range_config_is_capped() {
        let config = LoanBookConfig {
            loan_count: 10,
            min_tenure_months: 1500,
            max_tenure_months: 2000,
            zero_rate_share: f64::NAN,
            ..Default::default()
        };

        let book = generate_random_queries(&config);
        assert_eq!(book.len(), 10);
        assert!(book
            .iter()
            .all(|q| q.tenure_months() == MAX_TENURE_MONTHS));
    }

    #[test]
    fn test_inverted_tenure_range() {
        let config = LoanBookConfig {
            loan_count: 10,
            min_tenure_months: 240,
            max_tenure_months: 12,
            ..Default::default()
        };

        let book = generate_random_queries(&config);
        assert!(book.iter().all(|q| q.tenure_months() == 240));
    }

    #[test]
    fn test_random_book_amortizes() {
        let config = LoanBookConfig {
            loan_count: 25,
            ..Default::default()
        };

        for query in generate_random_queries(&config) {
            let schedule = AmortizationCalculator::compute(&query).unwrap();
            assert_eq!(schedule.len(), query.tenure_months() as usize);
            assert_eq!(schedule.last().unwrap().remaining_principal, Decimal::ZERO);
        }
    }
}
