use crate::amortization::schedule::Schedule;
use rust_decimal::Decimal;
use serde::Serialize;

/// Totals over a repayment schedule.
///
/// Sums are taken over the emitted, already rounded entries, so they match
/// what a reader adding up the schedule would get.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    /// Number of installments.
    pub tenure_months: usize,
    /// The fixed monthly installment.
    #[serde(rename = "emi", with = "rust_decimal::serde::float")]
    pub installment: Decimal,
    /// Sum of all principal components.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_principal: Decimal,
    /// Sum of all interest components.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_interest: Decimal,
    /// Principal plus interest.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

impl ScheduleSummary {
    /// Compute totals from a schedule.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let (total_principal, total_interest) = schedule.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(principal, interest), entry| {
                (
                    principal + entry.principal_component,
                    interest + entry.interest_component,
                )
            },
        );

        ScheduleSummary {
            tenure_months: schedule.len(),
            installment: schedule.installment().unwrap_or(Decimal::ZERO),
            total_principal,
            total_interest,
            total_amount: total_principal + total_interest,
        }
    }

    /// Interest paid per unit of principal repaid.
    pub fn interest_ratio(&self) -> f64 {
        if self.total_principal == Decimal::ZERO {
            return 0.0;
        }
        let ratio = self.total_interest / self.total_principal;
        ratio.to_string().parse::<f64>().unwrap_or(0.0)
    }
}

impl std::fmt::Display for ScheduleSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Schedule Summary ===")?;
        writeln!(f, "Installments:    {}", self.tenure_months)?;
        writeln!(f, "EMI:             {}", self.installment)?;
        writeln!(f, "Total Principal: {}", self.total_principal)?;
        writeln!(f, "Total Interest:  {}", self.total_interest)?;
        writeln!(f, "Total Amount:    {}", self.total_amount)?;
        writeln!(f, "Interest Ratio:  {:.1}%", self.interest_ratio() * 100.0)?;
        Ok(())
    }
}
