use crate::core::loan::{LoanError, LoanQuery};
use crate::core::rounding::{clamp_residual, round_to_cents};
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;

/// Largest accepted `P * (1+r)^n`, 10^23. Past this, decimal rounding in the
/// balance recurrence can outgrow the one-cent clamp.
pub const MAX_COMPOUNDED_PRINCIPAL: Decimal =
    Decimal::from_parts(0xf680_0000, 0x02c7_e14a, 0x152d, false, 0);

/// One month of a repayment schedule.
///
/// All amounts are rounded to cents independently, so
/// `principal_component + interest_component` may differ from
/// `installment` by at most one cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// 1-based month number.
    pub month: u32,
    /// Part of the installment that repays principal.
    #[serde(with = "rust_decimal::serde::float")]
    pub principal_component: Decimal,
    /// Part of the installment that pays interest on the opening balance.
    #[serde(with = "rust_decimal::serde::float")]
    pub interest_component: Decimal,
    /// The equated monthly installment.
    #[serde(rename = "emi", with = "rust_decimal::serde::float")]
    pub installment: Decimal,
    /// Outstanding principal after this month's payment.
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining_principal: Decimal,
}

/// A complete repayment schedule, in chronological order.
///
/// Serializes as a bare array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fixed installment, or `None` for an empty schedule.
    pub fn installment(&self) -> Option<Decimal> {
        self.entries.first().map(|e| e.installment)
    }

    pub fn last(&self) -> Option<&ScheduleEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Reducing-balance amortization.
///
/// Stateless: every call builds its schedule from the inputs alone, so the
/// calculator can be shared freely across threads and requests.
pub struct AmortizationCalculator;

impl AmortizationCalculator {
    /// Validate the raw inputs and compute their schedule.
    ///
    /// # Errors
    ///
    /// [`LoanError::InvalidArgument`] when `principal <= 0`,
    /// `annual_rate_percent < 0`, `tenure_months == 0`, the tenure exceeds
    /// [`MAX_TENURE_MONTHS`](crate::core::loan::MAX_TENURE_MONTHS), the
    /// principal exceeds [`MAX_PRINCIPAL`](crate::core::loan::MAX_PRINCIPAL), or
    /// `P * (1+r)^n` exceeds [`MAX_COMPOUNDED_PRINCIPAL`].
    ///
    /// # Examples
    ///
    /// ```
    /// use emi_schedule::amortization::schedule::AmortizationCalculator;
    /// use rust_decimal_macros::dec;
    ///
    /// let schedule = AmortizationCalculator::compute_schedule(dec!(1200), dec!(0), 12).unwrap();
    /// assert_eq!(schedule.len(), 12);
    /// assert_eq!(schedule.installment(), Some(dec!(100.00)));
    /// ```
    pub fn compute_schedule(
        principal: Decimal,
        annual_rate_percent: Decimal,
        tenure_months: u32,
    ) -> Result<Schedule, LoanError> {
        let query = LoanQuery::new(principal, annual_rate_percent, tenure_months)?;
        Self::compute(&query)
    }

    /// Compute the schedule for an already validated query.
    ///
    /// # Algorithm
    ///
    /// 1. Monthly rate `r = annual / 1200`.
    /// 2. Installment `P·r·(1+r)^n / ((1+r)^n − 1)`, or `P / n` when `r = 0`
    ///    (see [`AmortizationCalculator::installment`]).
    /// 3. Each month, in order: interest on the opening balance, principal
    ///    part is the remainder of the installment, balance reduced by it and
    ///    snapped to zero once under a cent.
    /// 4. Every field is rounded to cents on its own before the entry is
    ///    emitted. Rounding drift is not redistributed.
    pub fn compute(query: &LoanQuery) -> Result<Schedule, LoanError> {
        let rate = query.monthly_rate();
        let tenure = query.tenure_months();
        let installment = Self::installment(query.principal(), rate, tenure)?;

        debug!(
            "amortizing principal={} annual_rate={}% tenure={} -> installment={}",
            query.principal(),
            query.annual_rate_percent(),
            tenure,
            installment
        );

        let mut entries = Vec::with_capacity(tenure as usize);
        let mut remaining = query.principal();

        for month in 1..=tenure {
            let interest = remaining * rate;
            let principal_part = installment - interest;
            remaining = clamp_residual(remaining - principal_part);

            entries.push(ScheduleEntry {
                month,
                principal_component: round_to_cents(principal_part),
                interest_component: round_to_cents(interest),
                installment: round_to_cents(installment),
                remaining_principal: round_to_cents(remaining),
            });
        }

        Ok(Schedule { entries })
    }

    /// The unrounded fixed installment for `principal` at monthly `rate`
    /// over `tenure` months.
    ///
    /// Uses `(1+r)^n - 1 = r * sum((1+r)^j, j < n)`, which turns the annuity
    /// formula into `P * (1+r)^n / sum((1+r)^j)` and keeps full decimal
    /// precision for very small rates.
    pub fn installment(
        principal: Decimal,
        rate: Decimal,
        tenure: u32,
    ) -> Result<Decimal, LoanError> {
        if rate.is_zero() {
            return Ok(principal / Decimal::from(tenure));
        }

        let step = Decimal::ONE + rate;
        let limit = MAX_COMPOUNDED_PRINCIPAL
            .checked_div(principal.abs())
            .unwrap_or(MAX_COMPOUNDED_PRINCIPAL);
        let mut growth = Decimal::ONE;
        let mut accumulated = Decimal::ZERO;
        for _ in 0..tenure {
            accumulated += growth;
            growth = growth
                .checked_mul(step)
                .filter(|g| *g <= limit)
                .ok_or_else(|| {
                    LoanError::invalid(
                        "annualInterestRate",
                        format!(
                            "principal compounded over {} months exceeds {}",
                            tenure, MAX_COMPOUNDED_PRINCIPAL
                        ),
                    )
                })?;
        }

        principal
            .checked_mul(growth)
            .and_then(|v| v.checked_div(accumulated))
            .ok_or_else(|| {
                LoanError::invalid("principal", "installment exceeds the representable range")
            })
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:>5}  {:>16}  {:>16}  {:>16}  {:>18}",
            "Month", "Principal", "Interest", "EMI", "Remaining"
        )?;
        writeln!(f, "{}", "-".repeat(79))?;
        for entry in &self.entries {
            writeln!(
                f,
                "{:>5}  {:>16}  {:>16}  {:>16}  {:>18}",
                entry.month,
                entry.principal_component,
                entry.interest_component,
                entry.installment,
                entry.remaining_principal
            )?;
        }
        Ok(())
    }
}
