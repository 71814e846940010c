use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Longest tenure accepted, in months (100 years).
pub const MAX_TENURE_MONTHS: u32 = 1200;

/// Largest principal accepted, in currency units.
pub const MAX_PRINCIPAL: i64 = 1_000_000_000_000;

/// Errors arising from loan parameters.
///
/// Every rejection is a bad argument supplied by the caller; the HTTP adapter
/// maps it to a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoanError {
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: String,
    },
}

impl LoanError {
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }
}

/// The three inputs of a reducing-balance loan.
///
/// A `LoanQuery` can only be built through [`LoanQuery::new`], so any
/// instance in hand already satisfies the preconditions of the calculator.
///
/// # Examples
///
/// ```
/// use emi_schedule::core::loan::LoanQuery;
/// use rust_decimal_macros::dec;
///
/// let query = LoanQuery::new(dec!(100_000), dec!(10), 12).unwrap();
/// assert_eq!(query.tenure_months(), 12);
///
/// assert!(LoanQuery::new(dec!(100_000), dec!(10), 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanQuery {
    /// Amount borrowed, in currency units. Always positive.
    #[serde(with = "rust_decimal::serde::str")]
    principal: Decimal,
    /// Annual interest rate in percent (8.5 means 8.5%). Never negative.
    #[serde(rename = "annualInterestRate", with = "rust_decimal::serde::str")]
    annual_rate_percent: Decimal,
    /// Number of monthly installments.
    tenure_months: u32,
}

impl LoanQuery {
    /// Validate and build a query.
    pub fn new(
        principal: Decimal,
        annual_rate_percent: Decimal,
        tenure_months: u32,
    ) -> Result<Self, LoanError> {
        if principal <= Decimal::ZERO {
            return Err(LoanError::invalid(
                "principal",
                format!("must be positive, got {}", principal),
            ));
        }
        if principal > Decimal::from(MAX_PRINCIPAL) {
            return Err(LoanError::invalid(
                "principal",
                format!("must not exceed {}, got {}", MAX_PRINCIPAL, principal),
            ));
        }
        if annual_rate_percent < Decimal::ZERO {
            return Err(LoanError::invalid(
                "annualInterestRate",
                format!("must not be negative, got {}", annual_rate_percent),
            ));
        }
        if tenure_months == 0 {
            return Err(LoanError::invalid("tenureMonths", "must be at least 1"));
        }
        if tenure_months > MAX_TENURE_MONTHS {
            return Err(LoanError::invalid(
                "tenureMonths",
                format!(
                    "must not exceed {} months, got {}",
                    MAX_TENURE_MONTHS, tenure_months
                ),
            ));
        }
        Ok(Self {
            principal,
            annual_rate_percent,
            tenure_months,
        })
    }

    /// Like [`LoanQuery::new`] but takes the tenure as a signed integer, the
    /// way it arrives from untyped callers. Negative tenures are rejected.
    pub fn from_signed(
        principal: Decimal,
        annual_rate_percent: Decimal,
        tenure_months: i64,
    ) -> Result<Self, LoanError> {
        let tenure = u32::try_from(tenure_months).map_err(|_| {
            if tenure_months < 0 {
                LoanError::invalid("tenureMonths", "must be at least 1")
            } else {
                LoanError::invalid(
                    "tenureMonths",
                    format!(
                        "must not exceed {} months, got {}",
                        MAX_TENURE_MONTHS, tenure_months
                    ),
                )
            }
        })?;
        Self::new(principal, annual_rate_percent, tenure)
    }

    // --- Accessors ---

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }

    pub fn tenure_months(&self) -> u32 {
        self.tenure_months
    }

    /// Monthly rate as a fraction: `annual / (12 * 100)`.
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate_percent / Decimal::from(1200)
    }
}
