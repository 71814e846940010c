//! # emi-schedule
//!
//! Reducing-balance loan amortization engine.
//!
//! Given a principal, an annual interest rate and a tenure in months, this
//! crate computes the equated monthly installment (EMI) and the month by
//! month split of each installment into interest and principal, together
//! with the outstanding balance.
//!
//! ## Architecture
//!
//! - **core** — Loan inputs, validation, cent rounding
//! - **amortization** — The schedule calculator and schedule totals
//! - **server** — HTTP adapter exposing `GET /api/loan/emi`
//! - **simulation** — Random loan books for benchmarks and stress runs

pub mod amortization;
pub mod core;
pub mod server;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::amortization::schedule::{AmortizationCalculator, Schedule, ScheduleEntry};
    pub use crate::amortization::summary::ScheduleSummary;
    pub use crate::core::loan::{LoanError, LoanQuery};
}
