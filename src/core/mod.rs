pub mod loan;
pub mod rounding;
