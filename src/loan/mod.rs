//! Loan amortization: level monthly instalment and payment schedule

mod emi;
mod schedule;

pub use emi::{calculate_emi, LoanTerms, MAX_TENURE_YEARS};
pub use schedule::{amortization_schedule, AmortizationRow, AmortizationSchedule};
