//! Debt records, repayment ordering, debt-to-income ratio and payoff simulation

mod data;
mod ordering;
mod ratio;
mod payoff;
pub mod loader;

pub use data::Debt;
pub use ordering::{debt_avalanche, debt_snowball, sort_avalanche, sort_snowball, PayoffStrategy};
pub use ratio::{calculate_dti, dti_ratio};
pub use payoff::{simulate_payoff, PayoffEvent, PayoffPlan};
pub use loader::{load_debts, load_debts_from_reader};
