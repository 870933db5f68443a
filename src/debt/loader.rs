//! Load debts from CSV
//!
//! Expected header: `name,balance,interest_rate` (the rate column may be
//! left empty for debts without a known rate).

use super::Debt;
use crate::error::{FinanceError, FinanceResult};
use csv::Reader;
use std::path::Path;

/// Load debts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> FinanceResult<Vec<Debt>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path).map_err(|e| FinanceError::DebtLoad {
        reason: format!("{}: {}", path.display(), e),
    })?;
    let debts = read_debts(reader)?;
    log::debug!("Loaded {} debts from {}", debts.len(), path.display());
    Ok(debts)
}

/// Load debts from any reader (useful for testing)
pub fn load_debts_from_reader<R: std::io::Read>(reader: R) -> FinanceResult<Vec<Debt>> {
    read_debts(Reader::from_reader(reader))
}

fn read_debts<R: std::io::Read>(mut reader: Reader<R>) -> FinanceResult<Vec<Debt>> {
    let mut debts = Vec::new();

    for (line, result) in reader.deserialize::<Debt>().enumerate() {
        let debt = result.map_err(|e| FinanceError::DebtLoad {
            reason: format!("row {}: {}", line + 1, e),
        })?;

        if !debt.balance.is_finite() || debt.balance < 0.0 {
            log::warn!("Rejecting debt '{}' with balance {}", debt.name, debt.balance);
            return Err(FinanceError::invalid(
                "balance",
                debt.balance,
                format!("debt '{}' must have a non-negative balance", debt.name),
            ));
        }
        if let Some(rate) = debt.interest_rate {
            if !rate.is_finite() || rate < 0.0 {
                log::warn!("Rejecting debt '{}' with interest rate {}", debt.name, rate);
                return Err(FinanceError::invalid(
                    "interest_rate",
                    rate,
                    format!("debt '{}' must have a non-negative annual rate fraction", debt.name),
                ));
            }
        }

        debts.push(debt);
    }

    Ok(debts)
}
