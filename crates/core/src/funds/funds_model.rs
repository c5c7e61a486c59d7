//! Fund domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::ledger::impl_ledger_entity;
use crate::utils::input_utils::require_non_empty;

/// The top-level investment vehicle.
///
/// A fund owns its period/valuation state and the investor numbering
/// sequence. `next_investor_number` only ever moves forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub id: String,
    pub name: String,
    pub current_period: u32,
    pub inception_date: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub period_closing_value: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub period_opening_value: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub aggregate_fixed_fees: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub aggregate_deposits: Decimal,
    pub next_investor_number: u32,
    pub period_updated: bool,
}

impl_ledger_entity!(Fund, Fund);

impl Fund {
    /// A fund at inception: period 0, zeroed aggregates, no investors yet.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        inception_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_period: 0,
            inception_date: inception_date.into(),
            period_closing_value: Decimal::ZERO,
            period_opening_value: Decimal::ZERO,
            aggregate_fixed_fees: Decimal::ZERO,
            aggregate_deposits: Decimal::ZERO,
            next_investor_number: 0,
            period_updated: false,
        }
    }

    /// Hands out the current investor number and advances the counter by one.
    pub fn assign_investor_number(&mut self) -> Result<u32> {
        let number = self.next_investor_number;
        self.next_investor_number = number.checked_add(1).ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "fund '{}' has exhausted its investor numbers",
                self.id
            ))
        })?;
        Ok(number)
    }
}

/// Input model for creating a fund. The id is a caller-supplied natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFund {
    pub id: String,
    pub name: String,
    pub inception_date: String,
}

impl NewFund {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        inception_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            inception_date: inception_date.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.id, "Fund id")?;
        require_non_empty(&self.name, "Fund name")
    }
}

impl From<NewFund> for Fund {
    fn from(new_fund: NewFund) -> Self {
        Fund::new(new_fund.id, new_fund.name, new_fund.inception_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_investor_number_advances_counter() {
        let mut fund = Fund::new("f1", "Alpha", "2024-01-01");
        assert_eq!(fund.assign_investor_number().unwrap(), 0);
        assert_eq!(fund.assign_investor_number().unwrap(), 1);
        assert_eq!(fund.next_investor_number, 2);
    }

    #[test]
    fn test_assign_investor_number_at_limit_leaves_fund_unchanged() {
        let mut fund = Fund::new("f1", "Alpha", "2024-01-01");
        fund.next_investor_number = u32::MAX;
        assert!(fund.assign_investor_number().is_err());
        assert_eq!(fund.next_investor_number, u32::MAX);
    }

    #[test]
    fn test_new_fund_validation() {
        assert!(NewFund::new("f1", "Alpha", "2024-01-01").validate().is_ok());
        assert!(NewFund::new("", "Alpha", "2024-01-01").validate().is_err());
        assert!(NewFund::new("f1", " ", "2024-01-01").validate().is_err());
    }
}
