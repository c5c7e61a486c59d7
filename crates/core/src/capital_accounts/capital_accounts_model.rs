//! Capital account domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::capital_accounts_constants::{
    HIGH_WATER_MARK_UNSET_DATE, TX_STATUS_SUBMITTED, ZERO_BALANCE,
};
use crate::errors::{Error, Result, ValidationError};
use crate::funds::Fund;
use crate::ids::new_entity_id;
use crate::ledger::{impl_ledger_entity, DocType};
use crate::utils::input_utils::parse_decimal;

/// Highest value an account has reached, used for performance fees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighWaterMark {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub date: String,
}

impl Default for HighWaterMark {
    fn default() -> Self {
        Self {
            amount: ZERO_BALANCE,
            date: HIGH_WATER_MARK_UNSET_DATE.to_string(),
        }
    }
}

/// An investor's position within a fund.
///
/// `number` is the fund's `next_investor_number` at the moment the account
/// was opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalAccount {
    pub id: String,
    pub fund: String,
    pub investor: String,
    pub number: u32,
    pub current_period: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub period_closing_value: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub period_opening_value: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub fixed_fees: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub deposits: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub ownership_percentage: Decimal,
    pub high_water_mark: HighWaterMark,
}

impl_ledger_entity!(CapitalAccount, CapitalAccount);

impl CapitalAccount {
    /// Opens an account for `investor_id` in `fund`, consuming the fund's
    /// next investor number. The caller persists both records.
    pub fn open(fund: &mut Fund, investor_id: &str) -> Result<Self> {
        let number = fund.assign_investor_number()?;
        Ok(Self {
            id: new_entity_id(),
            fund: fund.id.clone(),
            investor: investor_id.to_string(),
            number,
            current_period: fund.current_period,
            period_closing_value: ZERO_BALANCE,
            period_opening_value: ZERO_BALANCE,
            fixed_fees: ZERO_BALANCE,
            deposits: ZERO_BALANCE,
            ownership_percentage: ZERO_BALANCE,
            high_water_mark: HighWaterMark::default(),
        })
    }
}

/// Direction of a capital movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapitalActionType {
    Deposit,
    Withdrawal,
}

impl CapitalActionType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CapitalActionType::Deposit => "deposit",
            CapitalActionType::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for CapitalActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapitalActionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "deposit" => Ok(CapitalActionType::Deposit),
            "withdrawal" => Ok(CapitalActionType::Withdrawal),
            other => Err(ValidationError::InvalidActionType {
                kind: DocType::CapitalAccountAction,
                value: other.to_string(),
            }
            .into()),
        }
    }
}

/// A deposit or withdrawal pending settlement.
///
/// Creating an action never touches account balances; a settlement process
/// moves `status` forward and applies the amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalAccountAction {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fund: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital_account: Option<String>,
    #[serde(rename = "type")]
    pub action_type: CapitalActionType,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Whether the action fully liquidates the account.
    pub full: bool,
    pub status: String,
    pub description: String,
    pub date: String,
    pub period: u32,
}

impl_ledger_entity!(CapitalAccountAction, CapitalAccountAction);

/// Input model for submitting a capital account action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCapitalAccountAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub amount: String,
    pub full: bool,
    pub date: String,
    pub period: u32,
    #[serde(default)]
    pub fund: Option<String>,
    #[serde(default)]
    pub capital_account: Option<String>,
}

impl NewCapitalAccountAction {
    pub fn new(
        action_type: impl Into<String>,
        amount: impl Into<String>,
        full: bool,
        date: impl Into<String>,
        period: u32,
    ) -> Self {
        Self {
            action_type: action_type.into(),
            amount: amount.into(),
            full,
            date: date.into(),
            period,
            fund: None,
            capital_account: None,
        }
    }

    pub fn for_fund(mut self, fund_id: impl Into<String>) -> Self {
        self.fund = Some(fund_id.into());
        self
    }

    pub fn for_capital_account(mut self, capital_account_id: impl Into<String>) -> Self {
        self.capital_account = Some(capital_account_id.into());
        self
    }

    /// Validates the arguments and builds the submitted action.
    pub fn into_action(self) -> Result<CapitalAccountAction> {
        let action_type = CapitalActionType::from_str(&self.action_type)?;
        let amount = parse_decimal(&self.amount, "amount")?;
        Ok(CapitalAccountAction {
            id: new_entity_id(),
            fund: self.fund,
            capital_account: self.capital_account,
            action_type,
            amount,
            full: self.full,
            status: TX_STATUS_SUBMITTED.to_string(),
            description: String::new(),
            date: self.date,
            period: self.period,
        })
    }
}
