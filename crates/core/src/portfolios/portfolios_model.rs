//! Portfolio domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::capital_accounts::TX_STATUS_SUBMITTED;
use crate::errors::{Error, Result, ValidationError};
use crate::ids::new_entity_id;
use crate::ledger::{impl_ledger_entity, DocType};
use crate::utils::input_utils::{parse_decimal, require_non_empty};

/// A security position. Value type, embedded in portfolios and actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    pub name: String,
    pub cusip: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// A named collection of securities held by a fund. Names are unique per
/// fund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub fund: String,
    pub name: String,
    #[serde(default)]
    pub securities: Vec<Security>,
}

impl_ledger_entity!(Portfolio, Portfolio);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioActionType {
    Buy,
    Sell,
}

impl PortfolioActionType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PortfolioActionType::Buy => "buy",
            PortfolioActionType::Sell => "sell",
        }
    }
}

impl fmt::Display for PortfolioActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortfolioActionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "buy" => Ok(PortfolioActionType::Buy),
            "sell" => Ok(PortfolioActionType::Sell),
            other => Err(ValidationError::InvalidActionType {
                kind: DocType::PortfolioAction,
                value: other.to_string(),
            }
            .into()),
        }
    }
}

/// A proposed buy or sell. Creation does not touch the portfolio's
/// securities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAction {
    pub id: String,
    pub fund: String,
    pub portfolio: String,
    pub security: Security,
    #[serde(rename = "type")]
    pub action_type: PortfolioActionType,
    pub date: String,
    pub period: u32,
    pub status: String,
    pub description: String,
}

impl_ledger_entity!(PortfolioAction, PortfolioAction);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolio {
    pub fund: String,
    pub name: String,
}

impl NewPortfolio {
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.fund, "Fund id")?;
        require_non_empty(&self.name, "Portfolio name")
    }

    pub fn into_portfolio(self) -> Portfolio {
        Portfolio {
            id: new_entity_id(),
            fund: self.fund,
            name: self.name,
            securities: Vec::new(),
        }
    }
}

/// Security fields as supplied by the caller; `amount` is a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSecurity {
    pub name: String,
    pub cusip: String,
    pub amount: String,
    pub currency: String,
}

impl NewSecurity {
    pub fn into_security(self) -> Result<Security> {
        let amount = parse_decimal(&self.amount, "amount")?;
        Ok(Security {
            name: self.name,
            cusip: self.cusip,
            amount,
            currency: self.currency,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioAction {
    pub fund: String,
    pub portfolio: String,
    #[serde(rename = "type")]
    pub action_type: String,
    pub date: String,
    pub period: u32,
    pub security: NewSecurity,
}

impl NewPortfolioAction {
    /// Validates the action type and amount and builds the submitted action.
    pub fn into_action(self) -> Result<PortfolioAction> {
        let action_type = PortfolioActionType::from_str(&self.action_type)?;
        let security = self.security.into_security()?;
        Ok(PortfolioAction {
            id: new_entity_id(),
            fund: self.fund,
            portfolio: self.portfolio,
            security,
            action_type,
            date: self.date,
            period: self.period,
            status: TX_STATUS_SUBMITTED.to_string(),
            description: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn treasury(amount: &str) -> NewSecurity {
        NewSecurity {
            name: "US Treasury 2030".to_string(),
            cusip: "912828XG0".to_string(),
            amount: amount.to_string(),
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn test_portfolio_action_type_parsing() {
        assert_eq!("buy".parse::<PortfolioActionType>().unwrap(), PortfolioActionType::Buy);
        assert_eq!("sell".parse::<PortfolioActionType>().unwrap(), PortfolioActionType::Sell);
        let err = "hold".parse::<PortfolioActionType>().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidActionType { ref value, .. }) if value == "hold"
        ));
    }

    #[test]
    fn test_into_action_embeds_security_snapshot() {
        let action = NewPortfolioAction {
            fund: "f1".to_string(),
            portfolio: "p1".to_string(),
            action_type: "sell".to_string(),
            date: "2024-05-01".to_string(),
            period: 1,
            security: treasury("125000.00"),
        }
        .into_action()
        .unwrap();

        assert_eq!(action.security.amount, dec!(125000.00));
        assert_eq!(action.status, TX_STATUS_SUBMITTED);

        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], json!("sell"));
        assert_eq!(
            value["security"],
            json!({
                "name": "US Treasury 2030",
                "cusip": "912828XG0",
                "amount": "125000.00",
                "currency": "USD"
            })
        );
    }

    #[test]
    fn test_portfolio_tolerates_missing_securities() {
        let portfolio: Portfolio =
            serde_json::from_value(json!({"id": "p1", "fund": "f1", "name": "Core"})).unwrap();
        assert!(portfolio.securities.is_empty());
    }
}
