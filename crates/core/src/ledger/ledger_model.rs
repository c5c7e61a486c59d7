//! Ledger document model: the docType discriminator, the tagged document
//! union stored under each key, and the selector used for indexed queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::capital_accounts::{CapitalAccount, CapitalAccountAction};
use crate::errors::{Error, ValidationError};
use crate::funds::Fund;
use crate::investors::Investor;
use crate::portfolios::{Portfolio, PortfolioAction};

/// Name of the discriminator field in every serialized document.
pub const DOC_TYPE_FIELD: &str = "docType";

/// Entity kinds sharing the ledger keyspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocType {
    Fund,
    Investor,
    CapitalAccount,
    CapitalAccountAction,
    Portfolio,
    PortfolioAction,
}

impl DocType {
    pub const ALL: [DocType; 6] = [
        DocType::Fund,
        DocType::Investor,
        DocType::CapitalAccount,
        DocType::CapitalAccountAction,
        DocType::Portfolio,
        DocType::PortfolioAction,
    ];

    /// The wire value of the discriminator.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DocType::Fund => "fund",
            DocType::Investor => "investor",
            DocType::CapitalAccount => "capitalAccount",
            DocType::CapitalAccountAction => "capitalAccountAction",
            DocType::Portfolio => "portfolio",
            DocType::PortfolioAction => "portfolioAction",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocType::ALL
            .into_iter()
            .find(|doc_type| doc_type.as_str() == s)
            .ok_or_else(|| {
                ValidationError::InvalidInput(format!("unknown docType '{}'", s)).into()
            })
    }
}

/// A document as persisted in the ledger.
///
/// The discriminator only exists in the serialized form: entity structs carry
/// no `docType` field, serde adds and strips it at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "docType", rename_all = "camelCase")]
pub enum LedgerDocument {
    Fund(Fund),
    Investor(Investor),
    CapitalAccount(CapitalAccount),
    CapitalAccountAction(CapitalAccountAction),
    Portfolio(Portfolio),
    PortfolioAction(PortfolioAction),
}

impl LedgerDocument {
    pub fn doc_type(&self) -> DocType {
        match self {
            LedgerDocument::Fund(_) => DocType::Fund,
            LedgerDocument::Investor(_) => DocType::Investor,
            LedgerDocument::CapitalAccount(_) => DocType::CapitalAccount,
            LedgerDocument::CapitalAccountAction(_) => DocType::CapitalAccountAction,
            LedgerDocument::Portfolio(_) => DocType::Portfolio,
            LedgerDocument::PortfolioAction(_) => DocType::PortfolioAction,
        }
    }

    /// The world-state key the document is stored under.
    pub fn key(&self) -> &str {
        match self {
            LedgerDocument::Fund(fund) => &fund.id,
            LedgerDocument::Investor(investor) => &investor.id,
            LedgerDocument::CapitalAccount(account) => &account.id,
            LedgerDocument::CapitalAccountAction(action) => &action.id,
            LedgerDocument::Portfolio(portfolio) => &portfolio.id,
            LedgerDocument::PortfolioAction(action) => &action.id,
        }
    }
}

/// One row produced by a selector query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub key: String,
    pub value: Vec<u8>,
}

/// Structured equality filter submitted to the indexed-query service.
///
/// A selector always pins the docType and adds one or more equality
/// predicates on top-level document fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    doc_type: DocType,
    predicates: Vec<(String, Value)>,
}

impl Selector {
    pub fn new(doc_type: DocType) -> Self {
        Self {
            doc_type,
            predicates: Vec::new(),
        }
    }

    /// Adds an equality predicate on `field`.
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.predicates.push((field.into(), value.into()));
        self
    }

    pub fn doc_type(&self) -> DocType {
        self.doc_type
    }

    pub fn predicates(&self) -> &[(String, Value)] {
        &self.predicates
    }

    /// Renders the selector as a rich query string,
    /// e.g. `{"selector":{"docType":"investor","name":"Alice"}}`.
    pub fn to_query_string(&self) -> String {
        let mut fields = Map::new();
        fields.insert(
            DOC_TYPE_FIELD.to_string(),
            Value::String(self.doc_type.as_str().to_string()),
        );
        for (field, value) in &self.predicates {
            fields.insert(field.clone(), value.clone());
        }

        let mut query = Map::new();
        query.insert("selector".to_string(), Value::Object(fields));
        Value::Object(query).to_string()
    }

    /// Evaluates the selector against a decoded document.
    pub fn matches(&self, document: &Value) -> bool {
        let doc_type_matches = document
            .get(DOC_TYPE_FIELD)
            .and_then(Value::as_str)
            .is_some_and(|doc_type| doc_type == self.doc_type.as_str());

        doc_type_matches
            && self
                .predicates
                .iter()
                .all(|(field, expected)| document.get(field) == Some(expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_doc_type_wire_values() {
        assert_eq!(DocType::Fund.as_str(), "fund");
        assert_eq!(DocType::CapitalAccountAction.as_str(), "capitalAccountAction");
        assert_eq!(
            serde_json::to_value(DocType::PortfolioAction).unwrap(),
            json!("portfolioAction")
        );
        assert_eq!(
            "capitalAccount".parse::<DocType>().unwrap(),
            DocType::CapitalAccount
        );
        assert!("Fund".parse::<DocType>().is_err());
    }

    #[test]
    fn test_selector_query_string() {
        let selector = Selector::new(DocType::Portfolio)
            .with_field("fund", "fund-1")
            .with_field("name", "Growth");
        let parsed: Value = serde_json::from_str(&selector.to_query_string()).unwrap();
        assert_eq!(
            parsed,
            json!({"selector": {"docType": "portfolio", "fund": "fund-1", "name": "Growth"}})
        );
    }

    #[test]
    fn test_selector_matches_doc_type_and_fields() {
        let selector = Selector::new(DocType::CapitalAccountAction)
            .with_field("fund", "f1")
            .with_field("period", 3);

        assert!(selector.matches(&json!({
            "docType": "capitalAccountAction", "fund": "f1", "period": 3, "amount": "10"
        })));
        // Period must compare as a number, not as a string.
        assert!(!selector.matches(&json!({
            "docType": "capitalAccountAction", "fund": "f1", "period": "3"
        })));
        assert!(!selector.matches(&json!({
            "docType": "capitalAccount", "fund": "f1", "period": 3
        })));
        assert!(!selector.matches(&json!({"docType": "capitalAccountAction", "period": 3})));
    }
}
