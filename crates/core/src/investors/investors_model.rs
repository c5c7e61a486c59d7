use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::ids::new_entity_id;
use crate::ledger::impl_ledger_entity;
use crate::utils::input_utils::require_non_empty;

/// An investor. Names are unique across all investors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub id: String,
    pub name: String,
}

impl_ledger_entity!(Investor, Investor);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestor {
    pub name: String,
}

impl NewInvestor {
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.name, "Investor name")
    }

    /// Builds the investor record under a freshly generated id.
    pub fn into_investor(self) -> Investor {
        Investor {
            id: new_entity_id(),
            name: self.name,
        }
    }
}
