//! Fund Ledger Core - Domain entities, services, and traits.
//!
//! This crate contains the fund administration rules: funds, investors,
//! capital accounts, portfolios and the actions submitted against them.
//! It is storage-agnostic and talks to the ledger only through the traits in
//! [`ledger`], which are implemented by the `storage-sqlite` crate and by
//! [`ledger::InMemoryLedger`].

pub mod capital_accounts;
pub mod contract;
pub mod errors;
pub mod funds;
pub mod ids;
pub mod investors;
pub mod ledger;
pub mod portfolios;
pub mod utils;

// Re-export the entity types
pub use capital_accounts::{CapitalAccount, CapitalAccountAction, CapitalActionType, HighWaterMark};
pub use funds::Fund;
pub use investors::Investor;
pub use portfolios::{Portfolio, PortfolioAction, PortfolioActionType, Security};

pub use contract::{AdminContract, CONTRACT_FUNCTIONS};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
