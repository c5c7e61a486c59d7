//! Capital accounts module - per-investor positions within a fund and the
//! deposit/withdrawal actions submitted against them.

mod capital_accounts_constants;
mod capital_accounts_model;
mod capital_accounts_queries;
mod capital_accounts_service;
mod capital_accounts_traits;

#[cfg(test)]
mod capital_accounts_service_tests;

pub use capital_accounts_constants::*;
pub use capital_accounts_model::{
    CapitalAccount, CapitalAccountAction, CapitalActionType, HighWaterMark,
    NewCapitalAccountAction,
};
pub use capital_accounts_queries::{
    query_capital_account_action_by_id, query_capital_account_actions_by_account_period,
    query_capital_account_actions_by_fund, query_capital_account_by_id,
    query_capital_accounts_by_fund, query_capital_accounts_by_investor,
};
pub use capital_accounts_service::CapitalAccountService;
pub use capital_accounts_traits::CapitalAccountServiceTrait;
