//! Capital account and capital account action lookups.

use crate::errors::Result;
use crate::ledger::{get_entity, query_all, DocType, Selector, StateReader};

use super::capital_accounts_model::{CapitalAccount, CapitalAccountAction};

pub fn query_capital_account_by_id<S: StateReader + ?Sized>(
    state: &mut S,
    capital_account_id: &str,
) -> Result<Option<CapitalAccount>> {
    get_entity(state, capital_account_id)
}

/// Every account opened in `fund_id`.
pub fn query_capital_accounts_by_fund<S: StateReader + ?Sized>(
    state: &mut S,
    fund_id: &str,
) -> Result<Vec<CapitalAccount>> {
    let selector = Selector::new(DocType::CapitalAccount).with_field("fund", fund_id);
    query_all(state, &selector)
}

/// Accounts held by `investor_id` in `fund_id`.
pub fn query_capital_accounts_by_investor<S: StateReader + ?Sized>(
    state: &mut S,
    fund_id: &str,
    investor_id: &str,
) -> Result<Vec<CapitalAccount>> {
    let selector = Selector::new(DocType::CapitalAccount)
        .with_field("fund", fund_id)
        .with_field("investor", investor_id);
    query_all(state, &selector)
}

pub fn query_capital_account_action_by_id<S: StateReader + ?Sized>(
    state: &mut S,
    action_id: &str,
) -> Result<Option<CapitalAccountAction>> {
    get_entity(state, action_id)
}

pub fn query_capital_account_actions_by_fund<S: StateReader + ?Sized>(
    state: &mut S,
    fund_id: &str,
) -> Result<Vec<CapitalAccountAction>> {
    let selector = Selector::new(DocType::CapitalAccountAction).with_field("fund", fund_id);
    query_all(state, &selector)
}

/// Actions against one account within one period.
pub fn query_capital_account_actions_by_account_period<S: StateReader + ?Sized>(
    state: &mut S,
    fund_id: &str,
    capital_account_id: &str,
    period: u32,
) -> Result<Vec<CapitalAccountAction>> {
    let selector = Selector::new(DocType::CapitalAccountAction)
        .with_field("fund", fund_id)
        .with_field("capitalAccount", capital_account_id)
        .with_field("period", period);
    query_all(state, &selector)
}
