//! Portfolio and portfolio action lookups.

use crate::errors::Result;
use crate::ledger::{get_entity, query_all, query_first, DocType, Selector, StateReader};

use super::portfolios_model::{Portfolio, PortfolioAction};

pub fn query_portfolio_by_id<S: StateReader + ?Sized>(
    state: &mut S,
    portfolio_id: &str,
) -> Result<Option<Portfolio>> {
    get_entity(state, portfolio_id)
}

/// The portfolio called `name` within `fund_id`, if any.
pub fn query_portfolio_by_name<S: StateReader + ?Sized>(
    state: &mut S,
    fund_id: &str,
    name: &str,
) -> Result<Option<Portfolio>> {
    let selector = Selector::new(DocType::Portfolio)
        .with_field("fund", fund_id)
        .with_field("name", name);
    query_first(state, &selector)
}

pub fn query_portfolios_by_fund<S: StateReader + ?Sized>(
    state: &mut S,
    fund_id: &str,
) -> Result<Vec<Portfolio>> {
    let selector = Selector::new(DocType::Portfolio).with_field("fund", fund_id);
    query_all(state, &selector)
}

pub fn query_portfolio_action_by_id<S: StateReader + ?Sized>(
    state: &mut S,
    action_id: &str,
) -> Result<Option<PortfolioAction>> {
    get_entity(state, action_id)
}

pub fn query_portfolio_actions_by_portfolio<S: StateReader + ?Sized>(
    state: &mut S,
    portfolio_id: &str,
) -> Result<Vec<PortfolioAction>> {
    let selector = Selector::new(DocType::PortfolioAction).with_field("portfolio", portfolio_id);
    query_all(state, &selector)
}

pub fn query_portfolio_actions_by_fund_period<S: StateReader + ?Sized>(
    state: &mut S,
    fund_id: &str,
    period: u32,
) -> Result<Vec<PortfolioAction>> {
    let selector = Selector::new(DocType::PortfolioAction)
        .with_field("fund", fund_id)
        .with_field("period", period);
    query_all(state, &selector)
}
