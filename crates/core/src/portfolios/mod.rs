//! Portfolios module - named security holdings of a fund and the buy/sell
//! actions submitted against them.

mod portfolios_model;
mod portfolios_queries;
mod portfolios_service;
mod portfolios_traits;


pub use portfolios_model::{
    NewPortfolio, NewPortfolioAction, NewSecurity, Portfolio, PortfolioAction,
    PortfolioActionType, Security,
};
pub use portfolios_queries::{
    query_portfolio_action_by_id, query_portfolio_actions_by_fund_period,
    query_portfolio_actions_by_portfolio, query_portfolio_by_id, query_portfolio_by_name,
    query_portfolios_by_fund,
};
pub use portfolios_service::PortfolioService;
pub use portfolios_traits::PortfolioServiceTrait;
