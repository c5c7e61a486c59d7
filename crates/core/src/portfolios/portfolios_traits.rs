use async_trait::async_trait;

use super::portfolios_model::{NewPortfolio, NewPortfolioAction, Portfolio, PortfolioAction};
use crate::errors::Result;

/// Contract for portfolio operations.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Creates an empty portfolio; the name must be free within the fund.
    async fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio>;

    /// Submits a buy or sell. The portfolio's securities are not modified.
    async fn create_portfolio_action(
        &self,
        new_action: NewPortfolioAction,
    ) -> Result<PortfolioAction>;

    fn get_portfolio(&self, portfolio_id: &str) -> Result<Option<Portfolio>>;

    fn get_portfolio_by_name(&self, fund_id: &str, name: &str) -> Result<Option<Portfolio>>;

    fn get_portfolios_by_fund(&self, fund_id: &str) -> Result<Vec<Portfolio>>;

    fn get_portfolio_action(&self, action_id: &str) -> Result<Option<PortfolioAction>>;

    fn get_portfolio_actions_by_portfolio(&self, portfolio_id: &str)
        -> Result<Vec<PortfolioAction>>;

    fn get_portfolio_actions_by_fund_period(
        &self,
        fund_id: &str,
        period: u32,
    ) -> Result<Vec<PortfolioAction>>;
}
