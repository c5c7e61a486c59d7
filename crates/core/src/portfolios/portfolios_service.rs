use log::{debug, info};

use super::portfolios_model::{NewPortfolio, NewPortfolioAction, Portfolio, PortfolioAction};
use super::portfolios_queries::*;
use super::portfolios_traits::PortfolioServiceTrait;
use crate::errors::{Error, Result};
use crate::ledger::{put_entity, DocType, LedgerTransactionExecutor};

/// Service for portfolios and portfolio actions.
pub struct PortfolioService<E: LedgerTransactionExecutor + Clone> {
    executor: E,
}

impl<E: LedgerTransactionExecutor + Clone> PortfolioService<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[async_trait::async_trait]
impl<E: LedgerTransactionExecutor + Clone> PortfolioServiceTrait for PortfolioService<E> {
    async fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio> {
        new_portfolio.validate()?;
        debug!(
            "Creating portfolio '{}' for fund '{}'...",
            new_portfolio.name, new_portfolio.fund
        );

        let portfolio = self
            .executor
            .execute(move |state| {
                let existing =
                    query_portfolio_by_name(state, &new_portfolio.fund, &new_portfolio.name)?;
                if existing.is_some() {
                    return Err(Error::DuplicateName {
                        kind: DocType::Portfolio,
                        name: new_portfolio.name,
                        scope: Some(new_portfolio.fund),
                    });
                }

                let portfolio = new_portfolio.into_portfolio();
                put_entity(state, &portfolio)?;
                Ok(portfolio)
            })
            .await?;

        info!(
            "Created portfolio {} ('{}') in fund '{}'",
            portfolio.id, portfolio.name, portfolio.fund
        );
        Ok(portfolio)
    }

    async fn create_portfolio_action(
        &self,
        new_action: NewPortfolioAction,
    ) -> Result<PortfolioAction> {
        debug!(
            "Submitting {} action on portfolio '{}'...",
            new_action.action_type, new_action.portfolio
        );
        let action = new_action.into_action()?;

        let action = self
            .executor
            .execute(move |state| {
                put_entity(state, &action)?;
                Ok(action)
            })
            .await?;

        info!(
            "Submitted {} action {} for {} {}",
            action.action_type, action.id, action.security.amount, action.security.cusip
        );
        Ok(action)
    }

    fn get_portfolio(&self, portfolio_id: &str) -> Result<Option<Portfolio>> {
        self.executor
            .read(|state| query_portfolio_by_id(state, portfolio_id))
    }

    fn get_portfolio_by_name(&self, fund_id: &str, name: &str) -> Result<Option<Portfolio>> {
        self.executor
            .read(|state| query_portfolio_by_name(state, fund_id, name))
    }

    fn get_portfolios_by_fund(&self, fund_id: &str) -> Result<Vec<Portfolio>> {
        self.executor
            .read(|state| query_portfolios_by_fund(state, fund_id))
    }

    fn get_portfolio_action(&self, action_id: &str) -> Result<Option<PortfolioAction>> {
        self.executor
            .read(|state| query_portfolio_action_by_id(state, action_id))
    }

    fn get_portfolio_actions_by_portfolio(
        &self,
        portfolio_id: &str,
    ) -> Result<Vec<PortfolioAction>> {
        self.executor
            .read(|state| query_portfolio_actions_by_portfolio(state, portfolio_id))
    }

    fn get_portfolio_actions_by_fund_period(
        &self,
        fund_id: &str,
        period: u32,
    ) -> Result<Vec<PortfolioAction>> {
        self.executor
            .read(|state| query_portfolio_actions_by_fund_period(state, fund_id, period))
    }
}
