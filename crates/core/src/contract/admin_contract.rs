use log::{debug, error};
use serde_json::Value;

use super::arguments::{expect_arity, optional_arg, parse_bool, parse_u32};
use crate::capital_accounts::{
    CapitalAccountService, CapitalAccountServiceTrait, NewCapitalAccountAction,
};
use crate::errors::{Result, ValidationError};
use crate::funds::{FundService, FundServiceTrait, NewFund};
use crate::investors::{InvestorService, InvestorServiceTrait};
use crate::ledger::{LedgerEntity, LedgerTransactionExecutor};
use crate::portfolios::{
    NewPortfolio, NewPortfolioAction, NewSecurity, PortfolioService, PortfolioServiceTrait,
};

/// Function names accepted by [`AdminContract::invoke`].
pub const CONTRACT_FUNCTIONS: [&str; 16] = [
    "CreateFund",
    "CreateInvestor",
    "CreateCapitalAccount",
    "CreatePortfolio",
    "CreatePortfolioAction",
    "CreateCapitalAccountAction",
    "QueryFundById",
    "QueryFundByName",
    "QueryInvestorById",
    "QueryInvestorByName",
    "QueryPortfolioByName",
    "QueryPortfolioByFund",
    "QueryCapitalAccountsByInvestor",
    "QueryCapitalAccountsByFund",
    "QueryCapitalAccountActionsByFund",
    "QueryCapitalAccountActionsByAccountPeriod",
];

/// The fund administration contract.
///
/// Wires the entity services to one ledger executor and dispatches
/// positional invocations to them. Results are JSON ledger documents carrying
/// their `docType`: the created record for `Create*`, the record or `null`
/// for singular queries, an array for list queries.
pub struct AdminContract<E: LedgerTransactionExecutor + Clone> {
    funds: FundService<E>,
    investors: InvestorService<E>,
    capital_accounts: CapitalAccountService<E>,
    portfolios: PortfolioService<E>,
}

impl<E: LedgerTransactionExecutor + Clone> AdminContract<E> {
    pub fn new(executor: E) -> Self {
        Self {
            funds: FundService::new(executor.clone()),
            investors: InvestorService::new(executor.clone()),
            capital_accounts: CapitalAccountService::new(executor.clone()),
            portfolios: PortfolioService::new(executor),
        }
    }

    pub fn funds(&self) -> &FundService<E> {
        &self.funds
    }

    pub fn investors(&self) -> &InvestorService<E> {
        &self.investors
    }

    pub fn capital_accounts(&self) -> &CapitalAccountService<E> {
        &self.capital_accounts
    }

    pub fn portfolios(&self) -> &PortfolioService<E> {
        &self.portfolios
    }

    /// Invokes `function` with positional arguments.
    pub async fn invoke(&self, function: &str, args: &[&str]) -> Result<Value> {
        debug!("Invoking {} with {} argument(s)", function, args.len());
        let result = self.dispatch(function, args).await;
        if let Err(e) = &result {
            error!("{} failed: {}", function, e);
        }
        result
    }

    async fn dispatch(&self, function: &str, args: &[&str]) -> Result<Value> {
        match function {
            "CreateFund" => {
                expect_arity(function, args, 3, 3)?;
                let fund = self
                    .funds
                    .create_fund(NewFund::new(args[0], args[1], args[2]))
                    .await?;
                entity_json(fund)
            }
            "CreateInvestor" => {
                expect_arity(function, args, 1, 1)?;
                entity_json(self.investors.create_investor(args[0]).await?)
            }
            "CreateCapitalAccount" => {
                expect_arity(function, args, 2, 2)?;
                let account = self
                    .capital_accounts
                    .create_capital_account(args[0], args[1])
                    .await?;
                entity_json(account)
            }
            "CreatePortfolio" => {
                expect_arity(function, args, 2, 2)?;
                let portfolio = self
                    .portfolios
                    .create_portfolio(NewPortfolio {
                        fund: args[0].to_string(),
                        name: args[1].to_string(),
                    })
                    .await?;
                entity_json(portfolio)
            }
            "CreatePortfolioAction" => {
                // fundId, portfolioId, type, date, period, name, cusip, amount, currency
                expect_arity(function, args, 9, 9)?;
                let new_action = NewPortfolioAction {
                    fund: args[0].to_string(),
                    portfolio: args[1].to_string(),
                    action_type: args[2].to_string(),
                    date: args[3].to_string(),
                    period: parse_u32(args[4], "period")?,
                    security: NewSecurity {
                        name: args[5].to_string(),
                        cusip: args[6].to_string(),
                        amount: args[7].to_string(),
                        currency: args[8].to_string(),
                    },
                };
                entity_json(self.portfolios.create_portfolio_action(new_action).await?)
            }
            "CreateCapitalAccountAction" => {
                // type, amount, full, date, period [, fundId [, capitalAccountId]]
                expect_arity(function, args, 5, 7)?;
                let mut new_action = NewCapitalAccountAction::new(
                    args[0],
                    args[1],
                    parse_bool(args[2], "full")?,
                    args[3],
                    parse_u32(args[4], "period")?,
                );
                new_action.fund = optional_arg(args, 5);
                new_action.capital_account = optional_arg(args, 6);
                let action = self
                    .capital_accounts
                    .create_capital_account_action(new_action)
                    .await?;
                entity_json(action)
            }
            "QueryFundById" => {
                expect_arity(function, args, 1, 1)?;
                optional_json(self.funds.get_fund(args[0])?)
            }
            "QueryFundByName" => {
                expect_arity(function, args, 1, 1)?;
                optional_json(self.funds.get_fund_by_name(args[0])?)
            }
            "QueryInvestorById" => {
                expect_arity(function, args, 1, 1)?;
                optional_json(self.investors.get_investor(args[0])?)
            }
            "QueryInvestorByName" => {
                expect_arity(function, args, 1, 1)?;
                optional_json(self.investors.get_investor_by_name(args[0])?)
            }
            "QueryPortfolioByName" => {
                expect_arity(function, args, 2, 2)?;
                optional_json(self.portfolios.get_portfolio_by_name(args[0], args[1])?)
            }
            "QueryPortfolioByFund" => {
                expect_arity(function, args, 1, 1)?;
                list_json(self.portfolios.get_portfolios_by_fund(args[0])?)
            }
            "QueryCapitalAccountsByInvestor" => {
                expect_arity(function, args, 2, 2)?;
                list_json(
                    self.capital_accounts
                        .get_capital_accounts_by_investor(args[0], args[1])?,
                )
            }
            "QueryCapitalAccountsByFund" => {
                expect_arity(function, args, 1, 1)?;
                list_json(self.capital_accounts.get_capital_accounts_by_fund(args[0])?)
            }
            "QueryCapitalAccountActionsByFund" => {
                expect_arity(function, args, 1, 1)?;
                list_json(
                    self.capital_accounts
                        .get_capital_account_actions_by_fund(args[0])?,
                )
            }
            "QueryCapitalAccountActionsByAccountPeriod" => {
                expect_arity(function, args, 3, 3)?;
                let period = parse_u32(args[2], "period")?;
                list_json(
                    self.capital_accounts
                        .get_capital_account_actions_by_account_period(args[0], args[1], period)?,
                )
            }
            other => Err(ValidationError::UnknownFunction(other.to_string()).into()),
        }
    }
}

/// Entities are returned as ledger documents, `docType` included.
fn entity_json<T: LedgerEntity>(entity: T) -> Result<Value> {
    Ok(serde_json::to_value(entity.into_document())?)
}

fn optional_json<T: LedgerEntity>(entity: Option<T>) -> Result<Value> {
    entity.map_or(Ok(Value::Null), entity_json)
}

fn list_json<T: LedgerEntity>(entities: Vec<T>) -> Result<Value> {
    entities
        .into_iter()
        .map(entity_json)
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}
