use log::{debug, info};

use super::capital_accounts_model::{
    CapitalAccount, CapitalAccountAction, NewCapitalAccountAction,
};
use super::capital_accounts_queries::*;
use super::capital_accounts_traits::CapitalAccountServiceTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::funds::query_fund_by_id;
use crate::investors::query_investor_by_id;
use crate::ledger::{put_entity, DocType, LedgerTransactionExecutor, StateReader};

/// Service for capital accounts and their actions.
pub struct CapitalAccountService<E: LedgerTransactionExecutor + Clone> {
    executor: E,
}

impl<E: LedgerTransactionExecutor + Clone> CapitalAccountService<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

/// Checks the references of a new action and fills in its fund.
///
/// An account reference must resolve and determines the fund; a fund given
/// alongside it must be the account's own. A bare fund reference must
/// resolve on its own.
fn resolve_action_references<S: StateReader + ?Sized>(
    state: &mut S,
    action: &mut CapitalAccountAction,
) -> Result<()> {
    if let Some(account_id) = action.capital_account.as_deref() {
        let account = query_capital_account_by_id(state, account_id)?
            .ok_or_else(|| Error::not_found(DocType::CapitalAccount, account_id))?;
        if let Some(fund_id) = action.fund.as_deref() {
            if fund_id != account.fund {
                return Err(ValidationError::InvalidInput(format!(
                    "capital account '{}' belongs to fund '{}', not '{}'",
                    account_id, account.fund, fund_id
                ))
                .into());
            }
        }
        action.fund = Some(account.fund);
    } else if let Some(fund_id) = action.fund.as_deref() {
        if query_fund_by_id(state, fund_id)?.is_none() {
            return Err(Error::not_found(DocType::Fund, fund_id));
        }
    }
    Ok(())
}

#[async_trait::async_trait]
impl<E: LedgerTransactionExecutor + Clone> CapitalAccountServiceTrait
    for CapitalAccountService<E>
{
    async fn create_capital_account(
        &self,
        fund_id: &str,
        investor_id: &str,
    ) -> Result<CapitalAccount> {
        debug!(
            "Creating capital account for investor '{}' in fund '{}'...",
            investor_id, fund_id
        );
        let fund_id = fund_id.to_string();
        let investor_id = investor_id.to_string();

        let account = self
            .executor
            .execute(move |state| {
                let mut fund = query_fund_by_id(state, &fund_id)?
                    .ok_or_else(|| Error::not_found(DocType::Fund, fund_id.as_str()))?;
                if query_investor_by_id(state, &investor_id)?.is_none() {
                    return Err(Error::not_found(DocType::Investor, investor_id));
                }

                // Read-increment-write of the fund counter stays inside this
                // unit: a failed fund write must also discard the account.
                let account = CapitalAccount::open(&mut fund, &investor_id)?;
                put_entity(state, &account)?;
                put_entity(state, &fund)?;
                Ok(account)
            })
            .await?;

        info!(
            "Opened capital account {} (#{}) in fund '{}'",
            account.id, account.number, account.fund
        );
        Ok(account)
    }

    async fn create_capital_account_action(
        &self,
        new_action: NewCapitalAccountAction,
    ) -> Result<CapitalAccountAction> {
        debug!(
            "Submitting {} capital account action...",
            new_action.action_type
        );
        let mut action = new_action.into_action()?;

        let action = self
            .executor
            .execute(move |state| {
                resolve_action_references(state, &mut action)?;
                put_entity(state, &action)?;
                Ok(action)
            })
            .await?;

        info!(
            "Submitted {} action {} for {}",
            action.action_type, action.id, action.amount
        );
        Ok(action)
    }

    fn get_capital_account(&self, capital_account_id: &str) -> Result<Option<CapitalAccount>> {
        self.executor
            .read(|state| query_capital_account_by_id(state, capital_account_id))
    }

    fn get_capital_accounts_by_fund(&self, fund_id: &str) -> Result<Vec<CapitalAccount>> {
        self.executor
            .read(|state| query_capital_accounts_by_fund(state, fund_id))
    }

    fn get_capital_accounts_by_investor(
        &self,
        fund_id: &str,
        investor_id: &str,
    ) -> Result<Vec<CapitalAccount>> {
        self.executor
            .read(|state| query_capital_accounts_by_investor(state, fund_id, investor_id))
    }

    fn get_capital_account_action(&self, action_id: &str) -> Result<Option<CapitalAccountAction>> {
        self.executor
            .read(|state| query_capital_account_action_by_id(state, action_id))
    }

    fn get_capital_account_actions_by_fund(
        &self,
        fund_id: &str,
    ) -> Result<Vec<CapitalAccountAction>> {
        self.executor
            .read(|state| query_capital_account_actions_by_fund(state, fund_id))
    }

    fn get_capital_account_actions_by_account_period(
        &self,
        fund_id: &str,
        capital_account_id: &str,
        period: u32,
    ) -> Result<Vec<CapitalAccountAction>> {
        self.executor.read(|state| {
            query_capital_account_actions_by_account_period(
                state,
                fund_id,
                capital_account_id,
                period,
            )
        })
    }
}
