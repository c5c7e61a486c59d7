//! Capital account service trait.

use async_trait::async_trait;

use super::capital_accounts_model::{
    CapitalAccount, CapitalAccountAction, NewCapitalAccountAction,
};
use crate::errors::Result;

/// Contract for capital account operations.
#[async_trait]
pub trait CapitalAccountServiceTrait: Send + Sync {
    /// Opens an account for an existing investor in an existing fund.
    ///
    /// The account takes the fund's next investor number and the fund's
    /// counter is advanced in the same unit of work.
    async fn create_capital_account(
        &self,
        fund_id: &str,
        investor_id: &str,
    ) -> Result<CapitalAccount>;

    /// Submits a deposit or withdrawal. Balances are left untouched.
    async fn create_capital_account_action(
        &self,
        new_action: NewCapitalAccountAction,
    ) -> Result<CapitalAccountAction>;

    fn get_capital_account(&self, capital_account_id: &str) -> Result<Option<CapitalAccount>>;

    fn get_capital_accounts_by_fund(&self, fund_id: &str) -> Result<Vec<CapitalAccount>>;

    fn get_capital_accounts_by_investor(
        &self,
        fund_id: &str,
        investor_id: &str,
    ) -> Result<Vec<CapitalAccount>>;

    fn get_capital_account_action(&self, action_id: &str) -> Result<Option<CapitalAccountAction>>;

    fn get_capital_account_actions_by_fund(
        &self,
        fund_id: &str,
    ) -> Result<Vec<CapitalAccountAction>>;

    fn get_capital_account_actions_by_account_period(
        &self,
        fund_id: &str,
        capital_account_id: &str,
        period: u32,
    ) -> Result<Vec<CapitalAccountAction>>;
}
