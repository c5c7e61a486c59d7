use log::{debug, info};

use super::funds_model::{Fund, NewFund};
use super::funds_queries::{query_fund_by_id, query_fund_by_name};
use super::funds_traits::FundServiceTrait;
use crate::errors::{Error, Result};
use crate::ledger::{put_entity, LedgerTransactionExecutor};

/// Service for managing funds (generic over the ledger executor).
pub struct FundService<E: LedgerTransactionExecutor + Clone> {
    executor: E,
}

impl<E: LedgerTransactionExecutor + Clone> FundService<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[async_trait::async_trait]
impl<E: LedgerTransactionExecutor + Clone> FundServiceTrait for FundService<E> {
    async fn create_fund(&self, new_fund: NewFund) -> Result<Fund> {
        new_fund.validate()?;
        debug!("Creating fund '{}'...", new_fund.id);

        let fund = self
            .executor
            .execute(move |state| {
                // Existing content is not type-checked: any value blocks creation.
                if let Some(existing) = state.get_state(&new_fund.id)? {
                    if !existing.is_empty() {
                        return Err(Error::AlreadyExists(new_fund.id));
                    }
                }

                let fund = Fund::from(new_fund);
                put_entity(state, &fund)?;
                Ok(fund)
            })
            .await?;

        info!("Created fund '{}' ({})", fund.id, fund.name);
        Ok(fund)
    }

    fn get_fund(&self, fund_id: &str) -> Result<Option<Fund>> {
        self.executor.read(|state| query_fund_by_id(state, fund_id))
    }

    fn get_fund_by_name(&self, name: &str) -> Result<Option<Fund>> {
        self.executor.read(|state| query_fund_by_name(state, name))
    }
}
