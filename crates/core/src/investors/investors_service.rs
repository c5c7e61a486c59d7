use log::{debug, info};

use super::investors_model::{Investor, NewInvestor};
use super::investors_queries::{query_investor_by_id, query_investor_by_name};
use super::investors_traits::InvestorServiceTrait;
use crate::errors::{Error, Result};
use crate::ledger::{put_entity, DocType, LedgerTransactionExecutor};

/// Service for managing investors.
pub struct InvestorService<E: LedgerTransactionExecutor + Clone> {
    executor: E,
}

impl<E: LedgerTransactionExecutor + Clone> InvestorService<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[async_trait::async_trait]
impl<E: LedgerTransactionExecutor + Clone> InvestorServiceTrait for InvestorService<E> {
    async fn create_investor(&self, name: &str) -> Result<Investor> {
        let new_investor = NewInvestor {
            name: name.to_string(),
        };
        new_investor.validate()?;
        debug!("Creating investor '{}'...", new_investor.name);

        let investor = self
            .executor
            .execute(move |state| {
                if query_investor_by_name(state, &new_investor.name)?.is_some() {
                    return Err(Error::DuplicateName {
                        kind: DocType::Investor,
                        name: new_investor.name,
                        scope: None,
                    });
                }

                let investor = new_investor.into_investor();
                put_entity(state, &investor)?;
                Ok(investor)
            })
            .await?;

        info!("Created investor {} ('{}')", investor.id, investor.name);
        Ok(investor)
    }

    fn get_investor(&self, investor_id: &str) -> Result<Option<Investor>> {
        self.executor
            .read(|state| query_investor_by_id(state, investor_id))
    }

    fn get_investor_by_name(&self, name: &str) -> Result<Option<Investor>> {
        self.executor.read(|state| query_investor_by_name(state, name))
    }
}
