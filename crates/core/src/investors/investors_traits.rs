use async_trait::async_trait;

use super::investors_model::Investor;
use crate::errors::Result;

/// Contract for investor operations.
#[async_trait]
pub trait InvestorServiceTrait: Send + Sync {
    /// Creates an investor; fails with `DuplicateName` if the name is taken.
    async fn create_investor(&self, name: &str) -> Result<Investor>;

    fn get_investor(&self, investor_id: &str) -> Result<Option<Investor>>;

    fn get_investor_by_name(&self, name: &str) -> Result<Option<Investor>>;
}
