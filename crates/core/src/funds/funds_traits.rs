//! Fund service trait.

use async_trait::async_trait;

use super::funds_model::{Fund, NewFund};
use crate::errors::Result;

/// Contract for fund operations.
#[async_trait]
pub trait FundServiceTrait: Send + Sync {
    /// Creates a fund at the caller-supplied id.
    ///
    /// Fails with `AlreadyExists` when any value is stored at that id,
    /// whatever its kind.
    async fn create_fund(&self, new_fund: NewFund) -> Result<Fund>;

    fn get_fund(&self, fund_id: &str) -> Result<Option<Fund>>;

    fn get_fund_by_name(&self, name: &str) -> Result<Option<Fund>>;
}
