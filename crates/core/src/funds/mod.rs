//! Funds module - the fund record, its lookups and service.

mod funds_model;
mod funds_queries;
mod funds_service;
mod funds_traits;

#[cfg(test)]
mod funds_service_tests;

pub use funds_model::{Fund, NewFund};
pub use funds_queries::{query_fund_by_id, query_fund_by_name};
pub use funds_service::FundService;
pub use funds_traits::FundServiceTrait;
