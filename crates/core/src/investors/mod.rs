//! Investors module.

mod investors_model;
mod investors_queries;
mod investors_service;
mod investors_traits;


pub use investors_model::{Investor, NewInvestor};
pub use investors_queries::{query_investor_by_id, query_investor_by_name};
pub use investors_service::InvestorService;
pub use investors_traits::InvestorServiceTrait;
