//! Fund lookups against the world state.

use crate::errors::Result;
use crate::ledger::{get_entity, query_first, DocType, Selector, StateReader};

use super::funds_model::Fund;

/// Point lookup by fund id.
pub fn query_fund_by_id<S: StateReader + ?Sized>(state: &mut S, fund_id: &str) -> Result<Option<Fund>> {
    get_entity(state, fund_id)
}

/// First fund with the given name.
pub fn query_fund_by_name<S: StateReader + ?Sized>(state: &mut S, name: &str) -> Result<Option<Fund>> {
    let selector = Selector::new(DocType::Fund).with_field("name", name);
    query_first(state, &selector)
}
