use crate::errors::Result;
use crate::ledger::{get_entity, query_first, DocType, Selector, StateReader};

use super::investors_model::Investor;

pub fn query_investor_by_id<S: StateReader + ?Sized>(
    state: &mut S,
    investor_id: &str,
) -> Result<Option<Investor>> {
    get_entity(state, investor_id)
}

/// First investor with the given name. Uniqueness is enforced on creation,
/// so there is at most one.
pub fn query_investor_by_name<S: StateReader + ?Sized>(
    state: &mut S,
    name: &str,
) -> Result<Option<Investor>> {
    let selector = Selector::new(DocType::Investor).with_field("name", name);
    query_first(state, &selector)
}
