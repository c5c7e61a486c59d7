//! Ledger module - document model, collaborator traits, codec and the
//! in-memory ledger.

mod ledger_codec;
mod ledger_model;
mod ledger_traits;
mod memory;

pub(crate) use ledger_codec::impl_ledger_entity;
pub use ledger_codec::{
    decode_document, encode_document, get_entity, put_entity, query_all, query_first,
    LedgerEntity,
};
pub use ledger_model::{DocType, LedgerDocument, QueryResult, Selector, DOC_TYPE_FIELD};
pub use ledger_traits::{LedgerState, LedgerTransactionExecutor, QueryResultIterator, StateReader};
pub use memory::InMemoryLedger;
