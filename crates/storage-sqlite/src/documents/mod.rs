mod model;
mod repository;

pub use model::{extract_doc_type, LedgerDocumentDB};
pub use repository::{SqliteLedger, SqliteLedgerState};
