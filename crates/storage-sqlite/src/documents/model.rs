//! Database model for ledger documents.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use fundledger_core::ledger::DOC_TYPE_FIELD;
use serde_json::Value;

/// One world-state entry. `doc_type` is lifted out of the stored JSON so
/// selector queries can use the index; it is empty for values that are not
/// ledger documents.
#[derive(Queryable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::ledger_documents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LedgerDocumentDB {
    pub key: String,
    pub doc_type: String,
    pub value: Vec<u8>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl LedgerDocumentDB {
    pub fn new(key: &str, value: Vec<u8>) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            key: key.to_string(),
            doc_type: extract_doc_type(&value),
            value,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Reads the `docType` discriminator from a stored value.
pub fn extract_doc_type(value: &[u8]) -> String {
    serde_json::from_slice::<Value>(value)
        .ok()
        .and_then(|document| {
            document
                .get(DOC_TYPE_FIELD)
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_default()
}
