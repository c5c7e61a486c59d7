//! Encoding of entities to ledger documents and the shared lookup helpers
//! built on top of [`StateReader`].

use log::warn;

use super::ledger_model::{DocType, LedgerDocument, Selector};
use super::ledger_traits::{LedgerState, StateReader};
use crate::errors::Result;

/// An entity that can be stored as a [`LedgerDocument`].
pub trait LedgerEntity: Clone + Sized {
    const DOC_TYPE: DocType;

    /// World-state key of the entity.
    fn key(&self) -> &str;

    fn into_document(self) -> LedgerDocument;

    /// Extracts the entity, or `None` when the document is of another kind.
    fn from_document(document: LedgerDocument) -> Option<Self>;
}

macro_rules! impl_ledger_entity {
    ($entity:ty, $variant:ident) => {
        impl $crate::ledger::LedgerEntity for $entity {
            const DOC_TYPE: $crate::ledger::DocType = $crate::ledger::DocType::$variant;

            fn key(&self) -> &str {
                &self.id
            }

            fn into_document(self) -> $crate::ledger::LedgerDocument {
                $crate::ledger::LedgerDocument::$variant(self)
            }

            fn from_document(document: $crate::ledger::LedgerDocument) -> Option<Self> {
                match document {
                    $crate::ledger::LedgerDocument::$variant(entity) => Some(entity),
                    _ => None,
                }
            }
        }
    };
}
pub(crate) use impl_ledger_entity;

pub fn encode_document(document: &LedgerDocument) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(document)?)
}

pub fn decode_document(bytes: &[u8]) -> Result<LedgerDocument> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Writes the full document for `entity` under its key.
pub fn put_entity<E, S>(state: &mut S, entity: &E) -> Result<()>
where
    E: LedgerEntity,
    S: LedgerState + ?Sized,
{
    let key = entity.key().to_string();
    let bytes = encode_document(&entity.clone().into_document())?;
    state.put_state(&key, bytes)
}

/// Point lookup by key.
///
/// A key holding a document of another kind does not identify an `E`, so it
/// is reported as absent.
pub fn get_entity<E, S>(state: &mut S, key: &str) -> Result<Option<E>>
where
    E: LedgerEntity,
    S: StateReader + ?Sized,
{
    let Some(bytes) = state.get_state(key)? else {
        return Ok(None);
    };
    if bytes.is_empty() {
        return Ok(None);
    }

    let document = decode_document(&bytes)?;
    let found = document.doc_type();
    let entity = E::from_document(document);
    if entity.is_none() {
        warn!(
            "Key '{}' holds a {} document, expected {}",
            key,
            found,
            E::DOC_TYPE
        );
    }
    Ok(entity)
}

/// Singular attribute lookup: the first match wins, the cursor is released
/// as soon as it is found.
pub fn query_first<E, S>(state: &mut S, selector: &Selector) -> Result<Option<E>>
where
    E: LedgerEntity,
    S: StateReader + ?Sized,
{
    for row in state.get_query_result(selector)? {
        let row = row?;
        if let Some(entity) = decode_row::<E>(&row.key, &row.value)? {
            return Ok(Some(entity));
        }
    }
    Ok(None)
}

/// List attribute lookup: drains the cursor in iteration order.
pub fn query_all<E, S>(state: &mut S, selector: &Selector) -> Result<Vec<E>>
where
    E: LedgerEntity,
    S: StateReader + ?Sized,
{
    let mut entities = Vec::new();
    for row in state.get_query_result(selector)? {
        let row = row?;
        if let Some(entity) = decode_row::<E>(&row.key, &row.value)? {
            entities.push(entity);
        }
    }
    Ok(entities)
}

fn decode_row<E: LedgerEntity>(key: &str, value: &[u8]) -> Result<Option<E>> {
    let document = decode_document(value)?;
    let found = document.doc_type();
    let entity = E::from_document(document);
    if entity.is_none() {
        warn!(
            "Query for {} returned {} document at key '{}'; skipping",
            E::DOC_TYPE,
            found,
            key
        );
    }
    Ok(entity)
}
