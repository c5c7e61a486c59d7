//! Entity identifier policy.

use uuid::Uuid;

/// Generates the id for a new investor, account, portfolio or action.
///
/// Random v4 UUIDs; collisions are not checked for.
pub fn new_entity_id() -> String {
    Uuid::new_v4().to_string()
}
