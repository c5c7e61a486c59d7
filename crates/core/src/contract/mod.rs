//! By-name invocation surface: operations are called with their function
//! name and positional string arguments, as a ledger peer delivers them.

mod admin_contract;
mod arguments;


pub use admin_contract::{AdminContract, CONTRACT_FUNCTIONS};
