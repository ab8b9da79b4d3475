//! Transaction ledger - models and the repository trait the host implements.

mod ledger_model;
mod ledger_traits;

pub use ledger_model::*;
pub use ledger_traits::*;
