use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;

/// Read access to a user's current positions.
///
/// The history engine reconstructs positions from the ledger; the stored
/// holdings are auxiliary input only, used to flag drift between the
/// replayed window and the account state.
#[async_trait]
pub trait HoldingsRepositoryTrait: Send + Sync {
    /// Current quantity held per asset id.
    async fn current_holdings(&self, user_id: &str) -> Result<HashMap<String, Decimal>>;
}
