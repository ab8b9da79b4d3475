use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::ledger::Transaction;

/// Read access to a user's transaction ledger.
///
/// Implemented by the host application's storage layer. Results must be
/// ordered by timestamp ascending.
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Fetch all of a user's transactions with a timestamp at or after
    /// `since`, oldest first.
    async fn get_transactions(
        &self,
        user_id: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<Transaction>>;
}
