//! Traits implemented by pluggable collaborators

use async_trait::async_trait;

use crate::error::Result;
use crate::search::{ListingSummary, SearchParams};

/// Executes a bounded property query against the listing datastore.
///
/// Contract: only approved listings are considered, results are ordered
/// newest first, and at most three summaries come back. Callers treat any
/// error as an empty result list — a gateway fault must never surface to
/// the chat user.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    async fn search(&self, params: &SearchParams) -> Result<Vec<ListingSummary>>;
}
