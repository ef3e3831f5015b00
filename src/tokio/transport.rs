//! Async transport contract.

use async_trait::async_trait;

use crate::error::Result;
use crate::transport::{ExecuteReply, FetchReply};
use crate::value::SqlValue;

/// Async transport to the server.
///
/// The async twin of [`crate::sync::Transport`], with identical semantics:
/// implementations speak the server's binary protocol, calls resolve when
/// the server replies, and failures propagate to the caller unchanged.
#[async_trait]
pub trait Transport: Send {
    /// Execute raw operation text under the given statement label.
    async fn execute_direct(&mut self, stmt_label: &str, operation: &[u8])
    -> Result<ExecuteReply>;

    /// Execute operation text together with bound parameter values.
    async fn execute_prepared(
        &mut self,
        stmt_label: &str,
        operation: &[u8],
        params: &[SqlValue],
    ) -> Result<ExecuteReply>;

    /// Fetch the next batch of rows for the given statement label.
    async fn fetch(&mut self, stmt_label: &str) -> Result<FetchReply>;
}
