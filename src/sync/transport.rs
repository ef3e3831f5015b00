//! Blocking transport contract.

use crate::error::Result;
use crate::transport::{ExecuteReply, FetchReply};
use crate::value::SqlValue;

/// Blocking transport to the server.
///
/// Implementations speak the server's binary protocol; the cursor core
/// relies only on these primitives. Calls block until the server replies.
/// Timeout and cancellation policy, if any, live in the implementation, and
/// its failures propagate to the caller unchanged.
pub trait Transport {
    /// Execute raw operation text under the given statement label.
    fn execute_direct(&mut self, stmt_label: &str, operation: &[u8]) -> Result<ExecuteReply>;

    /// Execute operation text together with bound parameter values.
    fn execute_prepared(
        &mut self,
        stmt_label: &str,
        operation: &[u8],
        params: &[SqlValue],
    ) -> Result<ExecuteReply>;

    /// Fetch the next batch of rows for the given statement label.
    fn fetch(&mut self, stmt_label: &str) -> Result<FetchReply>;
}
