//! The cursor state machine shared by the blocking and async frontends.

use crate::error::{Error, Result};
use crate::row::Row;
use crate::statement::Statement;
use crate::transport::{ColumnDesc, ExecuteMode, ExecuteReply, FetchReply};

use super::fetch::{CachePoll, RowCache};

/// Bookkeeping for one cursor, independent of how transport I/O happens.
///
/// The frontends own a `CursorState`, translate its cache decisions into
/// transport calls, and install the replies. All mutation happens after a
/// successful transport response, so a failed execute or fetch leaves the
/// previous state intact.
#[derive(Debug)]
pub struct CursorState {
    stmt: Option<Statement>,
    cache: RowCache,
    description: Option<Vec<ColumnDesc>>,
    row_count: i64,
    last_insert_id: Option<u64>,
    last_executed: Option<Vec<u8>>,
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorState {
    /// Create the state for a fresh cursor.
    pub fn new() -> Self {
        Self {
            stmt: None,
            cache: RowCache::new(),
            description: None,
            row_count: -1,
            last_insert_id: None,
            last_executed: None,
        }
    }

    /// Active statement for the current execution, if any.
    pub fn statement(&self) -> Option<&Statement> {
        self.stmt.as_ref()
    }

    /// Column metadata of the last row-producing execution.
    pub fn description(&self) -> Option<&[ColumnDesc]> {
        self.description.as_deref()
    }

    /// Rows affected by the last non-row-producing execution, or -1.
    pub fn row_count(&self) -> i64 {
        self.row_count
    }

    /// Value generated for an auto-increment column, if reported.
    pub fn last_insert_id(&self) -> Option<u64> {
        self.last_insert_id
    }

    /// Raw bytes of the last executed operation, kept for diagnostics.
    pub fn last_executed(&self) -> Option<&[u8]> {
        self.last_executed.as_deref()
    }

    /// Install the result descriptor of a successful execute.
    ///
    /// Replaces the active statement, discards buffered rows and clears any
    /// exhaustion state left over from the previous execution.
    pub fn install_execute(&mut self, operation: &[u8], mode: ExecuteMode, reply: ExecuteReply) {
        let returns_rows = reply.stmt_type.returns_rows();
        self.stmt = Some(Statement::new(mode, reply.stmt_type));
        self.cache.reset();
        self.last_executed = Some(operation.to_vec());
        self.description = returns_rows.then_some(reply.description);
        self.row_count = if returns_rows {
            -1
        } else {
            reply.rows_affected as i64
        };
        self.last_insert_id = reply.last_insert_id;
    }

    /// Fail unless the active statement produces rows.
    pub fn require_result_set(&self) -> Result<()> {
        match self.stmt {
            Some(stmt) if stmt.returns_rows() => Ok(()),
            _ => Err(Error::Internal("no result set available".into())),
        }
    }

    /// Decide how the next row is obtained.
    ///
    /// [`CachePoll::Miss`] instructs the frontend to perform one transport
    /// fetch and hand the reply to [`install_fetch`](Self::install_fetch).
    pub fn poll_row(&mut self) -> Result<CachePoll> {
        self.require_result_set()?;
        Ok(self.cache.poll())
    }

    /// Adopt a fetch reply; `None` is the no-more-rows sentinel.
    pub fn install_fetch(&mut self, reply: FetchReply) -> Option<Row> {
        self.cache.install(reply)
    }

    /// Destroy the active statement and buffered rows.
    pub fn discard(&mut self) {
        self.stmt = None;
        self.cache.reset();
    }
}
