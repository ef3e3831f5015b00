//! Blocking cursor.

use std::sync::{Arc, Weak};

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::row::Row;
use crate::state::{CachePoll, CursorState};
use crate::statement::{Statement, check_operation, check_operation_encoding};
use crate::transport::{ColumnDesc, ExecuteMode};
use crate::value::SqlValue;

use super::connection::Connection;
use super::transport::Transport;

/// Client-side handle for executing one SQL statement at a time and
/// iterating its result rows.
///
/// Every operation takes `&mut self`; a cursor must not be shared across
/// concurrent callers. Multiple cursors may coexist on one connection, each
/// with its own statement label and row cache.
pub struct Cursor<T> {
    conn: Option<Weak<Connection<T>>>,
    stmt_label: String,
    state: CursorState,
    array_size: usize,
}

impl<T: Transport> Cursor<T> {
    pub(crate) fn bind(conn: &Arc<Connection<T>>) -> Result<Self> {
        let stmt_label = conn.alloc_stmt_label()?;
        Ok(Self {
            conn: Some(Arc::downgrade(conn)),
            stmt_label,
            state: CursorState::new(),
            array_size: 1,
        })
    }

    /// Statement label correlating this cursor with server-side state.
    pub fn stmt_label(&self) -> &str {
        &self.stmt_label
    }

    /// Number of rows [`fetch_many`](Self::fetch_many) returns by default.
    pub fn array_size(&self) -> usize {
        self.array_size
    }

    /// Set the default row count for [`fetch_many`](Self::fetch_many).
    pub fn set_array_size(&mut self, size: usize) {
        self.array_size = size;
    }

    /// Column metadata of the last row-producing execution.
    pub fn description(&self) -> Option<&[ColumnDesc]> {
        self.state.description()
    }

    /// Rows affected by the last non-row-producing execution, or -1.
    pub fn row_count(&self) -> i64 {
        self.state.row_count()
    }

    /// Value generated for an auto-increment column, if reported.
    pub fn last_insert_id(&self) -> Option<u64> {
        self.state.last_insert_id()
    }

    /// Raw bytes of the last executed operation.
    pub fn last_executed(&self) -> Option<&[u8]> {
        self.state.last_executed()
    }

    /// Active statement for the current execution, if any.
    pub fn statement(&self) -> Option<&Statement> {
        self.state.statement()
    }

    fn connection(&self) -> Result<Arc<Connection<T>>> {
        let conn = self
            .conn
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or_else(|| Error::Programming("cursor is not connected".into()))?;
        if !conn.is_connected() {
            return Err(Error::Programming("connection is closed".into()));
        }
        Ok(conn)
    }

    /// Execute the given operation.
    ///
    /// Bound parameters select prepared execution; without them the raw
    /// operation text is executed directly. Rows are surfaced through the
    /// fetch methods afterwards. Any previous statement on this cursor and
    /// its buffered rows are discarded.
    pub fn execute(&mut self, operation: &str, params: Option<&[SqlValue]>) -> Result<()> {
        self.execute_inner(operation.as_bytes(), params, false)
    }

    /// Execute an operation that may contain multiple statements.
    pub fn execute_multi(&mut self, operation: &str, params: Option<&[SqlValue]>) -> Result<()> {
        self.execute_inner(operation.as_bytes(), params, true)
    }

    /// Execute pre-encoded operation bytes.
    ///
    /// The bytes must form valid UTF-8; anything else is rejected before
    /// the transport is contacted.
    pub fn execute_raw(&mut self, operation: &[u8], params: Option<&[SqlValue]>) -> Result<()> {
        check_operation_encoding(operation)?;
        self.execute_inner(operation, params, false)
    }

    fn execute_inner(
        &mut self,
        operation: &[u8],
        params: Option<&[SqlValue]>,
        multi: bool,
    ) -> Result<()> {
        check_operation(operation)?;
        let conn = self.connection()?;
        let mode = ExecuteMode::for_params(params);
        debug!(label = %self.stmt_label, ?mode, "executing statement");
        let reply = match mode {
            ExecuteMode::Direct => conn.transport().execute_direct(&self.stmt_label, operation)?,
            ExecuteMode::Prepared => conn.transport().execute_prepared(
                &self.stmt_label,
                operation,
                params.unwrap_or(&[]),
            )?,
        };
        // A transport that already detects multiple pending results reports
        // them as an interface error from the execute call itself, which
        // propagates unchanged above.
        // TODO: reject pending results here with "use multi=true when
        // executing multiple statements" once the fetch contract carries a
        // pending-result flag.
        let _ = multi;
        self.state.install_execute(operation, mode, reply);
        Ok(())
    }

    /// Next row of the result set, or `None` once the rows are exhausted.
    ///
    /// Rows arrive from the server in batches: at most one transport
    /// round-trip happens per buffer exhaustion, and none at all after
    /// end-of-data has been observed.
    pub fn fetch_one(&mut self) -> Result<Option<Row>> {
        match self.state.poll_row()? {
            CachePoll::Hit(row) => Ok(Some(row)),
            CachePoll::Exhausted => Ok(None),
            CachePoll::Miss => {
                let conn = self.connection()?;
                trace!(label = %self.stmt_label, "fetching next batch");
                let reply = conn.transport().fetch(&self.stmt_label)?;
                Ok(self.state.install_fetch(reply))
            }
        }
    }

    /// Up to `size` rows (default: the configured array size).
    ///
    /// Returns fewer rows when the result set runs out first; running out
    /// is not an error.
    pub fn fetch_many(&mut self, size: Option<usize>) -> Result<Vec<Row>> {
        self.state.require_result_set()?;
        let count = size.unwrap_or(self.array_size);
        let mut rows = Vec::new();
        for _ in 0..count {
            match self.fetch_one()? {
                Some(row) => rows.push(row),
                None => break,
            }
        }
        Ok(rows)
    }

    /// All remaining rows of the result set.
    pub fn fetch_all(&mut self) -> Result<Vec<Row>> {
        self.state.require_result_set()?;
        let mut rows = Vec::new();
        while let Some(row) = self.fetch_one()? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Iterate over the remaining rows.
    pub fn iter(&mut self) -> Rows<'_, T> {
        Rows { cursor: self }
    }

    /// Close the cursor. Idempotent, never fails.
    ///
    /// Releases the connection reference and destroys the active statement
    /// and buffered rows. Returns `false` when there was no connection
    /// reference left to release.
    pub fn close(&mut self) -> bool {
        if self.conn.is_none() {
            return false;
        }
        self.conn = None;
        self.state.discard();
        true
    }
}

/// Iterator over a cursor's remaining rows.
///
/// Yields `Result<Row>` so transport failures during a batch fetch surface
/// at the call site.
pub struct Rows<'a, T> {
    cursor: &'a mut Cursor<T>,
}

impl<T: Transport> Iterator for Rows<'_, T> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.fetch_one().transpose()
    }
}
