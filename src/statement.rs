//! Statement variants and statement labels.

use crate::error::{Error, Result};
use crate::transport::{ExecuteMode, StatementType};

/// Prefix of generated statement labels.
pub const STMT_LABEL_PREFIX: &str = "SQL_CUR_";

/// Format a statement label from a connection-scoped sequence value.
///
/// The label correlates client cursor state with server-side statement
/// state; uniqueness within a connection is a correctness requirement.
pub(crate) fn stmt_label(seq: u64) -> String {
    format!("{STMT_LABEL_PREFIX}{seq}")
}

/// A single server-side execution unit bound to one cursor invocation.
///
/// Created fresh on every successful execute and never reused; destroyed
/// when the cursor executes again or closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement {
    mode: ExecuteMode,
    stmt_type: StatementType,
}

impl Statement {
    pub(crate) fn new(mode: ExecuteMode, stmt_type: StatementType) -> Self {
        Self { mode, stmt_type }
    }

    /// Execution mode used to create this statement.
    pub fn mode(self) -> ExecuteMode {
        self.mode
    }

    /// Statement classification reported by the server.
    pub fn stmt_type(self) -> StatementType {
        self.stmt_type
    }

    /// Whether fetch operations are valid on this statement.
    pub fn returns_rows(self) -> bool {
        self.stmt_type.returns_rows()
    }
}

/// Reject operation text that cannot be shipped to the server.
pub(crate) fn check_operation(operation: &[u8]) -> Result<()> {
    if operation.is_empty() {
        return Err(Error::Programming("empty SQL operation".into()));
    }
    Ok(())
}

/// Reject operation bytes outside the wire protocol's text encoding.
pub(crate) fn check_operation_encoding(operation: &[u8]) -> Result<()> {
    if simdutf8::basic::from_utf8(operation).is_err() {
        return Err(Error::Programming(
            "operation text is not valid UTF-8".into(),
        ));
    }
    Ok(())
}
