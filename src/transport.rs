//! Transport collaborator contract.
//!
//! The cursor core does not speak the server's wire protocol. It depends on
//! a transport exposing three primitives (direct execute, prepared execute,
//! fetch) together with the tag and reply types defined here. The blocking
//! and async trait definitions live in [`crate::sync`] and [`crate::tokio`].

use crate::row::Row;
use crate::value::SqlValue;

/// Statement classification reported by the server after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementType {
    /// Row-producing statement; fetch operations are valid.
    Select,
    /// INSERT statement.
    Insert,
    /// UPDATE statement.
    Update,
    /// DELETE statement.
    Delete,
    /// Anything else (DDL, control statements, ...).
    #[default]
    Other,
}

impl StatementType {
    /// Whether statements of this type produce a result set.
    pub fn returns_rows(self) -> bool {
        matches!(self, StatementType::Select)
    }
}

/// How a statement is shipped to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteMode {
    /// Raw operation text only.
    Direct,
    /// Operation text together with bound parameter values.
    Prepared,
}

impl ExecuteMode {
    /// Dispatch rule: the presence of bound parameters selects prepared
    /// execution.
    pub fn for_params(params: Option<&[SqlValue]>) -> Self {
        if params.is_some() {
            ExecuteMode::Prepared
        } else {
            ExecuteMode::Direct
        }
    }
}

/// Column metadata from the result descriptor.
///
/// Pass-through for callers; the cursor core does not interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDesc {
    /// Column name.
    pub name: String,
    /// Server type name.
    pub type_name: String,
    /// Whether the column admits NULL.
    pub nullable: bool,
}

/// Result descriptor returned by a successful execute call.
#[derive(Debug, Clone, Default)]
pub struct ExecuteReply {
    /// Statement classification.
    pub stmt_type: StatementType,
    /// Rows affected by a non-row-producing statement.
    pub rows_affected: u64,
    /// Value generated for an auto-increment column, if any.
    pub last_insert_id: Option<u64>,
    /// Column metadata for row-producing statements.
    pub description: Vec<ColumnDesc>,
}

/// One batch of rows from a fetch round-trip.
#[derive(Debug, Clone, Default)]
pub struct FetchReply {
    /// Rows in this batch.
    pub rows: Vec<Row>,
    /// How many of `rows` are valid.
    pub rows_fetched: usize,
    /// The server has no further rows for this statement.
    pub end_of_data: bool,
}
