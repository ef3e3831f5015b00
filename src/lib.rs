//! A client library for Trafodion-compatible SQL database servers.
//!
//! # Features
//!
//! - **Pluggable transport**: the wire protocol lives behind a small
//!   execute/fetch trait; the crate implements everything above it
//! - **Sans-I/O cursor core**: statement dispatch and row-cache logic are
//!   separated from I/O and shared by both frontends
//! - **Sync and async APIs**: choose between synchronous and tokio-based async
//! - **Buffered fetching**: rows are pulled in server-sized batches, with at
//!   most one round-trip per buffer exhaustion
//!
//! # Example
//!
//! ```no_run
//! use trafodion_client::sync::{Connection, Transport};
//! use trafodion_client::{Error, ExecuteReply, FetchReply, Opts, Result, SqlValue};
//!
//! // A real transport speaks the server's wire protocol; the cursor core
//! // only relies on the three primitives below.
//! struct Wire;
//!
//! impl Transport for Wire {
//!     fn execute_direct(&mut self, _stmt_label: &str, _operation: &[u8]) -> Result<ExecuteReply> {
//!         Err(Error::Transport("wire protocol not shown here".into()))
//!     }
//!
//!     fn execute_prepared(
//!         &mut self,
//!         _stmt_label: &str,
//!         _operation: &[u8],
//!         _params: &[SqlValue],
//!     ) -> Result<ExecuteReply> {
//!         Err(Error::Transport("wire protocol not shown here".into()))
//!     }
//!
//!     fn fetch(&mut self, _stmt_label: &str) -> Result<FetchReply> {
//!         Err(Error::Transport("wire protocol not shown here".into()))
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let opts = Opts::try_from("trafodion://app@db-host:23400/seabase")?;
//!     let conn = Connection::open(opts, Wire);
//!     let mut cursor = conn.cursor()?;
//!
//!     cursor.execute(
//!         "SELECT first_name FROM employee WHERE num = ?",
//!         Some(&[SqlValue::Int(5)]),
//!     )?;
//!     while let Some(row) = cursor.fetch_one()? {
//!         println!("{:?}", row.get(0));
//!     }
//!
//!     cursor.close();
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod opts;
pub mod row;
pub mod state;
pub mod statement;
pub mod transport;
pub mod value;

#[cfg(feature = "sync")]
pub mod sync;

#[cfg(feature = "tokio")]
pub mod tokio;

pub use error::{Error, Result};
pub use opts::Opts;
pub use row::Row;
pub use state::{CachePoll, CursorState, RowCache};
pub use statement::{STMT_LABEL_PREFIX, Statement};
pub use transport::{ColumnDesc, ExecuteMode, ExecuteReply, FetchReply, StatementType};
pub use value::SqlValue;
