//! Scripted in-memory transport shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use trafodion_client::{
    ColumnDesc, Error, ExecuteReply, FetchReply, Result, Row, SqlValue, StatementType,
};

/// One recorded transport call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ExecuteDirect {
        label: String,
        operation: Vec<u8>,
    },
    ExecutePrepared {
        label: String,
        operation: Vec<u8>,
        params: Vec<SqlValue>,
    },
    Fetch {
        label: String,
    },
}

/// Shared record of the calls a transport has seen.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, Call::Fetch { .. }))
            .count()
    }

    pub fn execute_count(&self) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|call| !matches!(call, Call::Fetch { .. }))
            .count()
    }
}

/// Transport that serves queued replies and records every call.
#[derive(Default)]
pub struct ScriptedTransport {
    execute_replies: VecDeque<Result<ExecuteReply>>,
    fetch_replies: VecDeque<Result<FetchReply>>,
    log: CallLog,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for inspecting recorded calls after the transport has been
    /// handed to a connection.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    pub fn queue_execute(mut self, reply: Result<ExecuteReply>) -> Self {
        self.execute_replies.push_back(reply);
        self
    }

    pub fn queue_fetch(mut self, reply: Result<FetchReply>) -> Self {
        self.fetch_replies.push_back(reply);
        self
    }

    fn next_execute(&mut self) -> Result<ExecuteReply> {
        self.execute_replies
            .pop_front()
            .unwrap_or_else(|| Err(Error::Transport("no execute reply scripted".into())))
    }

    fn next_fetch(&mut self) -> Result<FetchReply> {
        self.fetch_replies
            .pop_front()
            .unwrap_or_else(|| Err(Error::Transport("no fetch reply scripted".into())))
    }
}

impl trafodion_client::sync::Transport for ScriptedTransport {
    fn execute_direct(&mut self, stmt_label: &str, operation: &[u8]) -> Result<ExecuteReply> {
        self.log.push(Call::ExecuteDirect {
            label: stmt_label.to_string(),
            operation: operation.to_vec(),
        });
        self.next_execute()
    }

    fn execute_prepared(
        &mut self,
        stmt_label: &str,
        operation: &[u8],
        params: &[SqlValue],
    ) -> Result<ExecuteReply> {
        self.log.push(Call::ExecutePrepared {
            label: stmt_label.to_string(),
            operation: operation.to_vec(),
            params: params.to_vec(),
        });
        self.next_execute()
    }

    fn fetch(&mut self, stmt_label: &str) -> Result<FetchReply> {
        self.log.push(Call::Fetch {
            label: stmt_label.to_string(),
        });
        self.next_fetch()
    }
}

#[async_trait::async_trait]
impl trafodion_client::tokio::Transport for ScriptedTransport {
    async fn execute_direct(&mut self, stmt_label: &str, operation: &[u8]) -> Result<ExecuteReply> {
        trafodion_client::sync::Transport::execute_direct(self, stmt_label, operation)
    }

    async fn execute_prepared(
        &mut self,
        stmt_label: &str,
        operation: &[u8],
        params: &[SqlValue],
    ) -> Result<ExecuteReply> {
        trafodion_client::sync::Transport::execute_prepared(self, stmt_label, operation, params)
    }

    async fn fetch(&mut self, stmt_label: &str) -> Result<FetchReply> {
        trafodion_client::sync::Transport::fetch(self, stmt_label)
    }
}

/// Result descriptor for a SELECT over the given columns.
pub fn select_reply(columns: &[&str]) -> ExecuteReply {
    ExecuteReply {
        stmt_type: StatementType::Select,
        rows_affected: 0,
        last_insert_id: None,
        description: columns
            .iter()
            .map(|name| ColumnDesc {
                name: (*name).to_string(),
                type_name: "INTEGER".to_string(),
                nullable: true,
            })
            .collect(),
    }
}

/// Result descriptor for a non-row-producing statement.
pub fn dml_reply(stmt_type: StatementType, rows_affected: u64) -> ExecuteReply {
    ExecuteReply {
        stmt_type,
        rows_affected,
        last_insert_id: None,
        description: Vec::new(),
    }
}

/// A non-final batch of single-column integer rows.
pub fn int_batch(values: &[i64]) -> FetchReply {
    FetchReply {
        rows: values.iter().map(|value| int_row(*value)).collect(),
        rows_fetched: values.len(),
        end_of_data: false,
    }
}

/// The terminal end-of-data reply.
pub fn end_of_data() -> FetchReply {
    FetchReply {
        rows: Vec::new(),
        rows_fetched: 0,
        end_of_data: true,
    }
}

pub fn int_row(value: i64) -> Row {
    Row::new(vec![SqlValue::Int(value)])
}
