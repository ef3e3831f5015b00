//! Async connection handle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::opts::Opts;
use crate::statement::stmt_label;

use super::cursor::Cursor;
use super::transport::Transport;

/// A connection to the server, shared by the cursors opened on it.
///
/// The async twin of [`crate::sync::Connection`]: owns the transport behind
/// an async mutex so cursors on the same connection never interleave
/// transport calls, and hands out cursors holding weak back-references that
/// never keep the connection alive.
pub struct Connection<T> {
    transport: Mutex<T>,
    seq: AtomicU64,
    connected: AtomicBool,
    opts: Opts,
}

impl<T: Transport> Connection<T> {
    /// Wrap an established transport into a connection handle.
    pub fn open(opts: Opts, transport: T) -> Arc<Self> {
        Arc::new(Self {
            transport: Mutex::new(transport),
            seq: AtomicU64::new(0),
            connected: AtomicBool::new(true),
            opts,
        })
    }

    /// Options this connection was opened with.
    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    /// Best-effort liveness check.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    /// Mark the connection as torn down. Idempotent.
    ///
    /// Cursors already bound to the connection fail their next operation;
    /// new cursors cannot be created.
    pub fn close(&self) {
        self.connected.store(false, Ordering::Release);
    }

    /// Open a new cursor on this connection.
    pub fn cursor(self: &Arc<Self>) -> Result<Cursor<T>> {
        Cursor::bind(self)
    }

    /// Allocate the next statement label.
    ///
    /// Labels are unique within the connection's lifetime. Fails once the
    /// connection is torn down and can no longer supply sequence values.
    pub(crate) fn alloc_stmt_label(&self) -> Result<String> {
        if !self.is_connected() {
            return Err(Error::Programming("connection is closed".into()));
        }
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(stmt_label(seq))
    }

    /// Exclusive access to the transport.
    pub(crate) async fn transport(&self) -> MutexGuard<'_, T> {
        self.transport.lock().await
    }
}
