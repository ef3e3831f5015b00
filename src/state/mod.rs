//! Transport-independent cursor state machines.
//!
//! These types carry the cursor's bookkeeping without performing any I/O.
//! The blocking and async frontends drive them, perform the transport calls
//! they request, and hand the replies back.

pub mod cursor;
pub mod fetch;

pub use cursor::CursorState;
pub use fetch::{CachePoll, RowCache};
