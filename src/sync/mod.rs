//! Blocking client frontend.

mod connection;
mod cursor;
mod transport;

pub use connection::Connection;
pub use cursor::{Cursor, Rows};
pub use transport::Transport;
