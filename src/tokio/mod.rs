//! Asynchronous client frontend using Tokio.

mod connection;
mod cursor;
mod transport;

pub use connection::Connection;
pub use cursor::Cursor;
pub use transport::Transport;
