//! Synchronized IRC connection over an externally established byte stream.
//!
//! The connection adopts any [`Stream`] (plain TCP, TLS, an in-memory pipe)
//! and exchanges protocol lines over it; parsing lives in `chirp-parser`.
//! The [`transport`] module offers convenience constructors for the common
//! TCP and TLS cases.

mod connection;
mod error;
mod stream;
pub mod transport;

pub use connection::Connection;
pub use error::Error;
pub use stream::Stream;
