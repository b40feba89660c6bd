#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Surfaced verbatim from the underlying stream; never retried here.
    /// The caller decides whether to reconnect.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
    /// The connection was closed by [`close`](crate::Connection::close).
    #[error("connection is closed")]
    Closed,
}
