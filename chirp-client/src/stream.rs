use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;

/// An established bidirectional byte stream a [`Connection`](crate::Connection)
/// can adopt. Dialing, TLS negotiation and deadlines are the stream's
/// concern, not the connection's.
pub trait Stream: AsyncRead + AsyncWrite + Unpin + Send {}

impl Stream for TcpStream {}
impl Stream for tokio_rustls::client::TlsStream<TcpStream> {}
impl Stream for tokio::io::DuplexStream {}
