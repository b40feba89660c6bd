//! Convenience constructors for the common transports. The connection
//! itself stays transport-agnostic; anything implementing
//! [`Stream`](crate::Stream) can be adopted directly with
//! [`Connection::new`](crate::Connection::new).

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpStream;
use tokio_rustls::{
    rustls::{pki_types::ServerName, ClientConfig, RootCertStore},
    TlsConnector,
};

use crate::connection::Connection;

/// Connects over plain TCP.
pub async fn connect(addr: &str) -> anyhow::Result<Connection> {
    let stream = TcpStream::connect(addr).await?;
    stream.set_nodelay(true)?;

    log::debug!("connected to {addr} (TCP without TLS)");
    Ok(Connection::new(stream))
}

/// Connects over TCP, then negotiates TLS with the given client
/// configuration. `server_name` is checked against the server certificate.
pub async fn connect_tls(
    addr: &str,
    server_name: ServerName<'static>,
    config: Arc<ClientConfig>,
) -> anyhow::Result<Connection> {
    let stream = TcpStream::connect(addr).await?;
    stream.set_nodelay(true)?;

    let connector = TlsConnector::from(config);
    let stream = connector.connect(server_name, stream).await?;

    log::debug!("connected to {addr} (TCP with TLS)");
    Ok(Connection::new(stream))
}

/// Builds a no-client-auth TLS configuration trusting the root certificates
/// found in a PEM file.
pub fn client_config_with_roots(path: &Path) -> anyhow::Result<ClientConfig> {
    let mut reader = std::io::BufReader::new(std::fs::File::open(path)?);
    let mut roots = RootCertStore::empty();
    for cert in rustls_pemfile::certs(&mut reader) {
        roots.add(cert?)?;
    }

    let config = ClientConfig::builder()
        .with_root_certificates(roots)
        .with_no_client_auth();
    Ok(config)
}
