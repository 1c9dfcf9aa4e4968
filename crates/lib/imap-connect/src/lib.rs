//! High-level IMAP connection utilities.

/// The effective data stream type we use.
pub type Stream = imap_tls_rustls::TlsStream;

/// The effective client type we use.
pub type Client = async_imap::Client<Stream>;

/// IMAP connect params.
#[derive(Debug, Clone, PartialEq)]
pub struct Params<'a> {
    /// Hostname of the IMAP server. Also used as the TLS server name.
    pub host: &'a str,

    /// IMAP port, implicit TLS.
    pub port: u16,
}

/// Errors returned while connecting to an IMAP server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// TCP connection error.
    #[error("TCP connection error: {0}")]
    TcpConnect(#[source] std::io::Error),

    /// IMAP TLS connector error.
    #[error("IMAP TLS connector error: {0}")]
    TlsConnector(#[source] imap_tls_rustls::TlsConnectError),

    /// TLS handshake error.
    #[error("IMAP TLS handshake error: {0}")]
    TlsHandshake(#[source] imap_tls_rustls::TlsConnectError),

    /// Reading the greeting failed.
    #[error("IMAP greeting error: {0}")]
    Greeting(#[source] async_imap::error::Error),

    /// The server closed the connection without a greeting.
    #[error("IMAP server sent no greeting")]
    MissingGreeting,
}

/// Connect to an IMAP server over implicit TLS and produce an IMAP client.
pub async fn connect(params: Params<'_>) -> Result<Client, Error> {
    let Params { host, port } = params;

    tracing::debug!(imap_host = %host, imap_port = port, "connecting to an IMAP server");

    let tcp_stream = tokio::net::TcpStream::connect((host, port))
        .await
        .map_err(Error::TcpConnect)?;
    let tls_connector = imap_tls_rustls::connector().map_err(Error::TlsConnector)?;
    let tls_stream = imap_tls_rustls::connect(&tls_connector, host, tcp_stream)
        .await
        .map_err(Error::TlsHandshake)?;

    let mut client = async_imap::Client::new(tls_stream);
    read_greeting(&mut client).await?;

    Ok(client)
}

/// Consume the untagged greeting the server sends right after connecting.
pub async fn read_greeting<T>(client: &mut async_imap::Client<T>) -> Result<(), Error>
where
    T: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send + std::fmt::Debug,
{
    client
        .read_response()
        .await
        .ok_or(Error::MissingGreeting)?
        .map_err(|err| Error::Greeting(err.into()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tokio::io::AsyncWriteExt as _;

    use super::*;

    #[tokio::test]
    async fn greeting_is_consumed() {
        let (local, mut server) = tokio::io::duplex(1024);
        server.write_all(b"* OK IMAP4rev1 ready\r\n").await.unwrap();
        let mut client = async_imap::Client::new(local);

        read_greeting(&mut client).await.unwrap();
    }

    #[tokio::test]
    async fn closed_connection_has_no_greeting() {
        let (local, server) = tokio::io::duplex(1024);
        drop(server);
        let mut client = async_imap::Client::new(local);

        let err = read_greeting(&mut client).await.unwrap_err();

        assert!(matches!(err, Error::MissingGreeting), "{err:?}");
    }
}
