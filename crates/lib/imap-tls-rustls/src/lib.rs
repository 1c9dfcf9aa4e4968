//! TLS connector helpers for IMAP clients.

use std::sync::Arc;

/// TLS stream type used for IMAP connections.
pub type TlsStream = tokio_rustls::client::TlsStream<tokio::net::TcpStream>;

/// Errors returned while preparing or establishing a TLS connection.
#[derive(Debug, thiserror::Error)]
pub enum TlsConnectError {
    /// The system root store yielded no usable certificate.
    #[error("no usable system root certificates (first load error: {first_error:?})")]
    NoRootCerts {
        /// The first error reported while loading, if any.
        first_error: Option<rustls_native_certs::Error>,
    },

    /// The crypto provider rejected the protocol configuration.
    #[error("TLS config error: {0}")]
    Config(#[from] rustls::Error),

    /// Invalid DNS name for TLS verification.
    #[error("invalid DNS name: {0}")]
    InvalidDnsName(String),

    /// TLS handshake or I/O error.
    #[error("TLS I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build a rustls connector configured with system root certificates.
pub fn connector() -> Result<tokio_rustls::TlsConnector, TlsConnectError> {
    let rustls_native_certs::CertificateResult { certs, errors, .. } =
        rustls_native_certs::load_native_certs();
    for error in &errors {
        tracing::debug!(%error, "skipping unreadable system root certificate source");
    }

    let mut root_store = rustls::RootCertStore::empty();
    let (added, _ignored) = root_store.add_parsable_certificates(certs);
    if added == 0 {
        return Err(TlsConnectError::NoRootCerts {
            first_error: errors.into_iter().next(),
        });
    }

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = rustls::ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()?
        .with_root_certificates(root_store)
        .with_no_client_auth();
    Ok(tokio_rustls::TlsConnector::from(Arc::new(config)))
}

/// Establish a TLS connection over an existing TCP stream.
pub async fn connect(
    connector: &tokio_rustls::TlsConnector,
    server: &str,
    stream: tokio::net::TcpStream,
) -> Result<TlsStream, TlsConnectError> {
    let server_name = rustls::pki_types::ServerName::try_from(server.to_string())
        .map_err(|_| TlsConnectError::InvalidDnsName(server.to_string()))?;
    let tls_stream = connector.connect(server_name, stream).await?;
    Ok(tls_stream)
}
