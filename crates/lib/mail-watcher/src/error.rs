//! Session failure classification.

/// A type-erased underlying error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by mailbox and connector operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The connection is unusable: reset, broken pipe, TLS failure.
    ///
    /// Recovered from silently by reconnecting.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The server answered, but not in a way we can work with.
    ///
    /// Reported to the user before recovering.
    #[error("{kind}: {source}")]
    Protocol {
        /// Short name of the failure, shown in the error notification title.
        kind: &'static str,

        /// Underlying error.
        #[source]
        source: BoxError,
    },
}

impl SessionError {
    /// Wrap a transport-level failure.
    pub fn transport(error: impl Into<BoxError>) -> Self {
        Self::Transport(error.into())
    }

    /// Wrap a protocol-level failure.
    pub fn protocol(kind: &'static str, error: impl Into<BoxError>) -> Self {
        Self::Protocol {
            kind,
            source: error.into(),
        }
    }

    /// Whether the session must be dropped.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Short name of the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Protocol { kind, .. } => kind,
        }
    }

    /// Message text of the underlying error.
    pub fn detail(&self) -> String {
        match self {
            Self::Transport(source) | Self::Protocol { source, .. } => source.to_string(),
        }
    }
}
