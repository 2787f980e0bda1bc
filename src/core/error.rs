//! Error types and classification.
//!
//! The client distinguishes construction-time failures (security
//! configuration, channel establishment) from per-call failures returned by
//! the remote service. Remote failures are passed through as the original
//! `tonic::Status` so callers keep the full gRPC classification.

use thiserror::Error;

/// Errors surfaced by the notifications client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The security-config provider could not produce a usable TLS
    /// configuration. Fatal to construction.
    #[error("security configuration failed: {message}")]
    Configuration { message: String },

    /// Channel establishment failed (address resolution, TLS setup on the
    /// endpoint, or the dial itself). Fatal to construction.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// An operation was invoked after `close()`. The connection has been
    /// released; the client is permanently unusable.
    #[error("channel closed")]
    ChannelClosed,

    /// Any failure returned by the remote side, including deadline-exceeded,
    /// application rejection, and transport interruption during a call.
    /// Never retried internally.
    #[error("remote call failed: {0}")]
    Remote(#[from] tonic::Status),

    /// Failure while releasing the connection.
    #[error("shutdown failed: {message}")]
    Shutdown { message: String },
}

impl ClientError {
    /// Create a Configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a Connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a Shutdown error.
    ///
    /// The channel-backed client's `close()` never fails, so this is for
    /// other [`NotificationService`](crate::NotificationService)
    /// implementations (pools, fakes) whose teardown is fallible.
    pub fn shutdown(message: impl Into<String>) -> Self {
        Self::Shutdown {
            message: message.into(),
        }
    }

    /// Whether this error means the client itself is unusable, as opposed to
    /// a single call having failed.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::Connection { .. } | Self::ChannelClosed
        )
    }

    /// The gRPC status code for remote failures.
    pub fn remote_code(&self) -> Option<tonic::Code> {
        match self {
            Self::Remote(status) => Some(status.code()),
            _ => None,
        }
    }

    /// Whether the remote side reported the requested record as missing.
    pub fn is_not_found(&self) -> bool {
        self.remote_code() == Some(tonic::Code::NotFound)
    }

    /// Whether the per-call deadline elapsed before the remote answered.
    pub fn is_deadline_exceeded(&self) -> bool {
        self.remote_code() == Some(tonic::Code::DeadlineExceeded)
    }
}

/// Result type using ClientError.
pub type ClientResult<T> = Result<T, ClientError>;
