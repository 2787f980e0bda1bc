//! Per-call scope: deadline and caller-identity metadata.
//!
//! Every outbound call derives a scope from the client configuration at call
//! entry. The scope fixes the absolute deadline (call start + dial timeout)
//! and carries the `service-client` metadata entry; decoration applies both
//! to the outgoing request. The scope is a plain value dropped when the call
//! returns, on every exit path.

use std::time::{Duration, Instant};

use tonic::metadata::AsciiMetadataValue;

use crate::core::config::{ClientConfig, DEFAULT_CLIENT_NAME};

/// Metadata key carrying the caller identity on every outbound call.
pub const SERVICE_CLIENT_METADATA_KEY: &str = "service-client";

/// Scoped call context bounding one remote call.
#[derive(Debug)]
pub struct CallScope {
    started_at: Instant,
    timeout: Duration,
    caller: AsciiMetadataValue,
}

impl CallScope {
    /// Derive a scope for a call starting now.
    pub fn new(config: &ClientConfig) -> Self {
        let identity = config.caller_identity();
        let caller = AsciiMetadataValue::try_from(identity).unwrap_or_else(|_| {
            tracing::warn!(
                caller = identity,
                "caller identity is not valid metadata, using default client name"
            );
            AsciiMetadataValue::from_static(DEFAULT_CLIENT_NAME)
        });

        Self {
            started_at: Instant::now(),
            timeout: config.dial_timeout(),
            caller,
        }
    }

    /// The absolute deadline for this call.
    pub fn deadline(&self) -> Instant {
        self.started_at + self.timeout
    }

    /// The caller identity attached to this call.
    pub fn caller(&self) -> &AsciiMetadataValue {
        &self.caller
    }

    /// Wrap a message in a request carrying this scope's deadline and
    /// metadata. The timeout travels as `grpc-timeout`, so the remote side
    /// sees the same bound the client enforces.
    pub fn decorate<T>(&self, message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);
        request.set_timeout(self.timeout);
        request
            .metadata_mut()
            .insert(SERVICE_CLIENT_METADATA_KEY, self.caller.clone());
        request
    }
}
