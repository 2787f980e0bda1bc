//! Channel establishment.
//!
//! Resolves the service address from the environment, applies the transport
//! security configuration from the provider, and dials one multiplexed
//! channel. Construction fails fast: any provider or dial failure yields an
//! error and no channel.

use std::time::Duration;

use tonic::transport::{Channel, Endpoint};

use crate::core::config::{ClientConfig, DEFAULT_SERVICE_HOST, DEFAULT_SERVICE_PORT};
use crate::core::error::{ClientError, ClientResult};
use crate::net::tls::{SecurityConfigProvider, SecurityTarget};

/// Environment variable naming the service host.
pub const SERVICE_HOST_ENV: &str = "NOTIFICATIONS_SERVICE_HOST";

/// Environment variable naming the service port.
pub const SERVICE_PORT_ENV: &str = "NOTIFICATIONS_SERVICE_PORT";

/// Resolved service address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAddress {
    /// Service host.
    pub host: String,
    /// Service port.
    pub port: String,
}

impl ServiceAddress {
    /// Resolve from `NOTIFICATIONS_SERVICE_HOST` / `NOTIFICATIONS_SERVICE_PORT`,
    /// with documented fallbacks.
    pub fn from_env() -> Self {
        let host =
            std::env::var(SERVICE_HOST_ENV).unwrap_or_else(|_| DEFAULT_SERVICE_HOST.to_string());
        let port =
            std::env::var(SERVICE_PORT_ENV).unwrap_or_else(|_| DEFAULT_SERVICE_PORT.to_string());
        Self { host, port }
    }

    /// A direct host:port address.
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    /// The endpoint URI for this address. Plaintext addresses use `http`,
    /// secured ones `https`.
    pub fn uri(&self, insecure: bool) -> String {
        let scheme = if insecure { "http" } else { "https" };
        format!("{}://{}:{}", scheme, self.host, self.port)
    }
}

impl std::fmt::Display for ServiceAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Establish a secured channel to the service address resolved from the
/// environment.
pub async fn establish(
    config: &ClientConfig,
    provider: &dyn SecurityConfigProvider,
) -> ClientResult<Channel> {
    establish_at(ServiceAddress::from_env(), config, provider).await
}

/// Establish a channel to an explicit address.
pub async fn establish_at(
    addr: ServiceAddress,
    config: &ClientConfig,
    provider: &dyn SecurityConfigProvider,
) -> ClientResult<Channel> {
    let mut endpoint = endpoint_for(&addr, config)?;

    if config.insecure {
        tracing::warn!(%addr, "connecting without transport security");
    } else {
        let tls = provider
            .client_tls(SecurityTarget::NotificationsClient)
            .map_err(|e| {
                tracing::error!(%addr, error = %e, "error setting notifications client TLS");
                e
            })?;
        endpoint = endpoint.tls_config(tls).map_err(|e| {
            tracing::error!(%addr, error = %e, "invalid TLS configuration for endpoint");
            ClientError::configuration(format!("TLS configuration rejected: {}", e))
        })?;
        tracing::info!(%addr, "notifications client TLS configured");
    }

    let channel = endpoint.connect().await.map_err(|e| {
        tracing::error!(%addr, error = %e, "notifications client failed to connect");
        ClientError::connection(format!("failed to connect to {}: {}", addr, e))
    })?;

    tracing::info!(host = %addr.host, port = %addr.port, "notifications client connected");
    Ok(channel)
}

/// Build the endpoint with the configured dial timeout, per-call upper
/// bound, and keep-alive settings.
fn endpoint_for(addr: &ServiceAddress, config: &ClientConfig) -> ClientResult<Endpoint> {
    let uri = addr.uri(config.insecure);
    let endpoint = Endpoint::from_shared(uri.clone())
        .map_err(|e| ClientError::connection(format!("invalid service address {}: {}", uri, e)))?
        .connect_timeout(config.dial_timeout())
        .timeout(config.dial_timeout())
        .http2_keep_alive_interval(config.keep_alive_interval())
        .keep_alive_timeout(config.keep_alive_timeout())
        .tcp_keepalive(Some(Duration::from_secs(60)));
    Ok(endpoint)
}
