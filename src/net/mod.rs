//! Networking: transport security and channel establishment.
//!
//! - [`tls`] - Security-config provider producing client TLS configurations
//! - [`channel`] - Address resolution and channel establishment

pub mod channel;
pub mod tls;
