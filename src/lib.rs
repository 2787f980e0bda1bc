//! Typed gRPC client for the notifications service.
//!
//! This crate exposes the notification service's remote operations (types
//! lookup, create, get, list, delete) as a local, typed interface over one
//! secured, long-lived channel. Consuming services emit and query
//! notifications without knowing connection details, transport security, or
//! request metadata conventions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    NotificationsClient                      │
//! │        (five typed operations, close, Open/Closed)          │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        CallScope                            │
//! │      deadline = now + dial timeout │ service-client md      │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────┐
//! │               NotificationsStub over Channel                │
//! │      unary calls, hand-written prost wire types (api)       │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────┐
//! │            Channel establishment (net::channel)             │
//! │   env address resolution │ TLS from SecurityConfigProvider  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - [`core::config`] - Client configuration, defaults, validation
//! - [`core::error`] - Error taxonomy and classification helpers
//! - [`api::proto`] - Wire-format request/response types
//! - [`api::stub`] - Low-level tonic unary stub
//! - [`net::tls`] - Security-config provider and TLS setup
//! - [`net::channel`] - Address resolution and channel establishment
//! - [`client::scope`] - Per-call deadline and metadata decoration
//! - [`client::dispatch`] - The channel-backed client
//!
//! # Example
//!
//! ```no_run
//! use notifications_client::{
//!     ClientConfig, FileSecurityProvider, NotificationsClient,
//!     proto::{CreateNotificationRequest, NotificationType},
//! };
//!
//! # async fn example() -> notifications_client::ClientResult<()> {
//! let config = ClientConfig::default().with_caller("shop-service");
//! let provider = FileSecurityProvider::from_env();
//! let client = NotificationsClient::connect(config, &provider).await?;
//!
//! let response = client
//!     .create_notification(CreateNotificationRequest {
//!         actor_id: "shop-1".to_string(),
//!         subject_id: "delivery-1".to_string(),
//!         transaction_id: "offer-1".to_string(),
//!         content: "from shop".to_string(),
//!         r#type: NotificationType::Delivery.as_i32(),
//!     })
//!     .await?;
//!
//! client.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Guarantees
//!
//! - Construction fails closed: any provider or dial failure yields an error
//!   and no client value.
//! - Every call is bounded by the dial timeout and carries the
//!   `service-client` metadata entry.
//! - Exactly one attempt per call; no retries, no reordering.
//! - After `close`, operations fail deterministically with a channel-closed
//!   error.

// Core infrastructure
pub mod core;

// Wire types and stub
pub mod api;

// Networking
pub mod net;

// Client surface
pub mod client;

// Re-exports for convenience
pub use self::core::config::{ClientConfig, DEFAULT_CLIENT_NAME};
pub use self::core::error::{ClientError, ClientResult};
pub use api::proto;
pub use client::scope::SERVICE_CLIENT_METADATA_KEY;
pub use client::{CallScope, NotificationService, NotificationsClient};
pub use net::channel::ServiceAddress;
pub use net::tls::{FileSecurityProvider, SecurityConfigProvider, SecurityTarget};
