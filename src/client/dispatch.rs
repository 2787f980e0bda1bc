//! The channel-backed notifications client.
//!
//! Each operation derives a [`CallScope`], decorates the request with the
//! call deadline and caller-identity metadata, and delegates to the stub.
//! Responses and remote errors pass through unchanged; this layer performs
//! no validation, no retries, and no reclassification.
//!
//! The client has exactly two states: Open (after successful construction)
//! and Closed (after [`close`](NotificationsClient::close)). The transition
//! is one-way. `close` should be called only after outstanding operations
//! have completed; it does not interrupt in-flight calls, but any call
//! started after it fails with [`ClientError::ChannelClosed`].

use async_trait::async_trait;
use parking_lot::RwLock;
use tonic::transport::Channel;

use crate::api::proto::{
    CreateNotificationRequest, DeleteNotificationRequest, DeleteResponse, GetNotificationRequest,
    GetNotificationsRequest, NotificationResponse, NotificationTypesRequest,
    NotificationTypesResponse, NotificationsResponse,
};
use crate::api::stub::NotificationsStub;
use crate::client::scope::CallScope;
use crate::client::NotificationService;
use crate::core::config::ClientConfig;
use crate::core::error::{ClientError, ClientResult};
use crate::net::channel::{self, ServiceAddress};
use crate::net::tls::SecurityConfigProvider;

/// Typed client for the notifications service.
///
/// Holds one multiplexed channel for its whole lifetime. Safe to share
/// across tasks: operations take `&self` and each call clones the stub,
/// which shares the underlying connection.
#[derive(Debug)]
pub struct NotificationsClient {
    stub: RwLock<Option<NotificationsStub>>,
    config: ClientConfig,
}

impl NotificationsClient {
    /// Connect to the service address resolved from the environment.
    ///
    /// Fails fast: a provider failure or dial failure returns an error and
    /// no client value.
    pub async fn connect(
        config: ClientConfig,
        provider: &dyn SecurityConfigProvider,
    ) -> ClientResult<Self> {
        config.validate()?;
        let channel = channel::establish(&config, provider).await?;
        Ok(Self::from_channel(channel, config))
    }

    /// Connect to an explicit address, bypassing environment resolution.
    pub async fn connect_to(
        addr: ServiceAddress,
        config: ClientConfig,
        provider: &dyn SecurityConfigProvider,
    ) -> ClientResult<Self> {
        config.validate()?;
        let channel = channel::establish_at(addr, &config, provider).await?;
        Ok(Self::from_channel(channel, config))
    }

    /// Wrap an already-established channel.
    pub fn from_channel(channel: Channel, config: ClientConfig) -> Self {
        Self {
            stub: RwLock::new(Some(NotificationsStub::new(channel))),
            config,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.stub.read().is_none()
    }

    /// Clone the stub for one call, or fail if the channel was released.
    fn stub(&self) -> ClientResult<NotificationsStub> {
        self.stub.read().clone().ok_or(ClientError::ChannelClosed)
    }

    /// Look up the notification types the service supports.
    pub async fn get_notification_types(
        &self,
        request: NotificationTypesRequest,
    ) -> ClientResult<NotificationTypesResponse> {
        let mut stub = self.stub()?;
        let scope = CallScope::new(&self.config);
        let response = stub.get_notification_types(scope.decorate(request)).await?;
        Ok(response.into_inner())
    }

    /// Create a notification record.
    pub async fn create_notification(
        &self,
        request: CreateNotificationRequest,
    ) -> ClientResult<NotificationResponse> {
        let mut stub = self.stub()?;
        let scope = CallScope::new(&self.config);
        let response = stub.create_notification(scope.decorate(request)).await?;
        Ok(response.into_inner())
    }

    /// Fetch a single notification by id.
    pub async fn get_notification(
        &self,
        request: GetNotificationRequest,
    ) -> ClientResult<NotificationResponse> {
        let mut stub = self.stub()?;
        let scope = CallScope::new(&self.config);
        let response = stub.get_notification(scope.decorate(request)).await?;
        Ok(response.into_inner())
    }

    /// List notifications for an actor.
    pub async fn get_notifications(
        &self,
        request: GetNotificationsRequest,
    ) -> ClientResult<NotificationsResponse> {
        let mut stub = self.stub()?;
        let scope = CallScope::new(&self.config);
        let response = stub.get_notifications(scope.decorate(request)).await?;
        Ok(response.into_inner())
    }

    /// Delete a notification by id.
    pub async fn delete_notification(
        &self,
        request: DeleteNotificationRequest,
    ) -> ClientResult<DeleteResponse> {
        let mut stub = self.stub()?;
        let scope = CallScope::new(&self.config);
        let response = stub.delete_notification(scope.decorate(request)).await?;
        Ok(response.into_inner())
    }

    /// Release the connection.
    ///
    /// The channel is released exactly once; a second close is a logged
    /// no-op. Any operation invoked after a successful close fails with
    /// [`ClientError::ChannelClosed`].
    pub fn close(&self) -> ClientResult<()> {
        let released = self.stub.write().take();
        match released {
            Some(_) => {
                tracing::info!("notifications client connection released");
                Ok(())
            }
            None => {
                tracing::debug!("close called on already-closed notifications client");
                Ok(())
            }
        }
    }
}

#[async_trait]
impl NotificationService for NotificationsClient {
    async fn get_notification_types(
        &self,
        request: NotificationTypesRequest,
    ) -> ClientResult<NotificationTypesResponse> {
        NotificationsClient::get_notification_types(self, request).await
    }

    async fn create_notification(
        &self,
        request: CreateNotificationRequest,
    ) -> ClientResult<NotificationResponse> {
        NotificationsClient::create_notification(self, request).await
    }

    async fn get_notification(
        &self,
        request: GetNotificationRequest,
    ) -> ClientResult<NotificationResponse> {
        NotificationsClient::get_notification(self, request).await
    }

    async fn get_notifications(
        &self,
        request: GetNotificationsRequest,
    ) -> ClientResult<NotificationsResponse> {
        NotificationsClient::get_notifications(self, request).await
    }

    async fn delete_notification(
        &self,
        request: DeleteNotificationRequest,
    ) -> ClientResult<DeleteResponse> {
        NotificationsClient::delete_notification(self, request).await
    }

    fn close(&self) -> ClientResult<()> {
        NotificationsClient::close(self)
    }
}
