//! Low-level tonic stub for the notifications service.
//!
//! A hand-written equivalent of tonic-generated client code: each method is
//! a unary call over the shared channel, using [`super::proto`] types with a
//! `ProstCodec` and the service's static method paths. Deadline and metadata
//! decoration happens above this layer; the stub takes fully-formed
//! `tonic::Request` values and returns the remote result unchanged.

use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;

use super::proto;

/// Raw gRPC stub over an established channel.
///
/// Cheap to clone; clones share the underlying multiplexed channel. Calls
/// take `&mut self` because tonic's readiness check does, so callers clone
/// one stub per call.
#[derive(Debug, Clone)]
pub struct NotificationsStub {
    inner: tonic::client::Grpc<Channel>,
}

impl NotificationsStub {
    /// Wrap an established channel.
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    async fn ready(&mut self) -> Result<(), tonic::Status> {
        self.inner
            .ready()
            .await
            .map_err(|e| tonic::Status::unknown(format!("service was not ready: {}", e)))
    }

    /// Look up the notification types the service supports.
    pub async fn get_notification_types(
        &mut self,
        request: tonic::Request<proto::NotificationTypesRequest>,
    ) -> Result<tonic::Response<proto::NotificationTypesResponse>, tonic::Status> {
        self.ready().await?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            PathAndQuery::from_static("/notifications.v1.Notifications/GetNotificationTypes");
        self.inner.unary(request, path, codec).await
    }

    /// Create a notification record.
    pub async fn create_notification(
        &mut self,
        request: tonic::Request<proto::CreateNotificationRequest>,
    ) -> Result<tonic::Response<proto::NotificationResponse>, tonic::Status> {
        self.ready().await?;
        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static("/notifications.v1.Notifications/CreateNotification");
        self.inner.unary(request, path, codec).await
    }

    /// Fetch a single notification by id.
    pub async fn get_notification(
        &mut self,
        request: tonic::Request<proto::GetNotificationRequest>,
    ) -> Result<tonic::Response<proto::NotificationResponse>, tonic::Status> {
        self.ready().await?;
        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static("/notifications.v1.Notifications/GetNotification");
        self.inner.unary(request, path, codec).await
    }

    /// List notifications for an actor.
    pub async fn get_notifications(
        &mut self,
        request: tonic::Request<proto::GetNotificationsRequest>,
    ) -> Result<tonic::Response<proto::NotificationsResponse>, tonic::Status> {
        self.ready().await?;
        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static("/notifications.v1.Notifications/GetNotifications");
        self.inner.unary(request, path, codec).await
    }

    /// Delete a notification by id.
    pub async fn delete_notification(
        &mut self,
        request: tonic::Request<proto::DeleteNotificationRequest>,
    ) -> Result<tonic::Response<proto::DeleteResponse>, tonic::Status> {
        self.ready().await?;
        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static("/notifications.v1.Notifications/DeleteNotification");
        self.inner.unary(request, path, codec).await
    }
}
