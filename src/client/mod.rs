//! Client surface: the capability contract and its channel-backed
//! implementation.
//!
//! - [`scope`] - Per-call deadline and metadata decoration
//! - [`dispatch`] - The channel-backed [`NotificationsClient`]
//!
//! The five remote capabilities are modeled as one polymorphic contract,
//! [`NotificationService`], so consumers can substitute an in-memory fake in
//! unit tests without a live connection.

pub mod dispatch;
pub mod scope;

use async_trait::async_trait;

use crate::api::proto::{
    CreateNotificationRequest, DeleteNotificationRequest, DeleteResponse, GetNotificationRequest,
    GetNotificationsRequest, NotificationResponse, NotificationTypesRequest,
    NotificationTypesResponse, NotificationsResponse,
};
use crate::core::error::ClientResult;

pub use dispatch::NotificationsClient;
pub use scope::CallScope;

/// The notification service's remote capabilities as a local contract.
///
/// Implemented by the live [`NotificationsClient`] and by test doubles.
/// Every method issues exactly one attempt; resilience policy belongs to the
/// caller.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Look up the notification types the service supports.
    async fn get_notification_types(
        &self,
        request: NotificationTypesRequest,
    ) -> ClientResult<NotificationTypesResponse>;

    /// Create a notification record.
    async fn create_notification(
        &self,
        request: CreateNotificationRequest,
    ) -> ClientResult<NotificationResponse>;

    /// Fetch a single notification by id.
    async fn get_notification(
        &self,
        request: GetNotificationRequest,
    ) -> ClientResult<NotificationResponse>;

    /// List notifications for an actor.
    async fn get_notifications(
        &self,
        request: GetNotificationsRequest,
    ) -> ClientResult<NotificationsResponse>;

    /// Delete a notification by id.
    async fn delete_notification(
        &self,
        request: DeleteNotificationRequest,
    ) -> ClientResult<DeleteResponse>;

    /// Release the underlying connection. After a successful close, every
    /// operation fails deterministically.
    fn close(&self) -> ClientResult<()>;
}
