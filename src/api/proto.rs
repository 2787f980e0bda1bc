//! Protobuf encoding for notifications service types.
//!
//! This module provides manual prost::Message implementations for the
//! notifications API to enable gRPC communication with the service without
//! proto codegen. Field numbers follow the service's published schema and
//! are part of the wire contract.

use prost::{DecodeError, Message};

/// Kind of event a notification describes.
///
/// Wire representation is the protobuf enum value; messages carry it as a
/// raw `i32` the way generated code would.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum NotificationType {
    /// A delivery status change.
    Delivery = 0,
    /// An order status change.
    Order = 1,
    /// An offer made or withdrawn.
    Offer = 2,
}

impl NotificationType {
    /// Decode from the wire value. Unknown values are preserved as `None`
    /// rather than failing the whole message.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Delivery),
            1 => Some(Self::Order),
            2 => Some(Self::Offer),
            _ => None,
        }
    }

    /// The wire value for this type.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

// ============================================================================
// NotificationRecord
// ============================================================================

/// Attribution fields of a notification: who acted, who it concerns, and the
/// transaction it belongs to.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct NotificationRecord {
    pub actor_id: String,       // field 1
    pub subject_id: String,     // field 2
    pub transaction_id: String, // field 3
}

impl Message for NotificationRecord {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        if !self.actor_id.is_empty() {
            prost::encoding::string::encode(1, &self.actor_id, buf);
        }
        if !self.subject_id.is_empty() {
            prost::encoding::string::encode(2, &self.subject_id, buf);
        }
        if !self.transaction_id.is_empty() {
            prost::encoding::string::encode(3, &self.transaction_id, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => prost::encoding::string::merge(wire_type, &mut self.actor_id, buf, ctx),
            2 => prost::encoding::string::merge(wire_type, &mut self.subject_id, buf, ctx),
            3 => prost::encoding::string::merge(wire_type, &mut self.transaction_id, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.actor_id.is_empty() {
            len += prost::encoding::string::encoded_len(1, &self.actor_id);
        }
        if !self.subject_id.is_empty() {
            len += prost::encoding::string::encoded_len(2, &self.subject_id);
        }
        if !self.transaction_id.is_empty() {
            len += prost::encoding::string::encoded_len(3, &self.transaction_id);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Notification
// ============================================================================

/// A stored notification record as returned by the service.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Notification {
    pub id: String,                         // field 1
    pub record: Option<NotificationRecord>, // field 2
    pub content: String,                    // field 3
    pub r#type: i32,                        // field 4
}

impl Message for Notification {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        if !self.id.is_empty() {
            prost::encoding::string::encode(1, &self.id, buf);
        }
        if let Some(ref record) = self.record {
            prost::encoding::message::encode(2, record, buf);
        }
        if !self.content.is_empty() {
            prost::encoding::string::encode(3, &self.content, buf);
        }
        if self.r#type != 0 {
            prost::encoding::int32::encode(4, &self.r#type, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => prost::encoding::string::merge(wire_type, &mut self.id, buf, ctx),
            2 => {
                let mut record = self.record.take().unwrap_or_default();
                prost::encoding::message::merge(wire_type, &mut record, buf, ctx)?;
                self.record = Some(record);
                Ok(())
            }
            3 => prost::encoding::string::merge(wire_type, &mut self.content, buf, ctx),
            4 => prost::encoding::int32::merge(wire_type, &mut self.r#type, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.id.is_empty() {
            len += prost::encoding::string::encoded_len(1, &self.id);
        }
        if let Some(ref record) = self.record {
            len += prost::encoding::message::encoded_len(2, record);
        }
        if !self.content.is_empty() {
            len += prost::encoding::string::encoded_len(3, &self.content);
        }
        if self.r#type != 0 {
            len += prost::encoding::int32::encoded_len(4, &self.r#type);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// NotificationTypesRequest / NotificationTypesResponse
// ============================================================================

/// Request for the set of notification types the service supports.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct NotificationTypesRequest {}

impl Message for NotificationTypesRequest {
    fn encode_raw(&self, _buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        prost::encoding::skip_field(wire_type, tag, buf, ctx)
    }

    fn encoded_len(&self) -> usize {
        0
    }

    fn clear(&mut self) {}
}

/// The notification types the service supports, as raw enum values.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct NotificationTypesResponse {
    pub types: Vec<i32>, // field 1, packed
}

impl Message for NotificationTypesResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        if !self.types.is_empty() {
            prost::encoding::int32::encode_packed(1, &self.types, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => prost::encoding::int32::merge_repeated(wire_type, &mut self.types, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        if self.types.is_empty() {
            0
        } else {
            prost::encoding::int32::encoded_len_packed(1, &self.types)
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// CreateNotificationRequest
// ============================================================================

/// Request to create a notification record.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct CreateNotificationRequest {
    pub actor_id: String,       // field 1
    pub subject_id: String,     // field 2
    pub transaction_id: String, // field 3
    pub content: String,        // field 4
    pub r#type: i32,            // field 5
}

impl Message for CreateNotificationRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        if !self.actor_id.is_empty() {
            prost::encoding::string::encode(1, &self.actor_id, buf);
        }
        if !self.subject_id.is_empty() {
            prost::encoding::string::encode(2, &self.subject_id, buf);
        }
        if !self.transaction_id.is_empty() {
            prost::encoding::string::encode(3, &self.transaction_id, buf);
        }
        if !self.content.is_empty() {
            prost::encoding::string::encode(4, &self.content, buf);
        }
        if self.r#type != 0 {
            prost::encoding::int32::encode(5, &self.r#type, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => prost::encoding::string::merge(wire_type, &mut self.actor_id, buf, ctx),
            2 => prost::encoding::string::merge(wire_type, &mut self.subject_id, buf, ctx),
            3 => prost::encoding::string::merge(wire_type, &mut self.transaction_id, buf, ctx),
            4 => prost::encoding::string::merge(wire_type, &mut self.content, buf, ctx),
            5 => prost::encoding::int32::merge(wire_type, &mut self.r#type, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.actor_id.is_empty() {
            len += prost::encoding::string::encoded_len(1, &self.actor_id);
        }
        if !self.subject_id.is_empty() {
            len += prost::encoding::string::encoded_len(2, &self.subject_id);
        }
        if !self.transaction_id.is_empty() {
            len += prost::encoding::string::encoded_len(3, &self.transaction_id);
        }
        if !self.content.is_empty() {
            len += prost::encoding::string::encoded_len(4, &self.content);
        }
        if self.r#type != 0 {
            len += prost::encoding::int32::encoded_len(5, &self.r#type);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// NotificationResponse
// ============================================================================

/// Response carrying a single notification (create and point lookup).
#[derive(Clone, Default, Debug, PartialEq)]
pub struct NotificationResponse {
    pub notification: Option<Notification>, // field 1
}

impl Message for NotificationResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        if let Some(ref notification) = self.notification {
            prost::encoding::message::encode(1, notification, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => {
                let mut notification = self.notification.take().unwrap_or_default();
                prost::encoding::message::merge(wire_type, &mut notification, buf, ctx)?;
                self.notification = Some(notification);
                Ok(())
            }
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if let Some(ref notification) = self.notification {
            len += prost::encoding::message::encoded_len(1, notification);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// GetNotificationRequest
// ============================================================================

/// Point lookup by notification id.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct GetNotificationRequest {
    pub id: String, // field 1
}

impl Message for GetNotificationRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        if !self.id.is_empty() {
            prost::encoding::string::encode(1, &self.id, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => prost::encoding::string::merge(wire_type, &mut self.id, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.id.is_empty() {
            len += prost::encoding::string::encoded_len(1, &self.id);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// GetNotificationsRequest / NotificationsResponse
// ============================================================================

/// Listing of notifications scoped to an actor.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct GetNotificationsRequest {
    pub actor_id: String, // field 1
}

impl Message for GetNotificationsRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        if !self.actor_id.is_empty() {
            prost::encoding::string::encode(1, &self.actor_id, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => prost::encoding::string::merge(wire_type, &mut self.actor_id, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.actor_id.is_empty() {
            len += prost::encoding::string::encoded_len(1, &self.actor_id);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Response carrying zero or more notifications.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>, // field 1
}

impl Message for NotificationsResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        for notification in &self.notifications {
            prost::encoding::message::encode(1, notification, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => {
                let mut notification = Notification::default();
                prost::encoding::message::merge(wire_type, &mut notification, buf, ctx)?;
                self.notifications.push(notification);
                Ok(())
            }
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        for notification in &self.notifications {
            len += prost::encoding::message::encoded_len(1, notification);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// DeleteNotificationRequest / DeleteResponse
// ============================================================================

/// Delete by notification id.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct DeleteNotificationRequest {
    pub id: String, // field 1
}

impl Message for DeleteNotificationRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        if !self.id.is_empty() {
            prost::encoding::string::encode(1, &self.id, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => prost::encoding::string::merge(wire_type, &mut self.id, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.id.is_empty() {
            len += prost::encoding::string::encoded_len(1, &self.id);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Deletion acknowledgement.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct DeleteResponse {
    pub ok: bool, // field 1
}

impl Message for DeleteResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        if self.ok {
            prost::encoding::bool::encode(1, &self.ok, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => prost::encoding::bool::merge(wire_type, &mut self.ok, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if self.ok {
            len += prost::encoding::bool::encoded_len(1, &self.ok);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}
