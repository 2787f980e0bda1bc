//! Notifications service API surface.
//!
//! - [`proto`] - Wire-format request/response types (hand-written prost)
//! - [`stub`] - Low-level tonic unary stub over an established channel

pub mod proto;
pub mod stub;
