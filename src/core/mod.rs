//! Core client infrastructure.
//!
//! This module contains the essential components shared across the client:
//! - [`config`] - Client configuration, defaults, and validation
//! - [`error`] - Error taxonomy and classification helpers

pub mod config;
pub mod error;
