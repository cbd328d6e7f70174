//! Data Transfer Objects for the management API
//!
//! This module contains the request payloads sent when creating resources
//! and the envelopes the list endpoints wrap their collections in. Payloads
//! are the domain shapes minus the server-assigned fields.

pub mod tag;
pub mod trigger;
pub mod workspace;
