//! Tagwright Core
//!
//! Core types for the Tagwright provisioning tools.
//!
//! This crate contains:
//! - Domain types: Tag Manager resources (Tag, Trigger, Workspace) and the
//!   scope paths that address them
//! - DTOs: Request payloads and list envelopes for the management API

pub mod domain;
pub mod dto;
