//! Core domain types
//!
//! This module contains the Tag Manager resource structures used across the
//! Tagwright tools. They mirror the management API's wire shapes and are
//! shared between the HTTP client (transport) and the provisioner (logic).

pub mod parameter;
pub mod scope;
pub mod tag;
pub mod trigger;
pub mod workspace;

/// A remote resource addressed by a server-assigned id and a human-chosen name.
///
/// The name is the only stable handle the provisioning flow keys on; ids are
/// minted by the API at creation time and change when a resource is recreated.
pub trait NamedResource {
    /// Server-assigned resource id
    fn id(&self) -> &str;

    /// Resource name as configured in the workspace
    fn name(&self) -> &str;
}

/// Find the id of the resource whose name equals `name`.
///
/// Exact, case-sensitive equality with no partial matching. Returns the first
/// match; the provisioning flow keeps at most one resource per name, so
/// duplicates only arise from edits made outside this tool.
pub fn find_by_name<'a, R: NamedResource>(resources: &'a [R], name: &str) -> Option<&'a str> {
    resources.iter().find(|r| r.name() == name).map(|r| r.id())
}
