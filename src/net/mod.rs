//! Networking modules for the resource server.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns endpoint paths and failure classification, `http` is the
//! transport seam, and `types` defines the wire schema.

pub mod api;
pub mod http;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;
