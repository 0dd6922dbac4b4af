//! Route handlers, grouped by concern.
//!
//! Each submodule exports a `router()` that the app merges in
//! [`crate::build_router`]. Handlers translate between the wire shapes
//! (camelCase JSON, money as integer cents) and the repositories; business
//! rules stay in stride-core.

pub mod auth;
pub mod catalog;
pub mod orders;
