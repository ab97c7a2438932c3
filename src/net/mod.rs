//! Networking: REST client, request interceptors and wire types.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues every backend call, `interceptor` decorates outgoing requests
//! with credentials, and `types` holds the JSON DTOs shared by both.

pub mod api;
pub mod interceptor;
pub mod types;
