//! Shared helpers: storage backends, routing, the auth guard and field checks.

pub mod guard;
pub mod router;
pub mod storage;
pub mod validate;
