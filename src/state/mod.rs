//! Client-side state.
//!
//! DESIGN
//! ======
//! `session` is the pure model and reducer; `store` wraps it with
//! persistence so controllers only ever see `dispatch` and read accessors.

pub mod session;
pub mod store;
