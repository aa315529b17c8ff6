//! The LiveChat client.
//!
//! This module provides [`LivechatClient`], which owns the HTTP connection
//! pool and exposes one async method per API operation, all funneled
//! through a single instrumented dispatch routine.

mod executor;

pub use executor::LivechatClient;
