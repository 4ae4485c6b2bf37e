//! Data-driven dispatch for Directory API endpoints.
//!
//! Where a generated adapter would emit one handler per operation, this
//! crate executes any catalog [`Endpoint`](dirtool_core::Endpoint) through a
//! single code path.

pub mod error;
pub mod executor;

pub use error::DispatchError;
pub use executor::Dispatcher;
