//! Core types for the dirtool workspace: endpoint descriptors, API
//! configuration, Directory API models and the JSON encode/decode helpers
//! the dispatcher is built on.

pub mod config;
pub mod models;
pub mod render;
pub mod types;

pub use config::ApiConfig;
pub use types::{derive_tool_name, BodyCodec, Endpoint, Method, ParamSpec, ParamType};
