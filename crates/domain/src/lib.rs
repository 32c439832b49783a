//! Tern Domain - Canonical collection model
//!
//! This crate defines the strongly-typed collection model consumed by the
//! rest of the Tern platform (request execution, test-flow orchestration,
//! persistence). All types here are pure Rust with no I/O dependencies.

pub mod collection;
pub mod error;
pub mod method;
pub mod ws;

pub use collection::{
    Collection, CollectionItem, HeaderParam, QueryParam, RequestBody, RequestItem, SYSTEM_AUTHOR,
    WebSocketItem,
};
pub use error::{DomainError, DomainResult};
pub use method::{HttpMethod, WEBSOCKET_METHOD};
pub use ws::WsBodyMode;
