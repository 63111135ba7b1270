//! Query answering.
//!
//! [`QueryEngine`] owns the loaded network and answers each [`Request`]
//! with a [`Response`]. Not-found conditions are answers, not errors.

mod engine;
mod request;

pub use engine::{EngineError, QueryEngine};
pub use request::{Answer, Query, Request, RequestId, Response};
