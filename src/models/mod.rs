//! Typed views over known SimilarWeb response shapes.
//!
//! The client always hands back the raw payload; these types are optional
//! conveniences for callers that want structured access instead of poking
//! at `serde_json::Value`.

mod traffic;
mod visits;

pub use traffic::*;
pub use visits::*;
