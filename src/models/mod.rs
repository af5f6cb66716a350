//! Data models for the community directory client.
//!
//! Wire shapes match the backend's JSON contract exactly; strict models are
//! produced from them at the fetch boundary.

mod member;

pub use member::*;
