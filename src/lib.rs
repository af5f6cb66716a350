//! Community Directory Client
//!
//! Client-side subsystem for a paginated, lazily-loaded, searchable member
//! directory backed by a REST API. Pages are fetched one at a time under a
//! single-flight guard, accumulated in an ordered deduplicated store,
//! narrowed by a pure free-text filter, and grown by an edge-triggered
//! scroll sentinel watching the filtered view's tail.

pub mod config;
pub mod directory;
pub mod errors;
pub mod fetch;
pub mod models;
pub mod search;
pub mod sentinel;
pub mod store;

pub use config::Config;
pub use directory::Directory;
pub use errors::AppError;
pub use fetch::{FetchState, PageFetcher};
pub use models::{CurrentUser, Member};
pub use sentinel::ScrollSentinel;
pub use store::MemberStore;
