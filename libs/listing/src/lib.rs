//! Article list rendering
//!
//! Fetches an article feed and renders it into a container as HTML
//! fragments, with escaping on by default and a fixed placeholder when the
//! list is empty. The host page owns the container element; this crate only
//! ever replaces its children.

mod error;
mod loader;
pub mod models;
mod render;

pub use error::{FeedError, LoadError, RenderError};
pub use loader::{ArticleSource, FeedClient, LoadOutcome, Loader};
pub use models::Article;
pub use render::{render, Container, Fragment};
