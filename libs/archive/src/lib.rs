//! Article archive scraping library
//!
//! Walks a paginated article archive and extracts article metadata from the
//! JSON-LD blocks embedded in each page.

mod client;
mod error;
mod extract;
pub mod models;

pub use client::ArchiveClient;
pub use error::ArchiveError;
pub use models::Article;

pub type Result<T> = std::result::Result<T, ArchiveError>;
