//! Archive watch service.
//!
//! Checks the article archive for anything published since the last check
//! and pushes a notification when there is. It handles:
//!
//! - Fetching the full archive through the scraping client
//! - Sorting newest-first and filtering against the stored baseline
//! - Delivering the notification and only then advancing the baseline
//!
//! The archive, the notifier and the baseline store sit behind traits so
//! tests can stand in for each of them.

mod adapters;
mod filters;
mod service;
mod traits;

#[cfg(test)]
pub(crate) mod mocks;

pub use adapters::{DefaultArchiveSource, ServiceSource};
pub use service::WatchService;
pub use traits::{ArchiveSource, CheckOutcome, LastCheckedStore, Notifier, WatchError};

pub(crate) use adapters::to_listing_article;
pub(crate) use filters::week_ago;
