mod last_checked;
pub mod watch;

pub use last_checked::{LastCheckedError, LastCheckedService};
pub use watch::{
    CheckOutcome, DefaultArchiveSource, ServiceSource, WatchError, WatchService,
};
