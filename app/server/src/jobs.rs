//! Background jobs driven by a fixed-interval scheduler.

mod actor;
mod watch;

pub use actor::{spawn_periodic_actor, ActorHandle, PeriodicActor};
pub use watch::{create_watch_actor, WatchHandle};
