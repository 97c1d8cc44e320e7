//! Watch Actor
//!
//! Periodically checks the archive and sends notifications for new articles.

use std::sync::Arc;
use std::time::Duration;

use crate::services::watch::{CheckOutcome, WatchService};

use super::actor::{spawn_periodic_actor, ActorHandle, PeriodicActor};

/// Handle for the background watch job
pub type WatchHandle = ActorHandle;

struct WatchActor {
    watch: Arc<WatchService>,
    interval: Duration,
}

impl PeriodicActor for WatchActor {
    fn interval(&self) -> Duration {
        self.interval
    }

    fn name(&self) -> &'static str {
        "watch"
    }

    async fn execute(&mut self) {
        match self.watch.check_and_notify().await {
            Ok(CheckOutcome::Notified { count }) => {
                tracing::info!("[Watch] Notified about {} new articles", count);
            }
            Ok(CheckOutcome::NoNewArticles) => {}
            Err(e) => {
                tracing::error!("[Watch] Scheduled check failed: {}", e);
            }
        }
    }
}

/// Create and start the watch actor
pub fn create_watch_actor(watch: Arc<WatchService>, interval: Duration) -> WatchHandle {
    spawn_periodic_actor(WatchActor { watch, interval })
}
