use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// A job that runs on a fixed interval.
pub trait PeriodicActor: Send + 'static {
    fn name(&self) -> &'static str;

    fn interval(&self) -> Duration;

    fn execute(&mut self) -> impl Future<Output = ()> + Send;
}

/// Handle to a spawned periodic job. The job runs for as long as the
/// handle is held; dropping it stops the job.
pub struct ActorHandle {
    handle: JoinHandle<()>,
}

impl ActorHandle {
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for ActorHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawns the actor onto the runtime. The first tick fires immediately, then
/// every `interval`. Ticks that pile up behind a slow run are skipped.
pub fn spawn_periodic_actor<A: PeriodicActor>(mut actor: A) -> ActorHandle {
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(actor.interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(
            "[Scheduler] Started {} (every {:?})",
            actor.name(),
            actor.interval()
        );

        loop {
            interval.tick().await;
            actor.execute().await;
        }
    });

    ActorHandle { handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingActor {
        runs: Arc<AtomicUsize>,
    }

    impl PeriodicActor for CountingActor {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn interval(&self) -> Duration {
            Duration::from_millis(10)
        }

        async fn execute(&mut self) {
            self.runs.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_actor_runs_immediately_and_repeats() {
        let runs = Arc::new(AtomicUsize::new(0));
        let handle = spawn_periodic_actor(CountingActor { runs: runs.clone() });

        tokio::time::sleep(Duration::from_millis(35)).await;
        handle.shutdown();

        assert!(runs.load(Ordering::SeqCst) >= 2);
    }

    #[tokio::test]
    async fn test_shutdown_stops_the_actor() {
        let runs = Arc::new(AtomicUsize::new(0));
        let handle = spawn_periodic_actor(CountingActor { runs: runs.clone() });

        tokio::time::sleep(Duration::from_millis(15)).await;
        handle.shutdown();
        let after_shutdown = runs.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(runs.load(Ordering::SeqCst), after_shutdown);
    }

    #[tokio::test]
    async fn test_dropping_the_handle_stops_the_actor() {
        let runs = Arc::new(AtomicUsize::new(0));
        let handle = spawn_periodic_actor(CountingActor { runs: runs.clone() });

        tokio::time::sleep(Duration::from_millis(15)).await;
        drop(handle);
        let after_drop = runs.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(runs.load(Ordering::SeqCst), after_drop);
    }
}
