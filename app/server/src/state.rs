use std::sync::Arc;

use archive::ArchiveClient;
use listing::Loader;
use reqwest::Client;

use crate::config::Config;
use crate::jobs::{create_watch_actor, WatchHandle};
use crate::notify::EmailNotifier;
use crate::services::watch::{DefaultArchiveSource, ServiceSource, WatchService};
use crate::services::LastCheckedService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http_client: Client,
    pub watch: Arc<WatchService>,
    pub loader: Arc<Loader>,
    pub watch_job: Option<Arc<WatchHandle>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let http_client = Client::new();
        let archive = Arc::new(ArchiveClient::new(http_client.clone(), &config.archive_url));

        // Create the persisted check-time store
        let last_checked = Arc::new(LastCheckedService::new(&config.last_checked_dir)?);

        // Create the email notifier
        let notifier = Arc::new(EmailNotifier::new(&config.email)?);

        // Create the watch service over the archive
        let watch = Arc::new(WatchService::new(
            Arc::new(DefaultArchiveSource::new(archive)),
            notifier,
            last_checked,
        ));

        // The page loader reads articles straight from the watch service
        let loader = Arc::new(Loader::new(Arc::new(ServiceSource::new(Arc::clone(&watch)))));

        // Start the periodic check when an interval is configured
        let watch_job = config
            .watch_interval
            .map(|interval| Arc::new(create_watch_actor(Arc::clone(&watch), interval)));

        Ok(Self {
            config: Arc::new(config),
            http_client,
            watch,
            loader,
            watch_job,
        })
    }
}
