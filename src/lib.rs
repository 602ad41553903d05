use std::sync::Arc;

use analyzer::Analyzer;
use config::Config;

pub mod analyzer;
pub mod cache;
pub mod config;
pub mod directory;
pub mod error;
pub mod middleware;
pub mod presence;
pub mod routes;
pub mod utils;

pub use cache::{Guard, TtlCache};
pub use error::{AppError, PresenceError};
pub use presence::{
    PresenceStore, UserPresence, group_by_start_end, group_by_weekday, interval, mean,
    seconds_since_midnight,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let analyzer = Arc::new(Analyzer::new(config.clone()));
        Self { config, analyzer }
    }
}
