use std::sync::Arc;

use crate::cache::{TtlCache, keys};
use crate::config::Config;
use crate::directory::{UserDirectory, load_directory};
use crate::error::PresenceError;
use crate::presence::{PresenceStore, load_presence};

/// 出勤数据和用户目录的缓存入口
///
/// 同一个 [`TtlCache`] 可以在多个 `Analyzer` 之间共享。
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: Config,
    cache: Arc<TtlCache>,
}

impl Analyzer {
    pub fn new(config: Config) -> Self {
        Self::with_cache(config, Arc::new(TtlCache::new()))
    }

    pub fn with_cache(config: Config, cache: Arc<TtlCache>) -> Self {
        Self { config, cache }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 出勤数据，按配置的缓存时长复用
    pub fn get_data(&self) -> Result<Arc<PresenceStore>, PresenceError> {
        self.cache
            .get_or_compute(keys::PRESENCE_DATA, self.config.cache_duration(), || {
                load_presence(&self.config.presence_csv_path)
            })
    }

    /// 用户目录，按配置的缓存时长复用
    pub fn get_users_data(&self) -> Result<Arc<UserDirectory>, PresenceError> {
        self.cache
            .get_or_compute(keys::USERS_DATA, self.config.cache_duration(), || {
                load_directory(&self.config.directory_xml_path)
            })
    }

    pub fn invalidate_users_data(&self) {
        self.cache.invalidate(keys::USERS_DATA);
    }
}
