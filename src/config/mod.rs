use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_CACHE_DURATION_SECS: u64 = 600;
const DEFAULT_DIRECTORY_REFRESH_SECS: u64 = 3600;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub presence_csv_path: PathBuf,
    pub directory_xml_path: PathBuf,
    pub cache_duration_secs: u64,
    pub directory_source_url: Option<String>,
    pub directory_refresh_secs: u64,
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
}

impl Config {
    /// 默认配置，只需给出两个数据文件路径
    pub fn new(presence_csv_path: impl Into<PathBuf>, directory_xml_path: impl Into<PathBuf>) -> Self {
        Config {
            presence_csv_path: presence_csv_path.into(),
            directory_xml_path: directory_xml_path.into(),
            cache_duration_secs: DEFAULT_CACHE_DURATION_SECS,
            directory_source_url: None,
            directory_refresh_secs: DEFAULT_DIRECTORY_REFRESH_SECS,
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            api_base_uri: "/api/v1".to_string(),
        }
    }

    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        let defaults = Config::new(env::var("DATA_CSV")?, env::var("DATA_XML")?);
        Ok(Config {
            cache_duration_secs: parse_or("CACHE_DURATION", defaults.cache_duration_secs),
            directory_source_url: env::var("DATA_XML_URL").ok().filter(|url| !url.is_empty()),
            directory_refresh_secs: parse_or("DATA_XML_REFRESH", defaults.directory_refresh_secs),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| defaults.server_host.clone()),
            server_port: parse_or("SERVER_PORT", defaults.server_port),
            api_base_uri: env::var("API_BASE_URI").unwrap_or_else(|_| defaults.api_base_uri.clone()),
            ..defaults
        })
    }

    pub fn cache_duration(&self) -> Duration {
        Duration::from_secs(self.cache_duration_secs)
    }

    pub fn directory_refresh(&self) -> Duration {
        Duration::from_secs(self.directory_refresh_secs)
    }

    /// 规范化后的 API 前缀：以 `/` 开头、不以 `/` 结尾；挂在根路径时为 `None`
    pub fn api_prefix(&self) -> Option<String> {
        let trimmed = self.api_base_uri.trim().trim_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(format!("/{trimmed}"))
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {}={:?}, using default", key, value);
            default
        }),
        Err(_) => default,
    }
}
