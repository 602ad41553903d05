use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::analyzer::Analyzer;
use crate::error::PresenceError;

/// 下载远程用户目录并写入 `dest`
///
/// 先写入同目录下的临时文件再重命名，读取方不会看到写了一半的文件。
pub async fn update_directory(
    client: &reqwest::Client,
    url: &str,
    dest: &Path,
) -> Result<(), PresenceError> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    let tmp = dest.with_extension("download");
    tokio::fs::write(&tmp, &body)
        .await
        .map_err(|e| PresenceError::file_access(&tmp, e))?;
    tokio::fs::rename(&tmp, dest)
        .await
        .map_err(|e| PresenceError::file_access(dest, e))?;

    tracing::info!(
        "Downloaded user directory from {} ({} bytes)",
        url,
        body.len()
    );
    Ok(())
}

/// 周期性刷新用户目录，成功后让缓存的目录失效
pub fn spawn_directory_refresh(
    analyzer: Arc<Analyzer>,
    url: String,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let client = reqwest::Client::new();
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let dest = analyzer.config().directory_xml_path.clone();
            match update_directory(&client, &url, &dest).await {
                Ok(()) => analyzer.invalidate_users_data(),
                Err(e) => tracing::error!("Failed to refresh user directory: {}", e),
            }
        }
    })
}
