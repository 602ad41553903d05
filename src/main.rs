use std::net::{IpAddr, SocketAddr};

use presence_analyzer::{AppState, config::Config, directory::spawn_directory_refresh, routes};
#[cfg(debug_assertions)]
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        "Serving presence data from {} (cache {}s)",
        config.presence_csv_path.display(),
        config.cache_duration_secs
    );

    let state = AppState::new(config.clone());

    // 定期从远程服务器更新用户目录
    if let Some(url) = config.directory_source_url.clone() {
        tracing::info!(
            "Refreshing user directory from {} every {}s",
            url,
            config.directory_refresh_secs
        );
        spawn_directory_refresh(state.analyzer.clone(), url, config.directory_refresh());
    }

    let router = routes::router(state);

    // 开发模式下允许跨域
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(CorsLayer::permissive())
    };

    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        router,
    )
    .await
    .expect("Failed to start server");
}
