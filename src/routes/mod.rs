use axum::{Router, routing::get};

use crate::{AppState, middleware::log_errors};

pub mod directory;
pub mod presence;

/// 构建 API 路由，挂载在 `config.api_base_uri` 下（为空或 `/` 时挂在根路径）
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/users", get(presence::users))
        .route("/mean_time_weekday/{user_id}", get(presence::mean_time_weekday))
        .route("/presence_weekday/{user_id}", get(presence::presence_weekday))
        .route("/presence_start_end/{user_id}", get(presence::presence_start_end))
        .route("/users_data", get(directory::users_data));

    let app = match state.config.api_prefix() {
        Some(prefix) => Router::new().nest(&prefix, api),
        None => Router::new().merge(api),
    };
    app.layer(axum::middleware::from_fn(log_errors))
        .with_state(state)
}
