use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    AppState,
    directory::UserDirectory,
    error::AppError,
    utils::{ApiResponse, success_to_api_response},
};

/// 完整的用户目录
#[axum::debug_handler]
pub async fn users_data(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Arc<UserDirectory>>>, AppError> {
    let analyzer = state.analyzer.clone();
    let directory = tokio::task::spawn_blocking(move || analyzer.get_users_data()).await??;
    Ok(success_to_api_response(directory))
}
