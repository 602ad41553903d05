use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::AppError,
    presence::{PresenceStore, UserId, group_by_start_end, group_by_weekday, mean},
    utils::{ApiResponse, success_to_api_response},
};

use super::model::{PresenceRow, StartEndRow, UserInfo, WeekdayRow};

async fn load_store(state: &AppState) -> Result<Arc<PresenceStore>, AppError> {
    let analyzer = state.analyzer.clone();
    Ok(tokio::task::spawn_blocking(move || analyzer.get_data()).await??)
}

/// 用户列表，姓名和头像优先取自用户目录
#[axum::debug_handler]
pub async fn users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserInfo>>>, AppError> {
    let analyzer = state.analyzer.clone();
    let (store, directory) = tokio::task::spawn_blocking(move || {
        let store = analyzer.get_data()?;
        let directory = analyzer
            .get_users_data()
            .inspect_err(|e| tracing::warn!("User directory unavailable: {}", e))
            .ok();
        Ok::<_, crate::PresenceError>((store, directory))
    })
    .await??;

    let users = store
        .keys()
        .map(|&user_id| {
            let entry = directory
                .as_ref()
                .and_then(|directory| directory.get(&user_id.to_string()));
            UserInfo {
                user_id,
                name: entry.map_or_else(|| format!("User {}", user_id), |e| e.name.clone()),
                avatar: entry.map(|e| e.avatar.clone()),
            }
        })
        .collect();

    Ok(success_to_api_response(users))
}

/// 按星期统计的平均出勤时长
#[axum::debug_handler]
pub async fn mean_time_weekday(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<ApiResponse<Vec<WeekdayRow>>>, AppError> {
    let store = load_store(&state).await?;
    let Some(items) = store.get(&user_id) else {
        tracing::debug!("User {} not found!", user_id);
        return Ok(success_to_api_response(Vec::new()));
    };

    let rows = group_by_weekday(items)
        .iter()
        .map(|(weekday, intervals)| WeekdayRow(weekday.to_string(), mean(intervals)))
        .collect();

    Ok(success_to_api_response(rows))
}

/// 按星期统计的出勤总时长，首行为表头
#[axum::debug_handler]
pub async fn presence_weekday(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<ApiResponse<Vec<PresenceRow>>>, AppError> {
    let store = load_store(&state).await?;
    let Some(items) = store.get(&user_id) else {
        tracing::debug!("User {} not found!", user_id);
        return Ok(success_to_api_response(Vec::new()));
    };

    let rows = std::iter::once(PresenceRow::header())
        .chain(
            group_by_weekday(items)
                .iter()
                .map(|(weekday, intervals)| {
                    PresenceRow::Total(weekday.to_string(), intervals.iter().sum())
                }),
        )
        .collect();

    Ok(success_to_api_response(rows))
}

/// 按星期统计的平均签到、签退时刻
#[axum::debug_handler]
pub async fn presence_start_end(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<ApiResponse<Vec<StartEndRow>>>, AppError> {
    let store = load_store(&state).await?;
    let Some(items) = store.get(&user_id) else {
        tracing::debug!("User {} not found!", user_id);
        return Ok(success_to_api_response(Vec::new()));
    };

    let rows = group_by_start_end(items)
        .iter()
        .map(|(weekday, times)| {
            StartEndRow(weekday.to_string(), mean(&times.start), mean(&times.end))
        })
        .collect();

    Ok(success_to_api_response(rows))
}
