use serde::{Deserialize, Serialize};

use crate::presence::UserId;

/// 用户下拉列表条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub user_id: UserId,
    pub name: String,
    pub avatar: Option<String>,
}

/// ["Mon", 平均值]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayRow(pub String, pub f64);

/// 表头行 ["Weekday", "Presence (s)"] 或数据行 ["Mon", 总秒数]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PresenceRow {
    Total(String, i64),
    Header(String, String),
}

impl PresenceRow {
    pub fn header() -> Self {
        PresenceRow::Header("Weekday".to_string(), "Presence (s)".to_string())
    }
}

/// ["Mon", 平均签到秒数, 平均签退秒数]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartEndRow(pub String, pub f64, pub f64);
