//! 缓存槽位名称

/// 出勤数据
pub const PRESENCE_DATA: &str = "get_data";

/// 用户目录
pub const USERS_DATA: &str = "get_users_data";
