use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

pub type UserId = u32;

/// 单日的签到/签退时间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presence {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// 数据文件中的一行出勤记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceRecord {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl PresenceRecord {
    pub fn presence(&self) -> Presence {
        Presence {
            start: self.start,
            end: self.end,
        }
    }
}

/// 单个用户按日期索引的出勤数据
pub type UserPresence = BTreeMap<NaiveDate, Presence>;

/// 全部用户的出勤数据: user_id -> date -> {start, end}
pub type PresenceStore = BTreeMap<UserId, UserPresence>;
