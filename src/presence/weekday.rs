use std::ops::{Index, IndexMut};

use chrono::{Datelike, Weekday};

use super::models::UserPresence;
use super::time::{interval, seconds_since_midnight};

/// 周一到周日
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// 按星期分组的数据，固定 7 个槽位（0=周一 … 6=周日）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekdayBuckets<T> {
    buckets: [T; 7],
}

impl<T> WeekdayBuckets<T> {
    /// 按下标取槽位，0=周一
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buckets.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &T)> {
        WEEKDAYS.into_iter().zip(self.buckets.iter())
    }

    /// 对每个槽位做映射，保持 7 个槽位不变
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> WeekdayBuckets<U> {
        WeekdayBuckets {
            buckets: self.buckets.each_ref().map(f),
        }
    }
}

impl<T> Index<Weekday> for WeekdayBuckets<T> {
    type Output = T;

    fn index(&self, weekday: Weekday) -> &T {
        &self.buckets[weekday.num_days_from_monday() as usize]
    }
}

impl<T> IndexMut<Weekday> for WeekdayBuckets<T> {
    fn index_mut(&mut self, weekday: Weekday) -> &mut T {
        &mut self.buckets[weekday.num_days_from_monday() as usize]
    }
}

/// 某个星期几的签到/签退秒数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartEnd {
    pub start: Vec<i64>,
    pub end: Vec<i64>,
}

/// 按星期分组出勤时长（秒），未求平均或求和
pub fn group_by_weekday(items: &UserPresence) -> WeekdayBuckets<Vec<i64>> {
    let mut result = WeekdayBuckets::<Vec<i64>>::default();
    for (date, presence) in items {
        result[date.weekday()].push(interval(presence.start, presence.end));
    }
    result
}

/// 按星期分组签到、签退时刻（距午夜秒数）
pub fn group_by_start_end(items: &UserPresence) -> WeekdayBuckets<StartEnd> {
    let mut result = WeekdayBuckets::<StartEnd>::default();
    for (date, presence) in items {
        let bucket = &mut result[date.weekday()];
        bucket.start.push(seconds_since_midnight(presence.start));
        bucket.end.push(seconds_since_midnight(presence.end));
    }
    result
}
