use chrono::{NaiveTime, Timelike};

/// 计算从午夜开始经过的秒数
pub fn seconds_since_midnight(time: NaiveTime) -> i64 {
    time.hour() as i64 * 3600 + time.minute() as i64 * 60 + time.second() as i64
}

/// 计算两个时间点之间的秒数差
///
/// 结果是带符号的差值：结束时间早于开始时间时返回负数，不做校验。
pub fn interval(start: NaiveTime, end: NaiveTime) -> i64 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}

/// 算术平均值，空序列返回 0
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}
