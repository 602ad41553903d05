// 出勤数据：加载、时间计算、按星期聚合

pub mod loader;
pub mod models;
pub mod time;
pub mod weekday;

pub use loader::{load_presence, parse_presence};
pub use models::{Presence, PresenceRecord, PresenceStore, UserId, UserPresence};
pub use time::{interval, mean, seconds_since_midnight};
pub use weekday::{StartEnd, WEEKDAYS, WeekdayBuckets, group_by_start_end, group_by_weekday};
