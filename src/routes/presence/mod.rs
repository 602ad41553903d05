mod handler;
mod model;

pub use handler::{mean_time_weekday, presence_start_end, presence_weekday, users};
pub use model::{PresenceRow, StartEndRow, UserInfo, WeekdayRow};
