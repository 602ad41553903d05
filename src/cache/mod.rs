// 缓存模块
// 带过期时间的缓存表和互斥执行保护

pub mod guard;
pub mod keys;
pub mod ttl;

pub use guard::Guard;
pub use ttl::TtlCache;
