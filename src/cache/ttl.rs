use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use super::guard::Guard;

type Payload = Arc<dyn Any + Send + Sync>;

/// 缓存条目，刷新时整体替换，不做原地修改
struct CacheEntry {
    result: Payload,
    /// `None` 表示时长超出 `Instant` 可表示范围，永不过期
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| at > now)
    }
}

#[derive(Default)]
struct Slot {
    entry: RwLock<Option<CacheEntry>>,
    guard: Guard,
}

impl Slot {
    fn fresh<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        let entry = self.entry.read();
        let entry = entry.as_ref()?;
        if !entry.is_fresh(Instant::now()) {
            return None;
        }
        match entry.result.clone().downcast::<T>() {
            Ok(result) => Some(result),
            Err(_) => {
                tracing::warn!("Cache entry {} holds a different type, recomputing", name);
                None
            }
        }
    }
}

/// 带过期时间的缓存表
///
/// 每个名称对应一个独立槽位。读取未过期的条目只需要读锁；
/// 条目缺失或过期时，由槽位自己的 [`Guard`] 保证同一时刻只有一个调用者重新计算并发布结果。
/// 过期只在访问时检查，不会主动清理。
#[derive(Default)]
pub struct TtlCache {
    slots: RwLock<HashMap<String, Arc<Slot>>>,
}

impl TtlCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 返回名为 `name` 的缓存结果；缺失或已过期时调用 `compute` 并缓存 `ttl` 时长
    ///
    /// `compute` 的错误原样返回，不会写入缓存。
    pub fn get_or_compute<T, E, F>(&self, name: &str, ttl: Duration, compute: F) -> Result<Arc<T>, E>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Result<T, E>,
    {
        let slot = self.slot(name);
        if let Some(result) = slot.fresh::<T>(name) {
            return Ok(result);
        }

        slot.guard.run(|| {
            // 排队期间可能已有其他调用者发布了新结果
            if let Some(result) = slot.fresh::<T>(name) {
                return Ok(result);
            }

            tracing::debug!("Refreshing cache entry {}", name);
            let result = Arc::new(compute()?);
            *slot.entry.write() = Some(CacheEntry {
                result: result.clone(),
                expires_at: Instant::now().checked_add(ttl),
            });
            Ok(result)
        })
    }

    /// 丢弃缓存条目，下次访问时重新计算
    pub fn invalidate(&self, name: &str) {
        let slot = self.slots.read().get(name).cloned();
        if let Some(slot) = slot {
            tracing::debug!("Invalidating cache entry {}", name);
            *slot.entry.write() = None;
        }
    }

    fn slot(&self, name: &str) -> Arc<Slot> {
        if let Some(slot) = self.slots.read().get(name) {
            return slot.clone();
        }
        self.slots
            .write()
            .entry(name.to_string())
            .or_default()
            .clone()
    }
}

impl fmt::Debug for TtlCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.slots.read();
        f.debug_struct("TtlCache")
            .field("slots", &slots.keys().collect::<Vec<_>>())
            .finish()
    }
}
