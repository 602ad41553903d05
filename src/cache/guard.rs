use parking_lot::Mutex;

/// 互斥执行保护
///
/// 同一时刻只有一个调用者在执行被保护的计算，其余调用者阻塞排队。
/// 计算返回错误或 panic 时锁同样会被释放。
#[derive(Debug, Default)]
pub struct Guard {
    lock: Mutex<()>,
}

impl Guard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        let _held = self.lock.lock();
        f()
    }
}
