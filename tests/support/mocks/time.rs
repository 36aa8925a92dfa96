// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};

/// テスト用の固定タイムスタンプ
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// 決定論的なタイムスタンプを返す
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone)]
pub struct FixedClock;

impl pinyin_press::application::ports::time::Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// 呼び出しごとに 1ms 進む時計
#[derive(Default)]
pub struct TickingClock {
    ticks: AtomicI64,
}

impl pinyin_press::application::ports::time::Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::milliseconds(tick)
    }
}
