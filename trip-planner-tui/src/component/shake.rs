//! 抖动动画（失败反馈）

use std::time::{Duration, Instant};

/// 默认抖动时长
pub const SHAKE_ANIMATION_TIMEOUT: Duration = Duration::from_millis(600);

/// 每次左右摆动的间隔
const SHAKE_STEP: Duration = Duration::from_millis(50);

/// 横向摆动幅度（列）
const SHAKE_AMPLITUDE: u16 = 2;

/// 一次进行中的抖动
#[derive(Debug, Clone, Copy)]
pub struct Shake {
    started_at: Instant,
    duration: Duration,
}

impl Shake {
    pub fn start(duration: Duration) -> Self {
        Self {
            started_at: Instant::now(),
            duration,
        }
    }

    /// 当前帧的横向偏移
    pub fn offset(&self, now: Instant) -> u16 {
        if self.is_finished(now) {
            return 0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let step = elapsed.as_millis() / SHAKE_STEP.as_millis();
        if step % 2 == 0 {
            SHAKE_AMPLITUDE
        } else {
            0
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}
