//! 統計カウンタのアニメーション
//!
//! 0 から目標値まで 2000ms / 16ms フレームで数え上げる。
//! 途中は切り捨て値、最後のフレームだけ目標値ちょうどを出す。

/// アニメーション全体の長さ（ms）
pub const COUNTER_DURATION_MS: u32 = 2000;

/// 1フレームの間隔（ms、約60FPS）
pub const COUNTER_FRAME_MS: u32 = 16;

/// 何割見えたらアニメーションを始めるか
pub const COUNTER_VISIBLE_THRESHOLD: f64 = 0.3;

/// 数値の後ろに付ける表記
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterSuffix {
    /// "120+"
    #[default]
    Plus,
    /// "24/7" のようなアクセス表記
    OutOfSeven,
}

impl CounterSuffix {
    pub fn format(&self, value: u64) -> String {
        match self {
            CounterSuffix::Plus => format!("{}+", value),
            CounterSuffix::OutOfSeven => format!("{}/7", value),
        }
    }
}

/// フレームごとの表示値を返すイテレータ
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    count: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        let frames = f64::from(COUNTER_DURATION_MS / COUNTER_FRAME_MS);
        Self {
            target,
            increment: target as f64 / frames,
            count: 0.0,
            finished: false,
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.finished {
            return None;
        }

        self.count += self.increment;
        if self.count < self.target as f64 {
            Some(self.count.floor() as u64)
        } else {
            self.finished = true;
            Some(self.target)
        }
    }
}
