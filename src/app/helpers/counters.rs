//! Ease-out count-up animation for the About statistics

use std::time::{Duration, Instant};

pub const COUNTER_DURATION: Duration = Duration::from_millis(1500);

/// One "By the Numbers" tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSpec {
    pub label: &'static str,
    pub icon: &'static str,
    pub target: u32,
    pub suffix: &'static str,
}

pub const ABOUT_COUNTERS: [CounterSpec; 3] = [
    CounterSpec {
        label: "Projects",
        icon: "🚀",
        target: 15,
        suffix: "+",
    },
    CounterSpec {
        label: "Hours Coding",
        icon: "⏰",
        target: 800,
        suffix: "+",
    },
    CounterSpec {
        label: "Technologies",
        icon: "🛠️",
        target: 12,
        suffix: "+",
    },
];

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Shared clock for all counters; starts once and never rewinds
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterAnimation {
    started_at: Option<Instant>,
    progress: f32,
}

impl CounterAnimation {
    /// No-op if already started
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.has_started() && self.progress < 1.0
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(start) = self.started_at {
            self.advance(now.saturating_duration_since(start));
        }
    }

    fn advance(&mut self, elapsed: Duration) {
        self.progress = (elapsed.as_secs_f32() / COUNTER_DURATION.as_secs_f32()).min(1.0);
    }

    /// Linear progress in 0..=1
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn value(&self, target: u32) -> u32 {
        (ease_out_cubic(self.progress) * target as f32).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert!(ease_out_cubic(0.0).abs() < f32::EPSILON);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f32::EPSILON);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
        assert!((ease_out_cubic(2.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_counter_idle_until_started() {
        let mut anim = CounterAnimation::default();
        anim.tick(Instant::now());
        assert!(!anim.is_running());
        assert_eq!(anim.value(800), 0);
    }

    #[test]
    fn test_counter_reaches_targets() {
        let mut anim = CounterAnimation::default();
        anim.start(Instant::now());
        assert!(anim.is_running());

        anim.advance(Duration::from_millis(750));
        assert_eq!(anim.value(800), 700);

        anim.advance(COUNTER_DURATION * 2);
        assert!(!anim.is_running());
        for counter in ABOUT_COUNTERS {
            assert_eq!(anim.value(counter.target), counter.target);
        }
    }

    #[test]
    fn test_second_start_keeps_first_clock() {
        let t0 = Instant::now();
        let mut anim = CounterAnimation::default();
        anim.start(t0);
        anim.start(t0 + Duration::from_secs(10));
        anim.tick(t0 + COUNTER_DURATION);
        assert!((anim.progress() - 1.0).abs() < f32::EPSILON);
    }
}
