pub const MAX_PROGRESS: f64 = 100.0;

/// Whole-number percentage for display.
pub fn display_percent(percent: f64) -> u8 {
    percent.clamp(0.0, MAX_PROGRESS).round() as u8
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    Advanced(f64),
    /// Progress hit the maximum on this tick. Only ever returned once.
    Completed,
    Idle,
}

/// Simulated loading progress, stepped by a periodic timer.
///
/// The raw value may overshoot while ticking; [`LoadingProgress::percent`]
/// reports it clamped. The tick after the raw value reaches 100 pins it and
/// reports [`Tick::Completed`], after which every tick is [`Tick::Idle`].
#[derive(Debug, Clone)]
pub struct LoadingProgress {
    raw: f64,
    max_increment: f64,
    done: bool,
}

impl LoadingProgress {
    pub fn new(max_increment: f64) -> Self {
        Self {
            raw: 0.0,
            max_increment: max_increment.max(0.0),
            done: false,
        }
    }

    /// Advance by `unit * max_increment`, where `unit` is a sample in `[0, 1)`.
    pub fn tick(&mut self, unit: f64) -> Tick {
        if self.done {
            return Tick::Idle;
        }
        if self.raw >= MAX_PROGRESS {
            self.raw = MAX_PROGRESS;
            self.done = true;
            return Tick::Completed;
        }
        self.raw += unit.clamp(0.0, 1.0) * self.max_increment;
        Tick::Advanced(self.percent())
    }

    pub fn percent(&self) -> f64 {
        self.raw.clamp(0.0, MAX_PROGRESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(samples: &[f64]) -> (Vec<f64>, usize) {
        let mut progress = LoadingProgress::new(30.0);
        let mut seen = vec![];
        let mut completions = 0;
        for unit in samples.iter().cycle().take(1000) {
            match progress.tick(*unit) {
                Tick::Advanced(p) => {
                    assert_eq!(completions, 0, "advanced after completion");
                    seen.push(p);
                }
                Tick::Completed => {
                    completions += 1;
                    seen.push(progress.percent());
                }
                Tick::Idle => {}
            }
        }
        (seen, completions)
    }

    #[test]
    fn test_progress_clamped_and_monotonic() {
        let (seen, _) = run_to_completion(&[0.99, 0.5, 0.0, 0.7, 0.2]);
        assert!(seen.iter().all(|p| (0.0..=MAX_PROGRESS).contains(p)));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(seen.last(), Some(&MAX_PROGRESS));
    }

    #[test]
    fn test_completes_exactly_once() {
        let (_, completions) = run_to_completion(&[0.4, 0.9, 0.1]);
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_completion_only_after_full() {
        let mut progress = LoadingProgress::new(30.0);
        // 3 * 30 = 90, not yet done
        for _ in 0..3 {
            assert!(matches!(progress.tick(0.999_999), Tick::Advanced(_)));
        }
        assert!(progress.percent() < MAX_PROGRESS);
        assert!(matches!(progress.tick(0.5), Tick::Advanced(p) if p == MAX_PROGRESS));
        assert_eq!(progress.tick(0.5), Tick::Completed);
        assert_eq!(display_percent(progress.percent()), 100);
        assert_eq!(progress.tick(0.5), Tick::Idle);
    }

    #[test]
    fn test_zero_samples_never_complete() {
        let mut progress = LoadingProgress::new(30.0);
        for _ in 0..100 {
            assert_eq!(progress.tick(0.0), Tick::Advanced(0.0));
        }
    }

    #[test]
    fn test_display_rounding() {
        assert_eq!(display_percent(0.4), 0);
        assert_eq!(display_percent(49.5), 50);
        assert_eq!(display_percent(112.0), 100);
        assert_eq!(display_percent(-1.0), 0);
    }

    #[test]
    fn test_out_of_range_samples_are_clamped() {
        let mut progress = LoadingProgress::new(30.0);
        assert_eq!(progress.tick(-3.0), Tick::Advanced(0.0));
        assert_eq!(progress.tick(7.0), Tick::Advanced(30.0));
        assert_eq!(display_percent(progress.percent()), 30);
    }
}
