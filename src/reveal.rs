/// One-way visibility flag behind the entrance animations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    /// Feed one observer report. Returns `true` only on the report that
    /// flips the latch, so the caller knows when to stop observing.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.visible || !is_intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

/// Radius of the skill progress ring, in SVG user units.
pub const RING_RADIUS: f64 = 40.0;

pub fn ring_circumference() -> f64 {
    2.0 * std::f64::consts::PI * RING_RADIUS
}

/// Stroke offset that leaves `level` percent of the ring drawn once
/// revealed. Hidden rings are fully offset.
pub fn ring_offset(level: u8, visible: bool) -> f64 {
    if visible {
        ring_circumference() * (1.0 - f64::from(level.min(100)) / 100.0)
    } else {
        ring_circumference()
    }
}

/// Stagger for card `index`, in seconds.
pub fn stagger_delay(index: usize, step: f64) -> f64 {
    index as f64 * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_flips_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert_eq!(latch, RevealLatch::default());
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
    }

    #[test]
    fn test_latch_never_reverts() {
        let mut latch = RevealLatch::default();
        latch.observe(true);
        let revealed = latch;
        for _ in 0..10 {
            assert!(!latch.observe(false));
            assert_eq!(latch, revealed);
        }
        // a hidden latch would flip again here
        assert!(!latch.observe(true));
    }

    #[test]
    fn test_ring_offset() {
        let full = ring_circumference();
        assert_eq!(ring_offset(80, false), full);
        assert_eq!(ring_offset(0, true), full);
        assert!(ring_offset(100, true).abs() < 1e-9);
        assert!((ring_offset(75, true) - full * 0.25).abs() < 1e-9);
        // levels over 100 draw a full ring
        assert!(ring_offset(150, true).abs() < 1e-9);
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_delay(0, 0.05), 0.0);
        assert!((stagger_delay(3, 0.05) - 0.15).abs() < 1e-9);
    }
}
