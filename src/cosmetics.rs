//! Randomized decorations: star fields, floating particles, binary rain,
//! and the custom cursor's hover rule.
//!
//! Everything takes a `FnMut() -> f64` sampler returning values in `[0, 1)`
//! so the browser can pass `Math.random` and tests a fixed sequence.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container.
    pub left: f64,
    /// Vertical position, percent of the container.
    pub top: f64,
    /// Diameter in px.
    pub size: f64,
    /// Animation period in seconds.
    pub duration: f64,
    /// Animation delay in seconds.
    pub delay: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; animation-duration: {:.2}s; animation-delay: {:.2}s",
            self.left, self.top, self.size, self.size, self.duration, self.delay
        )
    }
}

/// Twinkling stars: 1-4px, 2-5s period, up to 2s delay.
pub fn star_field(count: usize, mut sample: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let size = sample() * 3.0 + 1.0;
            let duration = sample() * 3.0 + 2.0;
            let delay = sample() * 2.0;
            Particle {
                left: sample() * 100.0,
                top: sample() * 100.0,
                size,
                duration,
                delay,
            }
        })
        .collect()
}

/// Fixed-size dots drifting with a 3-5s period.
pub fn drifting_dots(count: usize, size: f64, mut sample: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left: sample() * 100.0,
            top: sample() * 100.0,
            size,
            duration: 3.0 + sample() * 2.0,
            delay: sample() * 2.0,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainDrop {
    pub left: f64,
    pub duration: f64,
    pub delay: f64,
    pub digit: char,
}

/// Falling binary digits, one column every 5%.
pub fn binary_rain(columns: usize, mut sample: impl FnMut() -> f64) -> Vec<RainDrop> {
    (0..columns)
        .map(|i| RainDrop {
            left: i as f64 * 5.0,
            duration: 10.0 + sample() * 5.0,
            delay: sample() * 5.0,
            digit: if sample() > 0.5 { '1' } else { '0' },
        })
        .collect()
}

/// The custom cursor only shows on large screens; `input.css` hides the
/// native cursor at the same breakpoint.
pub const CURSOR_VISIBILITY: &str = "hidden lg:block";

/// Whether the element under the pointer should enlarge the cursor ring.
pub fn is_clickable(tag_name: &str, computed_cursor: Option<&str>) -> bool {
    computed_cursor == Some("pointer")
        || tag_name.eq_ignore_ascii_case("button")
        || tag_name.eq_ignore_ascii_case("a")
}

/// Outer ring and inner dot offsets, centered on the pointer.
pub fn cursor_offsets(x: f64, y: f64) -> ((f64, f64), (f64, f64)) {
    ((x - 16.0, y - 16.0), (x - 4.0, y - 4.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cycles through `values` forever.
    fn sequence(values: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn test_star_ranges() {
        let stars = star_field(50, sequence(&[0.0, 0.25, 0.5, 0.75, 0.999]));
        assert_eq!(stars.len(), 50);
        for s in &stars {
            assert!((1.0..4.0).contains(&s.size));
            assert!((2.0..5.0).contains(&s.duration));
            assert!((0.0..2.0).contains(&s.delay));
            assert!((0.0..100.0).contains(&s.left));
            assert!((0.0..100.0).contains(&s.top));
        }
    }

    #[test]
    fn test_star_field_from_fixed_sample() {
        let stars = star_field(1, sequence(&[0.5]));
        assert_eq!(
            stars,
            vec![Particle {
                left: 50.0,
                top: 50.0,
                size: 2.5,
                duration: 3.5,
                delay: 1.0,
            }]
        );
    }

    #[test]
    fn test_dots_keep_size() {
        let dots = drifting_dots(30, 4.0, sequence(&[0.1, 0.9]));
        assert_eq!(dots.len(), 30);
        assert!(dots.iter().all(|d| d.size == 4.0));
        assert!(dots.iter().all(|d| (3.0..5.0).contains(&d.duration)));
    }

    #[test]
    fn test_binary_rain_columns() {
        let drops = binary_rain(20, sequence(&[0.2, 0.4, 0.9, 0.6, 0.1, 0.3]));
        assert_eq!(drops.len(), 20);
        assert_eq!(drops[0].left, 0.0);
        assert_eq!(drops[19].left, 95.0);
        assert_eq!(drops[0].digit, '1');
        assert_eq!(drops[1].digit, '0');
        assert!(drops.iter().all(|d| d.digit == '0' || d.digit == '1'));
        assert!(drops.iter().all(|d| (10.0..15.0).contains(&d.duration)));
    }

    #[test]
    fn test_clickable_rules() {
        assert!(is_clickable("BUTTON", None));
        assert!(is_clickable("A", Some("auto")));
        assert!(is_clickable("DIV", Some("pointer")));
        assert!(!is_clickable("DIV", Some("default")));
        assert!(!is_clickable("SPAN", None));
    }

    #[test]
    fn test_cursor_breakpoint_matches_stylesheet() {
        let css = include_str!("../input.css");
        assert_eq!(CURSOR_VISIBILITY, "hidden lg:block");
        assert!(css.contains("(pointer: fine) and (min-width: 1024px)"));
        // loading logo turns once every 2s
        assert!(css.contains("--animate-spin-logo: spin 2s linear infinite;"));
    }

    #[test]
    fn test_cursor_offsets() {
        assert_eq!(cursor_offsets(100.0, 50.0), ((84.0, 34.0), (96.0, 46.0)));
    }

    #[test]
    fn test_style_string() {
        let p = Particle {
            left: 10.0,
            top: 20.5,
            size: 2.0,
            duration: 3.0,
            delay: 0.25,
        };
        assert_eq!(
            p.style(),
            "left: 10.00%; top: 20.50%; width: 2.00px; height: 2.00px; animation-duration: 3.00s; animation-delay: 0.25s"
        );
    }
}
