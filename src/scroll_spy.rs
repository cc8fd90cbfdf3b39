use std::fmt;

/// Anchor ids of the page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    Skills,
    Experience,
    Education,
    Certifications,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Certifications,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Certifications => "certifications",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Education => "Education",
            SectionId::Certifications => "Certifications",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Vertical extent of an element relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && line <= self.bottom
    }
}

/// Picks the section whose bounds straddle `threshold`.
///
/// Sections are checked in the order given and the first match wins. A
/// section with no bounds (element missing) is skipped. When nothing
/// straddles the line the previous section stays active.
pub fn active_section<I>(sections: I, threshold: f64, previous: SectionId) -> SectionId
where
    I: IntoIterator<Item = (SectionId, Option<Bounds>)>,
{
    sections
        .into_iter()
        .find_map(|(id, bounds)| bounds.filter(|b| b.straddles(threshold)).map(|_| id))
        .unwrap_or(previous)
}

/// Fraction of the page scrolled, for the nav progress bar.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub const NAV_MAX_ALPHA: f64 = 0.95;

/// Nav background alpha, fading in over the first `fade_distance` px.
pub fn nav_alpha(scroll_y: f64, fade_distance: f64) -> f64 {
    if fade_distance <= 0.0 {
        return NAV_MAX_ALPHA;
    }
    (scroll_y / fade_distance).clamp(0.0, 1.0) * NAV_MAX_ALPHA
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(scroll_y: f64, height: f64) -> Vec<(SectionId, Option<Bounds>)> {
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let top = i as f64 * height - scroll_y;
                (
                    *id,
                    Some(Bounds {
                        top,
                        bottom: top + height,
                    }),
                )
            })
            .collect()
    }

    #[test]
    fn test_anchors_are_unique_and_linked() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.href(), format!("#{}", id.anchor()));
            assert_eq!(id.to_string(), id.anchor());
            assert!(SectionId::ALL[i + 1..].iter().all(|other| other.anchor() != id.anchor()));
        }
    }

    #[test]
    fn test_active_section_follows_scroll() {
        assert_eq!(active_section(stacked(0.0, 800.0), 100.0, SectionId::Home), SectionId::Home);
        assert_eq!(
            active_section(stacked(800.0, 800.0), 100.0, SectionId::Home),
            SectionId::Skills
        );
        // threshold line sits 100px into the viewport
        assert_eq!(
            active_section(stacked(1550.0, 800.0), 100.0, SectionId::Home),
            SectionId::Experience
        );
        assert_eq!(
            active_section(stacked(6.0 * 800.0, 800.0), 100.0, SectionId::Home),
            SectionId::Contact
        );
    }

    #[test]
    fn test_always_exactly_one_known_section() {
        let mut active = SectionId::default();
        for step in 0..200 {
            let scroll_y = step as f64 * 37.0;
            active = active_section(stacked(scroll_y, 650.0), 100.0, active);
            assert!(SectionId::ALL.contains(&active));
        }
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let far_below = SectionId::ALL
            .iter()
            .map(|id| (*id, Some(Bounds { top: 500.0, bottom: 900.0 })))
            .collect::<Vec<_>>();
        assert_eq!(
            active_section(far_below, 100.0, SectionId::Projects),
            SectionId::Projects
        );
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let sections = vec![
            (SectionId::Home, None),
            (SectionId::Skills, Some(Bounds { top: -20.0, bottom: 400.0 })),
        ];
        assert_eq!(active_section(sections, 100.0, SectionId::Home), SectionId::Skills);
        let none_present = SectionId::ALL.iter().map(|id| (*id, None)).collect::<Vec<_>>();
        assert_eq!(
            active_section(none_present, 100.0, SectionId::Education),
            SectionId::Education
        );
    }

    #[test]
    fn test_overlap_first_in_order_wins() {
        let sections = vec![
            (SectionId::Education, Some(Bounds { top: 0.0, bottom: 300.0 })),
            (SectionId::Certifications, Some(Bounds { top: 50.0, bottom: 600.0 })),
        ];
        assert_eq!(
            active_section(sections, 100.0, SectionId::Home),
            SectionId::Education
        );
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let edge = Bounds { top: 100.0, bottom: 100.0 };
        assert!(edge.straddles(100.0));
        assert!(!Bounds { top: 100.5, bottom: 200.0 }.straddles(100.0));
    }

    #[test]
    fn test_scroll_progress_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        // page shorter than the viewport
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn test_nav_alpha() {
        assert_eq!(nav_alpha(0.0, 100.0), 0.0);
        assert!((nav_alpha(50.0, 100.0) - 0.475).abs() < 1e-9);
        assert_eq!(nav_alpha(400.0, 100.0), NAV_MAX_ALPHA);
        assert_eq!(nav_alpha(10.0, 0.0), NAV_MAX_ALPHA);
    }
}
