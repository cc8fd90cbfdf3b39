/// UI tunables shared through Leptos context.
///
/// Server settings (address, site root, reload port) come from
/// `[package.metadata.leptos]` and `LEPTOS_*` env vars instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    pub loading: LoadingConfig,
    pub scroll_spy: ScrollSpyConfig,
    pub reveal_threshold: f64,
    pub contact: ContactConfig,
    pub particles: ParticleConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingConfig {
    pub tick_ms: u64,
    pub max_increment: f64,
    pub completion_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSpyConfig {
    /// Distance in px from the viewport top used as the detection line.
    pub threshold_px: f64,
    pub throttle_ms: f64,
    /// Scroll offset at which the nav background reaches full opacity.
    pub fade_distance_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactConfig {
    pub send_delay_ms: u64,
    pub success_hold_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    pub stars: usize,
    pub hero: usize,
    pub experience: usize,
    pub education_columns: usize,
    pub contact: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            loading: LoadingConfig::default(),
            scroll_spy: ScrollSpyConfig::default(),
            reveal_threshold: 0.1,
            contact: ContactConfig::default(),
            particles: ParticleConfig::default(),
        }
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            tick_ms: 200,
            max_increment: 30.0,
            completion_delay_ms: 500,
        }
    }
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            threshold_px: 100.0,
            throttle_ms: 50.0,
            fade_distance_px: 100.0,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: 2000,
            success_hold_ms: 3000,
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            stars: 50,
            hero: 20,
            experience: 30,
            education_columns: 20,
            contact: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.loading.tick_ms, 200);
        assert_eq!(config.loading.max_increment, 30.0);
        assert_eq!(config.loading.completion_delay_ms, 500);
        assert_eq!(config.scroll_spy.threshold_px, 100.0);
        assert_eq!(config.scroll_spy.throttle_ms, 50.0);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.contact.send_delay_ms, 2000);
        assert_eq!(config.contact.success_hold_ms, 3000);
        assert_eq!(config.particles.stars, 50);
        assert_eq!(config.particles.education_columns, 20);
    }
}
