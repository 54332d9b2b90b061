//! One-shot scroll reveal state.

/// Viewport margin used by the fade-in wrapper. Negative values shrink the
/// viewport so elements reveal slightly after they scroll into view.
pub const DEFAULT_TRIGGER_MARGIN_PX: i32 = -100;

/// Stagger step between cards in a grid.
pub const CARD_STAGGER_MS: u32 = 100;

/// Stagger step between FAQ rows.
pub const FAQ_STAGGER_MS: u32 = 50;

/// Trigger configuration for a revealed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealOptions {
    pub margin_px: i32,
    pub delay_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            margin_px: DEFAULT_TRIGGER_MARGIN_PX,
            delay_ms: 0,
        }
    }
}

impl RevealOptions {
    pub fn with_delay(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            ..Self::default()
        }
    }

    /// `rootMargin` value for the `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        format!("{}px", self.margin_px)
    }

    /// Inline style applying the delay to the CSS transition.
    pub fn transition_style(&self) -> String {
        format!("transition-delay: {}ms", self.delay_ms)
    }
}

/// Delay for the `index`-th item of a staggered list.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

/// Visibility latch: hidden until the first intersecting observation,
/// visible forever after.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    visible: bool,
}

impl Reveal {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed an observation. Returns `true` only for the call that flips
    /// the element to visible.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.visible || !is_intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RevealOptions::default();
        assert_eq!(options.root_margin(), "-100px");
        assert_eq!(options.transition_style(), "transition-delay: 0ms");
    }

    #[test]
    fn test_with_delay_keeps_margin() {
        let options = RevealOptions::with_delay(200);
        assert_eq!(options.margin_px, DEFAULT_TRIGGER_MARGIN_PX);
        assert_eq!(options.transition_style(), "transition-delay: 200ms");
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0, CARD_STAGGER_MS), 0);
        assert_eq!(stagger(3, CARD_STAGGER_MS), 300);
        assert_eq!(stagger(7, FAQ_STAGGER_MS), 350);
        assert_eq!(stagger(usize::MAX, 2), u32::MAX);
    }

    #[test]
    fn test_non_intersecting_observation_is_ignored() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(false));
        assert!(!reveal.is_visible());
    }
}
