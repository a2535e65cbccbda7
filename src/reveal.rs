//! One-shot visibility latch driving the scroll-in animations.

/// Fraction of a block that has to be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// A single visibility-change event, as reported by the host's observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    state: RevealState,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            state: RevealState::Hidden,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feeds one observation into the latch.
    ///
    /// Returns `true` only for the observation that flipped the latch; once
    /// revealed every further observation is ignored.
    pub fn observe(&mut self, seen: Visibility) -> bool {
        if self.is_revealed() {
            return false;
        }
        if seen.is_intersecting && seen.ratio >= self.threshold {
            self.state = RevealState::Revealed;
            return true;
        }
        false
    }

    /// Used when the host cannot observe intersections at all.
    pub fn force_reveal(&mut self) -> bool {
        let changed = !self.is_revealed();
        self.state = RevealState::Revealed;
        changed
    }

    /// Decides what happens once the block is mounted.
    ///
    /// Without observer support the block is revealed on the spot and
    /// nothing is observed.
    pub fn on_mount(&mut self, observer_supported: bool) -> MountAction {
        if self.is_revealed() {
            MountAction::Idle
        } else if observer_supported {
            MountAction::Observe
        } else {
            self.force_reveal();
            MountAction::Idle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountAction {
    /// Start the intersection observer.
    Observe,
    /// Leave the observer stopped.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Animation {
    #[default]
    FadeUp,
    SlideInLeft,
    SlideInRight,
}

impl Animation {
    pub fn class(self) -> &'static str {
        match self {
            Self::FadeUp => "animate-fade-up",
            Self::SlideInLeft => "animate-slide-in-left",
            Self::SlideInRight => "animate-slide-in-right",
        }
    }

    pub fn classes(self, state: RevealState) -> String {
        match state {
            RevealState::Hidden => format!("animate-on-scroll {}", self.class()),
            RevealState::Revealed => format!("animate-on-scroll {} is-visible", self.class()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let latch = RevealLatch::default();
        assert_eq!(latch.state(), RevealState::Hidden);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(Visibility::new(true, 0.05)));
        assert!(!latch.observe(Visibility::new(false, 0.0)));
        assert_eq!(latch.state(), RevealState::Hidden);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(Visibility::new(true, REVEAL_THRESHOLD)));
        assert_eq!(latch.state(), RevealState::Revealed);
    }

    #[test]
    fn test_not_intersecting_never_reveals() {
        // observers report a ratio of 1.0 for zero-area targets that are off screen
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(Visibility::new(false, 1.0)));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(Visibility::new(true, 0.4)));

        // scrolling back out, and back in again, changes nothing
        assert!(!latch.observe(Visibility::new(false, 0.0)));
        assert!(!latch.observe(Visibility::new(true, 0.02)));
        assert!(!latch.observe(Visibility::new(true, 1.0)));
        assert_eq!(latch.state(), RevealState::Revealed);
    }

    #[test]
    fn test_latches_are_independent() {
        let mut first = RevealLatch::default();
        let second = RevealLatch::default();
        first.observe(Visibility::new(true, 0.5));
        assert!(first.is_revealed());
        assert!(!second.is_revealed());
    }

    #[test]
    fn test_force_reveal() {
        let mut latch = RevealLatch::default();
        assert!(latch.force_reveal());
        assert!(!latch.force_reveal());
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_mount_with_observer_support_waits() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.on_mount(true), MountAction::Observe);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_mount_without_observer_support_reveals() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.on_mount(false), MountAction::Idle);
        assert_eq!(latch.state(), RevealState::Revealed);
        // later observations cannot hide it again
        assert!(!latch.observe(Visibility::new(false, 0.0)));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_mount_after_reveal_is_idle() {
        let mut latch = RevealLatch::default();
        latch.observe(Visibility::new(true, 0.5));
        assert_eq!(latch.on_mount(true), MountAction::Idle);
    }

    #[test]
    fn test_threshold_is_clamped() {
        let mut latch = RevealLatch::new(3.0);
        assert!(!latch.observe(Visibility::new(true, 0.99)));
        assert!(latch.observe(Visibility::new(true, 1.0)));
    }

    #[test]
    fn test_animation_classes() {
        assert_eq!(
            Animation::FadeUp.classes(RevealState::Hidden),
            "animate-on-scroll animate-fade-up"
        );
        assert_eq!(
            Animation::SlideInRight.classes(RevealState::Revealed),
            "animate-on-scroll animate-slide-in-right is-visible"
        );
    }
}
