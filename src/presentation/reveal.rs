//! Fade-in trigger for sections scrolled into view.

/// Fraction of the section that must be visible before it is revealed
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Latching visibility flag fed by viewport intersection ratios.
///
/// Once revealed the section stays revealed. After [`disconnect`] further
/// observations are ignored.
///
/// [`disconnect`]: RevealLatch::disconnect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    visible: bool,
    connected: bool,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RevealLatch {
    /// Threshold is clamped to `0.0..=1.0`
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
            connected: true,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed the visible fraction of the section; returns visibility
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        if self.connected
            && !self.visible
            && intersection_ratio > 0.0
            && intersection_ratio >= self.threshold
        {
            tracing::trace!(ratio = intersection_ratio, "Section revealed");
            self.visible = true;
        }
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Stop observing
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_at_threshold() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(0.05));
        assert!(latch.observe(0.1));
    }

    #[test]
    fn test_stays_visible_after_scrolling_away() {
        let mut latch = RevealLatch::default();
        latch.observe(0.6);
        assert!(latch.observe(0.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_disconnected_latch_ignores_observations() {
        let mut latch = RevealLatch::default();
        latch.disconnect();
        assert!(!latch.observe(1.0));
        assert!(!latch.is_connected());
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(RevealLatch::new(4.0).threshold(), 1.0);
        assert_eq!(RevealLatch::new(-1.0).threshold(), 0.0);
    }
}
