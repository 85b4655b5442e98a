//! Loading overlay shown over the navigator while its background settles.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Pending,
    Loaded,
    /// The image failed; the CSS fallback is used instead.
    Failed,
}

/// The overlay stays up until the background image has settled (either way)
/// and the minimum display delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloadGate {
    image: ImageStatus,
    min_delay_elapsed: bool,
}

impl Default for PreloadGate {
    fn default() -> Self {
        Self {
            image: ImageStatus::Pending,
            min_delay_elapsed: false,
        }
    }
}

impl PreloadGate {
    pub fn image_settled(&mut self, loaded: bool) {
        if self.image == ImageStatus::Pending {
            self.image = if loaded {
                ImageStatus::Loaded
            } else {
                ImageStatus::Failed
            };
        }
    }

    pub fn min_delay_elapsed(&mut self) {
        self.min_delay_elapsed = true;
    }

    pub fn image(&self) -> ImageStatus {
        self.image
    }

    pub fn overlay_visible(&self) -> bool {
        self.image == ImageStatus::Pending || !self.min_delay_elapsed
    }

    /// Overlay text, or `None` once it should be hidden.
    pub fn message(&self) -> Option<&'static str> {
        if !self.overlay_visible() {
            None
        } else if self.image == ImageStatus::Pending {
            Some("Loading background...")
        } else {
            Some("Loading experience...")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_both_image_and_delay() {
        let mut gate = PreloadGate::default();
        assert_eq!(gate.message(), Some("Loading background..."));
        gate.min_delay_elapsed();
        assert_eq!(gate.message(), Some("Loading background..."));
        gate.image_settled(true);
        assert!(!gate.overlay_visible());
        assert_eq!(gate.message(), None);
    }

    #[test]
    fn failed_image_still_clears_the_overlay() {
        let mut gate = PreloadGate::default();
        gate.image_settled(false);
        assert_eq!(gate.message(), Some("Loading experience..."));
        gate.min_delay_elapsed();
        assert_eq!(gate.image(), ImageStatus::Failed);
        assert!(!gate.overlay_visible());
    }

    #[test]
    fn first_settlement_wins() {
        let mut gate = PreloadGate::default();
        gate.image_settled(false);
        gate.image_settled(true);
        assert_eq!(gate.image(), ImageStatus::Failed);
    }
}
