//! Input channels and how each one maps onto a navigation target.

use super::sections::SectionList;

/// Which way a relative input moves through the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Advance,
    Retreat,
}

/// A navigation intent coming from one of the four input channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavInput {
    /// Vertical wheel delta; positive scrolls forward.
    Wheel { delta_y: f64 },
    /// Completed touch gesture, in client x coordinates.
    Swipe { start_x: f64, end_x: f64 },
    /// `KeyboardEvent.key` of a key press.
    Key(Key),
    /// Click on a nav label or progress dot.
    Select(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    pub fn from_key_name(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

impl NavInput {
    /// The relative step this input asks for, if any.
    ///
    /// `Select` is absolute and never yields a step.
    pub fn step(&self, swipe_threshold_px: f64) -> Option<Step> {
        match *self {
            NavInput::Wheel { delta_y } if delta_y > 0.0 => Some(Step::Advance),
            NavInput::Wheel { delta_y } if delta_y < 0.0 => Some(Step::Retreat),
            NavInput::Wheel { .. } => None,
            NavInput::Swipe { start_x, end_x } => {
                let delta = start_x - end_x;
                if delta.abs() <= swipe_threshold_px {
                    None
                } else if delta > 0.0 {
                    Some(Step::Advance)
                } else {
                    Some(Step::Retreat)
                }
            }
            NavInput::Key(Key::ArrowRight) => Some(Step::Advance),
            NavInput::Key(Key::ArrowLeft) => Some(Step::Retreat),
            NavInput::Key(Key::Other) => None,
            NavInput::Select(_) => None,
        }
    }

    /// Candidate target for this input given the current index.
    ///
    /// Relative inputs are clamped at the ends: a step past either end gives
    /// `None`. Direct selection is passed through unchecked; range checks
    /// belong to the engine.
    pub fn target(
        &self,
        current: usize,
        sections: &SectionList,
        swipe_threshold_px: f64,
    ) -> Option<usize> {
        if let NavInput::Select(index) = *self {
            return Some(index);
        }
        match self.step(swipe_threshold_px)? {
            Step::Advance => sections.next(current),
            Step::Retreat => sections.previous(current),
        }
    }
}

/// Pairs `touchstart` with `touchend` into a [`NavInput::Swipe`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Ends the gesture. A `touchend` with no matching start yields nothing.
    pub fn end(&mut self, x: f64) -> Option<NavInput> {
        self.start_x
            .take()
            .map(|start_x| NavInput::Swipe { start_x, end_x: x })
    }
}
