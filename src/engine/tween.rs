//! Easing curves and time-based interpolation of a single `x` value.

/// Easing curves, named the way animation libraries name them
/// (`power2.inOut` and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    Power2In,
    Power2Out,
    Power2InOut,
}

impl Easing {
    /// Parse a curve name. Unknown names fall back to `power2.inOut`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "none" | "linear" => Easing::Linear,
            "power2.in" => Easing::Power2In,
            "power2.out" => Easing::Power2Out,
            "power2.inOut" | "power2" => Easing::Power2InOut,
            other => {
                log::warn!("unknown easing `{other}`, using power2.inOut");
                Easing::Power2InOut
            }
        }
    }

    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2In => t * t * t,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Duration and curve shared by every surface in one transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub duration_s: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(duration_s: f64, easing: Easing) -> Self {
        Self {
            duration_s: duration_s.max(0.0),
            easing,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_s * 1000.0
    }
}

/// One running interpolation from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: f64,
    pub to: f64,
    pub started_ms: f64,
    pub tween: Tween,
}

impl Motion {
    pub fn new(from: f64, to: f64, started_ms: f64, tween: Tween) -> Self {
        Self {
            from,
            to,
            started_ms,
            tween,
        }
    }

    /// Position at `now_ms` and whether the motion has finished.
    pub fn sample(&self, now_ms: f64) -> (f64, bool) {
        let duration = self.tween.duration_ms();
        if duration <= 0.0 {
            return (self.to, true);
        }
        let t = (now_ms - self.started_ms) / duration;
        if t >= 1.0 {
            return (self.to, true);
        }
        let eased = self.tween.easing.apply(t);
        (self.from + (self.to - self.from) * eased, false)
    }
}
