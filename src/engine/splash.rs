//! Timed splash screen.
//!
//! The controller holds no timers of its own: the host feeds it the current
//! time through [`SplashController::tick`], so the same code runs against
//! browser timeouts and against a virtual clock in tests.

use crate::config::{CloudEffectConfig, SplashConfig};

/// A live background effect.
pub trait EffectHandle {
    fn destroy(&mut self);
}

/// Creates background effects. Returns `None` when the effect library is not
/// available; callers carry on without it.
pub trait EffectFactory {
    type Handle: EffectHandle;

    fn create(&mut self, config: &CloudEffectConfig) -> Option<Self::Handle>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Before `mount`, or mounted and within the display window.
    Showing,
    FadingOut,
    Completed,
    Unmounted,
}

pub struct SplashController<H: EffectHandle> {
    display_ms: u32,
    fade_ms: u32,
    clouds: CloudEffectConfig,
    phase: SplashPhase,
    mounted_at: Option<f64>,
    effect: Option<H>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl<H: EffectHandle> SplashController<H> {
    pub fn new(
        config: &SplashConfig,
        clouds: CloudEffectConfig,
        on_complete: impl FnOnce() + 'static,
    ) -> Self {
        Self {
            display_ms: config.display_ms,
            fade_ms: config.fade_ms,
            clouds,
            phase: SplashPhase::Showing,
            mounted_at: None,
            effect: None,
            on_complete: Some(Box::new(on_complete)),
        }
    }

    /// Start the timeline at `now_ms` and create the background effect.
    ///
    /// Calling it again is harmless: the clock is not restarted and no second
    /// effect is created while one is held.
    pub fn mount<F>(&mut self, factory: &mut F, now_ms: f64)
    where
        F: EffectFactory<Handle = H>,
    {
        if self.phase == SplashPhase::Unmounted {
            return;
        }
        self.mounted_at.get_or_insert(now_ms);
        if self.effect.is_none() {
            self.effect = factory.create(&self.clouds);
            if self.effect.is_some() {
                log::debug!("splash: background effect created");
            } else {
                log::debug!("splash: effect library unavailable, skipping background");
            }
        }
    }

    /// Delays after mount, in ms, at which `tick` has work to do.
    pub fn deadlines(&self) -> [u32; 2] {
        [self.display_ms, self.display_ms.saturating_add(self.fade_ms)]
    }

    /// Advance the timeline to `now_ms`, firing the completion callback when
    /// the fade has run out.
    pub fn tick(&mut self, now_ms: f64) -> SplashPhase {
        let Some(mounted_at) = self.mounted_at else {
            return self.phase;
        };
        let elapsed = now_ms - mounted_at;
        let [fade_at, done_at] = self.deadlines();

        if self.phase == SplashPhase::Showing && elapsed >= f64::from(fade_at) {
            log::debug!("splash: fading out");
            self.phase = SplashPhase::FadingOut;
        }
        if self.phase == SplashPhase::FadingOut && elapsed >= f64::from(done_at) {
            self.phase = SplashPhase::Completed;
            if let Some(on_complete) = self.on_complete.take() {
                log::debug!("splash: complete");
                on_complete();
            }
        }
        self.phase
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// Presentation flag; `false` starts the CSS fade-out.
    pub fn is_visible(&self) -> bool {
        self.phase == SplashPhase::Showing
    }

    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }

    /// Tear down: destroy the effect and make every later tick inert.
    pub fn unmount(&mut self) {
        if let Some(mut effect) = self.effect.take() {
            effect.destroy();
            log::debug!("splash: background effect destroyed");
        }
        self.on_complete = None;
        self.phase = SplashPhase::Unmounted;
    }
}

impl<H: EffectHandle> Drop for SplashController<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Handle(Rc<Cell<u32>>);

    impl EffectHandle for Handle {
        fn destroy(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    struct Factory {
        created: u32,
        destroyed: Rc<Cell<u32>>,
    }

    impl EffectFactory for Factory {
        type Handle = Handle;

        fn create(&mut self, _config: &CloudEffectConfig) -> Option<Handle> {
            self.created += 1;
            Some(Handle(Rc::clone(&self.destroyed)))
        }
    }

    #[test]
    fn second_mount_creates_nothing() {
        let destroyed = Rc::new(Cell::new(0));
        let mut factory = Factory { created: 0, destroyed: Rc::clone(&destroyed) };
        let mut splash =
            SplashController::new(&SplashConfig::default(), CloudEffectConfig::default(), || {});
        splash.mount(&mut factory, 0.0);
        splash.mount(&mut factory, 100.0);
        assert_eq!(factory.created, 1);
        assert_eq!(splash.tick(8000.0), SplashPhase::FadingOut);
        drop(splash);
        assert_eq!(destroyed.get(), 1);
    }

    #[test]
    fn ticks_before_mount_do_nothing() {
        let mut splash: SplashController<Handle> =
            SplashController::new(&SplashConfig::default(), CloudEffectConfig::default(), || {});
        assert_eq!(splash.tick(1.0e6), SplashPhase::Showing);
        assert!(splash.is_visible());
    }

    #[test]
    fn a_late_tick_runs_both_steps() {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let destroyed = Rc::new(Cell::new(0));
        let mut factory = Factory { created: 0, destroyed };
        let mut splash = SplashController::new(
            &SplashConfig::default(),
            CloudEffectConfig::default(),
            move || counter.set(counter.get() + 1),
        );
        splash.mount(&mut factory, 50.0);
        assert_eq!(splash.tick(20_000.0), SplashPhase::Completed);
        assert_eq!(splash.tick(30_000.0), SplashPhase::Completed);
        assert_eq!(fired.get(), 1);
    }
}
