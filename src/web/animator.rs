//! Frame-driven tweening of the two translated surfaces.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::HtmlElement;

use crate::engine::{Animator, Motion, Surface, TransitionTicket, Tween};

struct Track {
    element: HtmlElement,
    x: f64,
    // Target and tween waiting for the next frame to stamp their start time.
    queued: Option<(f64, Tween)>,
    motion: Option<Motion>,
    ticket: Option<TransitionTicket>,
}

impl Track {
    fn new(element: HtmlElement) -> Self {
        Self {
            element,
            x: 0.0,
            queued: None,
            motion: None,
            ticket: None,
        }
    }

    fn write(&self) {
        let transform = format!("translate3d({}px, 0, 0)", self.x);
        if let Err(err) = self.element.style().set_property("transform", &transform) {
            log::warn!("setting transform failed: {err:?}");
        }
    }

    /// Advance to `now_ms`; yields the ticket when the motion has finished.
    fn step(&mut self, now_ms: f64) -> Option<Option<TransitionTicket>> {
        if let Some((to, tween)) = self.queued.take() {
            self.motion = Some(Motion::new(self.x, to, now_ms, tween));
        }
        let motion = self.motion?;
        let (x, done) = motion.sample(now_ms);
        self.x = x;
        self.write();
        if done {
            self.motion = None;
            Some(self.ticket.take())
        } else {
            None
        }
    }
}

struct Tracks {
    foreground: Track,
    background: Track,
    // Holding the handle keeps the next frame scheduled; dropping it cancels.
    frame: Option<AnimationFrame>,
}

impl Tracks {
    fn track(&mut self, surface: Surface) -> &mut Track {
        match surface {
            Surface::Foreground => &mut self.foreground,
            Surface::Background => &mut self.background,
        }
    }

    fn running(&self) -> bool {
        [&self.foreground, &self.background]
            .iter()
            .any(|track| track.queued.is_some() || track.motion.is_some())
    }
}

type Settled = Rc<dyn Fn(TransitionTicket)>;

/// [`Animator`] writing `translate3d` transforms once per animation frame.
///
/// Motions requested in the same turn start on the same frame, so both
/// surfaces stay in lockstep. A new motion on a surface replaces the old one,
/// and the replaced motion's ticket is dropped unreported.
pub struct DomAnimator {
    tracks: Rc<RefCell<Tracks>>,
    on_settled: Settled,
}

impl DomAnimator {
    pub fn new(
        foreground: HtmlElement,
        background: HtmlElement,
        on_settled: impl Fn(TransitionTicket) + 'static,
    ) -> Self {
        Self {
            tracks: Rc::new(RefCell::new(Tracks {
                foreground: Track::new(foreground),
                background: Track::new(background),
                frame: None,
            })),
            on_settled: Rc::new(on_settled),
        }
    }

    fn schedule(tracks: &Rc<RefCell<Tracks>>, on_settled: &Settled) {
        let mut state = tracks.borrow_mut();
        if state.frame.is_some() {
            return;
        }
        let tracks_next = Rc::clone(tracks);
        let settled_next = Rc::clone(on_settled);
        state.frame = Some(request_animation_frame(move |timestamp| {
            Self::frame(&tracks_next, &settled_next, timestamp);
        }));
    }

    fn frame(tracks: &Rc<RefCell<Tracks>>, on_settled: &Settled, now_ms: f64) {
        let (finished, running) = {
            let mut state = tracks.borrow_mut();
            state.frame.take();
            let finished: Vec<TransitionTicket> = [
                state.foreground.step(now_ms),
                state.background.step(now_ms),
            ]
            .into_iter()
            .flatten()
            .flatten()
            .collect();
            (finished, state.running())
        };
        if running {
            Self::schedule(tracks, on_settled);
        }
        // Reported with the tracks released: completion may snap surfaces.
        for ticket in finished {
            on_settled(ticket);
        }
    }
}

impl Animator for DomAnimator {
    fn animate_to(
        &mut self,
        surface: Surface,
        x: f64,
        tween: &Tween,
        ticket: Option<TransitionTicket>,
    ) {
        {
            let mut state = self.tracks.borrow_mut();
            let track = state.track(surface);
            track.motion = None;
            track.queued = Some((x, *tween));
            track.ticket = ticket;
        }
        Self::schedule(&self.tracks, &self.on_settled);
    }

    fn set_immediate(&mut self, surface: Surface, x: f64) {
        let mut state = self.tracks.borrow_mut();
        let track = state.track(surface);
        track.queued = None;
        track.motion = None;
        track.ticket = None;
        track.x = x;
        track.write();
    }
}
