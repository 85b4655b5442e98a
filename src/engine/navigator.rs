//! Section navigation engine.
//!
//! [`Navigator`] owns the only copy of the navigation state. Every input
//! channel ends up in [`Navigator::request_navigate`], which is the only
//! place a transition can start; [`Navigator::complete`] is the only place
//! one can end. While a transition is in flight every other request is
//! dropped.

use std::fmt;

use super::input::NavInput;
use super::sections::SectionList;
use super::tween::{Easing, Tween};
use crate::config::NavigationConfig;

/// The two translated layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Strip holding the section panels.
    Foreground,
    /// Stitched background image.
    Background,
}

/// Identifies one accepted transition. The animator hands it back when the
/// foreground animation finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionTicket(u64);

impl fmt::Display for TransitionTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Drives the translation of both surfaces.
pub trait Animator {
    /// Animate `surface` to `x`. When `ticket` is set, the implementation
    /// must eventually report it back through [`Navigator::complete`],
    /// exactly once. A new call on the same surface supersedes the old one.
    fn animate_to(
        &mut self,
        surface: Surface,
        x: f64,
        tween: &Tween,
        ticket: Option<TransitionTicket>,
    );

    /// Move `surface` to `x` with no animation.
    fn set_immediate(&mut self, surface: Surface, x: f64);
}

/// Transition parameters shared by every navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationSettings {
    pub tween: Tween,
    pub swipe_threshold_px: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            tween: Tween::new(0.8, Easing::Power2InOut),
            swipe_threshold_px: 50.0,
        }
    }
}

impl From<&NavigationConfig> for NavigationSettings {
    fn from(config: &NavigationConfig) -> Self {
        Self {
            tween: Tween::new(config.duration_s, Easing::from_name(&config.easing)),
            swipe_threshold_px: config.swipe_threshold_px,
        }
    }
}

/// An accepted navigation, as issued to the animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub ticket: TransitionTicket,
    pub from: usize,
    pub target: usize,
    pub foreground_x: f64,
    pub background_x: f64,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    ticket: TransitionTicket,
    target: usize,
    viewport_width: f64,
}

type Observer = Box<dyn FnMut(usize)>;

pub struct Navigator<A> {
    sections: SectionList,
    animator: A,
    settings: NavigationSettings,
    viewport_width: f64,
    current_index: usize,
    displayed_index: usize,
    in_flight: Option<InFlight>,
    next_ticket: u64,
    surfaces_mounted: bool,
    observers: Vec<Observer>,
}

impl<A: Animator> Navigator<A> {
    pub fn new(
        sections: SectionList,
        animator: A,
        settings: NavigationSettings,
        viewport_width: f64,
    ) -> Self {
        Self {
            sections,
            animator,
            settings,
            viewport_width,
            current_index: 0,
            displayed_index: 0,
            in_flight: None,
            next_ticket: 0,
            surfaces_mounted: false,
            observers: Vec::new(),
        }
    }

    /// Marks both surfaces as present and snaps them to the current section.
    /// A running transition is left alone; it settles on completion.
    pub fn attach_surfaces(&mut self) {
        self.surfaces_mounted = true;
        if self.in_flight.is_none() {
            self.snap();
        }
    }

    pub fn detach_surfaces(&mut self) {
        self.surfaces_mounted = false;
    }

    /// Register a callback fired with the new index whenever the displayed
    /// section changes.
    pub fn on_displayed_change(&mut self, observer: impl FnMut(usize) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn displayed_index(&self) -> usize {
        self.displayed_index
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn foreground_offset(&self, index: usize) -> f64 {
        -(index as f64) * self.viewport_width
    }

    /// Background tracks the foreground 1:1.
    pub fn background_offset(&self, index: usize) -> f64 {
        -(index as f64 * self.viewport_width)
    }

    /// Start a transition to `target`.
    ///
    /// Returns `None`, leaving all state untouched, when a transition is
    /// already running, the surfaces are not mounted, `target` is out of
    /// range, or `target` is already the current section.
    pub fn request_navigate(&mut self, target: usize) -> Option<Transition> {
        if self.in_flight.is_some() || !self.surfaces_mounted {
            return None;
        }
        if !self.sections.contains(target) {
            log::debug!("ignoring navigation to out-of-range section {target}");
            return None;
        }
        if target == self.current_index {
            return None;
        }

        let ticket = TransitionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(InFlight {
            ticket,
            target,
            viewport_width: self.viewport_width,
        });

        let transition = Transition {
            ticket,
            from: self.current_index,
            target,
            foreground_x: self.foreground_offset(target),
            background_x: self.background_offset(target),
        };
        log::debug!(
            "transition {ticket}: section {} -> {target} (x = {})",
            transition.from,
            transition.foreground_x
        );

        let tween = self.settings.tween;
        self.animator
            .animate_to(Surface::Foreground, transition.foreground_x, &tween, Some(ticket));
        self.animator
            .animate_to(Surface::Background, transition.background_x, &tween, None);
        Some(transition)
    }

    /// Translate an input event into a request.
    pub fn handle_input(&mut self, input: NavInput) -> Option<Transition> {
        if self.in_flight.is_some() {
            return None;
        }
        let target =
            input.target(self.current_index, &self.sections, self.settings.swipe_threshold_px)?;
        self.request_navigate(target)
    }

    /// Foreground animation for `ticket` finished. Stale tickets are ignored.
    pub fn complete(&mut self, ticket: TransitionTicket) -> bool {
        let Some(in_flight) = self.in_flight else {
            return false;
        };
        if in_flight.ticket != ticket {
            log::debug!("ignoring stale completion {ticket}");
            return false;
        }

        self.in_flight = None;
        self.current_index = in_flight.target;
        self.displayed_index = in_flight.target;
        log::debug!("transition {ticket} settled on section {}", in_flight.target);

        if in_flight.viewport_width != self.viewport_width {
            self.snap();
        }
        let index = self.displayed_index;
        for observer in &mut self.observers {
            observer(index);
        }
        true
    }

    /// Viewport width changed. Snaps immediately when idle; a running
    /// transition picks the new width up on completion.
    pub fn resize(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width;
        if self.in_flight.is_none() {
            self.snap();
        }
    }

    fn snap(&mut self) {
        if !self.surfaces_mounted {
            return;
        }
        let index = self.current_index;
        let (fg, bg) = (self.foreground_offset(index), self.background_offset(index));
        self.animator.set_immediate(Surface::Foreground, fg);
        self.animator.set_immediate(Surface::Background, bg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Calls {
        animated: Vec<(Surface, f64, Option<TransitionTicket>)>,
        snapped: Vec<(Surface, f64)>,
    }

    impl Animator for Calls {
        fn animate_to(
            &mut self,
            surface: Surface,
            x: f64,
            _tween: &Tween,
            ticket: Option<TransitionTicket>,
        ) {
            self.animated.push((surface, x, ticket));
        }

        fn set_immediate(&mut self, surface: Surface, x: f64) {
            self.snapped.push((surface, x));
        }
    }

    fn navigator() -> Navigator<Calls> {
        let sections = SectionList::from_names(["a", "b", "c"]).unwrap();
        let mut nav =
            Navigator::new(sections, Calls::default(), NavigationSettings::default(), 1000.0);
        nav.attach_surfaces();
        nav
    }

    #[test]
    fn unmounted_surfaces_block_navigation() {
        let sections = SectionList::from_names(["a", "b"]).unwrap();
        let mut nav =
            Navigator::new(sections, Calls::default(), NavigationSettings::default(), 1000.0);
        assert!(nav.request_navigate(1).is_none());
        assert!(nav.animator().animated.is_empty());
        assert!(nav.animator().snapped.is_empty());
    }

    #[test]
    fn only_the_foreground_carries_the_ticket() {
        let mut nav = navigator();
        let transition = nav.request_navigate(2).unwrap();
        assert_eq!(
            nav.animator().animated,
            vec![
                (Surface::Foreground, -2000.0, Some(transition.ticket)),
                (Surface::Background, -2000.0, None),
            ]
        );
    }

    #[test]
    fn stale_ticket_does_not_unlock() {
        let mut nav = navigator();
        let first = nav.request_navigate(1).unwrap();
        assert!(nav.complete(first.ticket));
        let second = nav.request_navigate(2).unwrap();
        assert!(!nav.complete(first.ticket));
        assert!(nav.is_animating());
        assert!(nav.complete(second.ticket));
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn observers_see_committed_index() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut nav = navigator();
        let sink = Rc::clone(&seen);
        nav.on_displayed_change(move |index| sink.borrow_mut().push(index));

        let t = nav.request_navigate(1).unwrap();
        assert!(seen.borrow().is_empty());
        assert_eq!(nav.displayed_index(), 0);
        nav.complete(t.ticket);
        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(nav.displayed_index(), 1);
    }

    #[test]
    fn reattaching_mid_flight_keeps_the_transition() {
        let mut nav = navigator();
        nav.animator_mut().snapped.clear();
        let t = nav.request_navigate(1).unwrap();
        nav.detach_surfaces();
        nav.attach_surfaces();
        assert!(nav.animator().snapped.is_empty());
        assert!(nav.is_animating());
        assert!(nav.complete(t.ticket));
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn resize_during_flight_snaps_on_completion() {
        let mut nav = navigator();
        nav.animator_mut().snapped.clear();
        let t = nav.request_navigate(1).unwrap();
        nav.resize(800.0);
        assert!(nav.animator().snapped.is_empty());
        nav.complete(t.ticket);
        assert_eq!(
            nav.animator().snapped,
            vec![(Surface::Foreground, -800.0), (Surface::Background, -800.0)]
        );
    }
}
