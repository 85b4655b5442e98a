//! Target-independent state machines. Nothing in here touches the DOM, so
//! all of it is tested on the host.

pub mod indicator;
pub mod input;
pub mod navigator;
pub mod preload;
pub mod sections;
pub mod splash;
pub mod tween;

pub use indicator::{Rect, Underline};
pub use input::{Key, NavInput, Step, SwipeTracker};
pub use navigator::{Animator, NavigationSettings, Navigator, Surface, Transition, TransitionTicket};
pub use preload::{ImageStatus, PreloadGate};
pub use sections::SectionList;
pub use splash::{EffectFactory, EffectHandle, SplashController, SplashPhase};
pub use tween::{Easing, Motion, Tween};
