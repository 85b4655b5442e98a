//! Browser front end: DOM construction, event wiring and the app shell that
//! swaps the splash for the portfolio.

mod animator;
mod dom;
pub mod logging;
mod portfolio;
mod splash;
mod vanta;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::timers::callback::Timeout;
use web_sys::Element;

use crate::config::{PortfolioConfig, CONFIG_ELEMENT_ID};
use crate::error::{Error, Result};

pub use animator::DomAnimator;
pub use portfolio::PortfolioView;
pub use splash::SplashView;
pub use vanta::{VantaClouds, VantaEffect};

enum Stage {
    Empty,
    Splash(SplashView),
    Portfolio(PortfolioView),
}

/// Owns whichever top-level view is on screen.
pub struct App {
    root: Element,
    config: PortfolioConfig,
    stage: RefCell<Stage>,
    // Lives outside `stage` so the swap never drops the timer running it.
    pending_swap: RefCell<Option<Timeout>>,
}

impl App {
    pub fn start(root: Element, config: PortfolioConfig) -> Result<Rc<Self>> {
        let app = Rc::new(Self {
            root,
            config,
            stage: RefCell::new(Stage::Empty),
            pending_swap: RefCell::new(None),
        });
        let weak = Rc::downgrade(&app);
        let splash =
            SplashView::mount(&app.root, &app.config, move || App::schedule_portfolio(&weak))?;
        *app.stage.borrow_mut() = Stage::Splash(splash);
        Ok(app)
    }

    fn schedule_portfolio(app: &Weak<Self>) {
        let Some(this) = app.upgrade() else {
            return;
        };
        let app = app.clone();
        *this.pending_swap.borrow_mut() = Some(Timeout::new(0, move || {
            if let Some(app) = app.upgrade() {
                if let Err(err) = app.show_portfolio() {
                    log::error!("mounting portfolio failed: {err}");
                }
            }
        }));
    }

    fn show_portfolio(&self) -> Result<()> {
        // Drop the splash first so its effect is destroyed before the
        // portfolio lays out.
        *self.stage.borrow_mut() = Stage::Empty;
        let portfolio = PortfolioView::mount(&self.root, &self.config)?;
        *self.stage.borrow_mut() = Stage::Portfolio(portfolio);
        Ok(())
    }

    pub fn showing_splash(&self) -> bool {
        matches!(*self.stage.borrow(), Stage::Splash(_))
    }

    /// Current section, once the portfolio is up.
    pub fn current_section(&self) -> Option<usize> {
        match &*self.stage.borrow() {
            Stage::Portfolio(view) => Some(view.current_index()),
            _ => None,
        }
    }
}

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

/// Read the optional JSON configuration block, falling back to defaults.
pub fn load_config() -> PortfolioConfig {
    let json = dom::document()
        .ok()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    match json {
        Some(json) => PortfolioConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("ignoring configuration: {err}");
            PortfolioConfig::default()
        }),
        None => PortfolioConfig::default(),
    }
}

/// Mount the site into `#root_id` with the page's configuration, replacing
/// anything mounted before.
pub fn mount(root_id: &str) -> Result<()> {
    logging::init(log::LevelFilter::Info);
    mount_with(root_id, load_config())
}

pub fn mount_with(root_id: &str, config: PortfolioConfig) -> Result<()> {
    logging::init(config.log_level());
    let root = dom::document()?
        .get_element_by_id(root_id)
        .ok_or_else(|| Error::MissingElement(root_id.to_owned()))?;
    unmount();
    let app = App::start(root, config)?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

/// Tear down the mounted site: listeners detach, timers cancel, effects are
/// destroyed.
pub fn unmount() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    drop(app);
}

/// Run `f` against the mounted app, if any.
pub fn with_app<R>(f: impl FnOnce(&App) -> R) -> Option<R> {
    APP.with(|slot| slot.borrow().as_deref().map(f))
}
