use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use web_sys::{Element, HtmlElement};

use super::dom;
use super::vanta::{VantaClouds, VantaEffect};
use crate::config::PortfolioConfig;
use crate::engine::SplashController;
use crate::error::Result;

/// Full-screen splash: cloud background, spinner and status text.
pub struct SplashView {
    root: HtmlElement,
    controller: Rc<RefCell<SplashController<VantaEffect>>>,
    _timers: Vec<Timeout>,
}

impl SplashView {
    pub fn mount(
        parent: &Element,
        config: &PortfolioConfig,
        on_complete: impl FnOnce() + 'static,
    ) -> Result<Self> {
        let document = dom::document()?;
        let root = dom::element(&document, "div", "loading-experience")?;
        let background = dom::element(&document, "div", "loading-vanta-bg")?;
        let content = dom::element(&document, "div", "loading-content")?;
        content.set_attribute("role", "status")?;
        content.set_attribute("aria-live", "polite")?;
        let spinner = dom::element(&document, "div", "spinner")?;
        spinner.set_attribute("aria-hidden", "true")?;
        let text = dom::text_element(&document, "p", "loading-text", &config.splash.status_text)?;

        content.append_child(&spinner)?;
        content.append_child(&text)?;
        root.append_child(&background)?;
        root.append_child(&content)?;
        parent.append_child(&root)?;

        let mounted_at = dom::now_ms();
        let mut controller =
            SplashController::new(&config.splash, config.clouds.clone(), on_complete);
        controller.mount(&mut VantaClouds::new(background), mounted_at);
        let deadlines = controller.deadlines();
        let controller = Rc::new(RefCell::new(controller));

        let timers = deadlines
            .into_iter()
            .map(|deadline| {
                let controller = Rc::clone(&controller);
                let root = root.clone();
                Timeout::new(deadline, move || {
                    // Timers may fire a hair early relative to `performance.now()`.
                    let now = dom::now_ms().max(mounted_at + f64::from(deadline));
                    let visible = {
                        let mut controller = controller.borrow_mut();
                        controller.tick(now);
                        controller.is_visible()
                    };
                    dom::set_class(&root, "fade-out", !visible);
                })
            })
            .collect();

        log::debug!("splash mounted");
        Ok(Self {
            root,
            controller,
            _timers: timers,
        })
    }
}

impl Drop for SplashView {
    fn drop(&mut self) {
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.unmount();
        }
        self.root.remove();
    }
}
