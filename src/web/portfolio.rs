//! The paginated portfolio: floating nav, parallax background, section strip
//! and progress dots, wired to a [`Navigator`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, KeyboardEvent, TouchEvent, WheelEvent,
};

use super::animator::DomAnimator;
use super::dom;
use crate::config::PortfolioConfig;
use crate::engine::{
    Key, NavInput, NavigationSettings, Navigator, PreloadGate, SectionList, SwipeTracker, Underline,
};
use crate::error::Result;

type SharedNavigator = Rc<RefCell<Navigator<DomAnimator>>>;

/// Nav labels and progress dots, restyled whenever the displayed section
/// changes.
#[derive(Clone)]
struct Indicators {
    nav_list: HtmlElement,
    items: Vec<HtmlElement>,
    dots: Vec<HtmlElement>,
}

impl Indicators {
    fn highlight(&self, index: usize) {
        for (i, (item, dot)) in self.items.iter().zip(&self.dots).enumerate() {
            dom::set_class(item, "active", i == index);
            dom::set_class(dot, "active", i == index);
        }
        self.place_underline(index);
    }

    fn place_underline(&self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        let underline = Underline::under(dom::client_rect(item), dom::client_rect(&self.nav_list));
        let style = self.nav_list.style();
        for (property, value) in underline.css_properties() {
            if let Err(err) = style.set_property(property, &value) {
                log::warn!("setting {property} failed: {err:?}");
            }
        }
    }
}

#[derive(Clone)]
struct LoadingOverlay {
    root: HtmlElement,
    message: HtmlElement,
    gate: Rc<RefCell<PreloadGate>>,
}

impl LoadingOverlay {
    fn refresh(&self) {
        match self.gate.borrow().message() {
            Some(text) => {
                self.message.set_text_content(Some(text));
                dom::set_class(&self.root, "hidden", false);
            }
            None => dom::set_class(&self.root, "hidden", true),
        }
    }
}

pub struct PortfolioView {
    root: HtmlElement,
    navigator: SharedNavigator,
    _listeners: Vec<EventListener>,
    _loading_timer: Timeout,
    _underline_timer: Rc<RefCell<Option<Timeout>>>,
    _background_image: HtmlImageElement,
}

impl PortfolioView {
    pub fn mount(parent: &Element, config: &PortfolioConfig) -> Result<Self> {
        let sections = SectionList::new(config.sections.clone())?;
        let document = dom::document()?;

        let root = dom::element(&document, "div", "portfolio-container")?;

        let overlay = LoadingOverlay {
            root: dom::element(&document, "div", "loading-screen")?,
            message: dom::element(&document, "p", "")?,
            gate: Rc::new(RefCell::new(PreloadGate::default())),
        };
        overlay.root.append_child(&dom::element(&document, "div", "loader")?)?;
        overlay.root.append_child(&overlay.message)?;
        overlay.refresh();
        root.append_child(&overlay.root)?;

        let nav = dom::element(&document, "nav", "floating-nav")?;
        let nav_list = dom::element(&document, "ul", "")?;
        let mut items = Vec::with_capacity(sections.len());
        for name in sections.names() {
            let item = dom::text_element(&document, "li", "", name)?;
            nav_list.append_child(&item)?;
            items.push(item);
        }
        nav.append_child(&nav_list)?;
        root.append_child(&nav)?;

        let background = dom::element(&document, "div", "parallax-bg")?;
        let bg_style = background.style();
        // One viewport of background per section.
        bg_style.set_property("width", &format!("{}vw", sections.len() * 100))?;
        bg_style.set_property("--bg-image-png", &format!("url({})", config.background.image_url))?;
        bg_style.set_property(
            "--bg-image-fallback",
            &format!("url({})", config.background.fallback_url),
        )?;
        root.append_child(&background)?;

        root.append_child(&dom::text_element(
            &document,
            "div",
            "scroll-indicator",
            &config.navigation.scroll_hint,
        )?)?;

        let progress = dom::element(&document, "div", "progress-indicator")?;
        let dot_row = dom::element(&document, "div", "progress-dots")?;
        let mut dots = Vec::with_capacity(sections.len());
        for _ in 0..sections.len() {
            let dot = dom::element(&document, "div", "dot")?;
            dot_row.append_child(&dot)?;
            dots.push(dot);
        }
        progress.append_child(&dot_row)?;
        root.append_child(&progress)?;

        let strip = build_strip(&document, &sections)?;
        root.append_child(&strip)?;
        parent.append_child(&root)?;

        let indicators = Indicators { nav_list, items, dots };
        indicators.highlight(0);

        let settings = NavigationSettings::from(&config.navigation);
        let navigator: SharedNavigator = Rc::new_cyclic(|weak: &Weak<RefCell<_>>| {
            let weak = weak.clone();
            let animator = DomAnimator::new(strip.clone(), background.clone(), move |ticket| {
                if let Some(navigator) = weak.upgrade() {
                    navigator.borrow_mut().complete(ticket);
                }
            });
            RefCell::new(Navigator::new(sections, animator, settings, dom::viewport_width()))
        });
        {
            let mut nav = navigator.borrow_mut();
            let indicators = indicators.clone();
            nav.on_displayed_change(move |index| indicators.highlight(index));
            nav.attach_surfaces();
        }

        let mut listeners = input_listeners(&root, &navigator, &indicators)?;
        let background_image =
            preload_background(&config.background.image_url, &overlay, &mut listeners)?;

        let underline_timer = Rc::new(RefCell::new(None));
        let loading_timer = {
            let navigator = Rc::clone(&navigator);
            let overlay = overlay.clone();
            let underline_timer = Rc::clone(&underline_timer);
            let underline_delay = config.navigation.underline_init_delay_ms;
            Timeout::new(config.navigation.min_loading_ms, move || {
                overlay.gate.borrow_mut().min_delay_elapsed();
                overlay.refresh();
                navigator.borrow_mut().resize(dom::viewport_width());

                let navigator = Rc::clone(&navigator);
                let indicators = indicators.clone();
                *underline_timer.borrow_mut() = Some(Timeout::new(underline_delay, move || {
                    indicators.place_underline(navigator.borrow().displayed_index());
                }));
            })
        };

        log::debug!("portfolio mounted with {} sections", navigator.borrow().sections().len());
        Ok(Self {
            root,
            navigator,
            _listeners: listeners,
            _loading_timer: loading_timer,
            _underline_timer: underline_timer,
            _background_image: background_image,
        })
    }

    pub fn current_index(&self) -> usize {
        self.navigator.borrow().current_index()
    }
}

impl Drop for PortfolioView {
    fn drop(&mut self) {
        if let Ok(mut navigator) = self.navigator.try_borrow_mut() {
            navigator.detach_surfaces();
        }
        self.root.remove();
    }
}

fn build_strip(document: &Document, sections: &SectionList) -> Result<HtmlElement> {
    let strip = dom::element(document, "div", "sections-container")?;
    for section in sections.iter() {
        let panel = dom::element(document, "div", "section-panel")?;
        let content = dom::element(document, "div", "content")?;
        content.append_child(&dom::text_element(document, "h2", "", &section.name)?)?;
        let body = dom::element(document, "div", "")?;
        for paragraph in &section.paragraphs {
            body.append_child(&dom::text_element(document, "p", "", paragraph)?)?;
        }
        content.append_child(&body)?;
        panel.append_child(&content)?;
        strip.append_child(&panel)?;
    }
    Ok(strip)
}

fn input_listeners(
    container: &HtmlElement,
    navigator: &SharedNavigator,
    indicators: &Indicators,
) -> Result<Vec<EventListener>> {
    let window = dom::window()?;
    let mut listeners = Vec::new();

    let nav = Rc::clone(navigator);
    listeners.push(EventListener::new_with_options(
        &window,
        "wheel",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            if let Some(event) = event.dyn_ref::<WheelEvent>() {
                nav.borrow_mut().handle_input(NavInput::Wheel { delta_y: event.delta_y() });
            }
        },
    ));

    let tracker = Rc::new(RefCell::new(SwipeTracker::default()));
    {
        let tracker = Rc::clone(&tracker);
        listeners.push(EventListener::new(container, "touchstart", move |event| {
            if let Some(x) = first_changed_touch_x(event) {
                tracker.borrow_mut().begin(x);
            }
        }));
    }
    let nav = Rc::clone(navigator);
    listeners.push(EventListener::new(container, "touchend", move |event| {
        let Some(x) = first_changed_touch_x(event) else {
            return;
        };
        let swipe = tracker.borrow_mut().end(x);
        if let Some(swipe) = swipe {
            nav.borrow_mut().handle_input(swipe);
        }
    }));

    let nav = Rc::clone(navigator);
    listeners.push(EventListener::new(&window, "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            nav.borrow_mut().handle_input(NavInput::Key(Key::from_key_name(&event.key())));
        }
    }));

    let nav = Rc::clone(navigator);
    let resize_indicators = indicators.clone();
    listeners.push(EventListener::new(&window, "resize", move |_| {
        let displayed = {
            let mut nav = nav.borrow_mut();
            nav.resize(dom::viewport_width());
            nav.displayed_index()
        };
        resize_indicators.place_underline(displayed);
    }));

    for (index, target) in indicators.items.iter().chain(&indicators.dots).enumerate() {
        let nav = Rc::clone(navigator);
        let index = index % indicators.items.len();
        listeners.push(EventListener::new(target, "click", move |_| {
            nav.borrow_mut().request_navigate(index);
        }));
    }

    Ok(listeners)
}

fn first_changed_touch_x(event: &web_sys::Event) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touch = event.changed_touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

/// Load the background image off-DOM; the overlay waits for it either way.
fn preload_background(
    url: &str,
    overlay: &LoadingOverlay,
    listeners: &mut Vec<EventListener>,
) -> Result<HtmlImageElement> {
    let image = HtmlImageElement::new()?;
    for (event, loaded) in [("load", true), ("error", false)] {
        let overlay = overlay.clone();
        let url = url.to_owned();
        listeners.push(EventListener::once(&image, event, move |_| {
            if loaded {
                log::info!("background image {url} loaded");
            } else {
                log::warn!("background image {url} failed to load, using fallback");
            }
            overlay.gate.borrow_mut().image_settled(loaded);
            overlay.refresh();
        }));
    }
    image.set_src(url);
    Ok(image)
}
