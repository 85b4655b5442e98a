#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::timers::future::TimeoutFuture;
use portfolio_wasm::engine::{
    Animator, Easing, NavigationSettings, Navigator, SectionList, Surface, Tween,
};
use portfolio_wasm::{web, PortfolioConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_root(id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(old) = document.get_element_by_id(id) {
        old.remove();
    }
    let root = document.create_element("div").unwrap();
    root.set_id(id);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn html(element: Option<web_sys::Element>) -> HtmlElement {
    element.unwrap().dyn_into::<HtmlElement>().unwrap()
}

fn transform(element: &HtmlElement) -> String {
    element.style().get_property_value("transform").unwrap()
}

async fn sleep(ms: u32) {
    TimeoutFuture::new(ms).await;
}

/// A 1×1 GIF, so the background preload settles without a network fetch.
const PIXEL: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

fn quick_config() -> PortfolioConfig {
    let mut config = PortfolioConfig::default();
    config.navigation.duration_s = 0.05;
    config.navigation.min_loading_ms = 10;
    config.background.image_url = PIXEL.into();
    config
}

#[wasm_bindgen_test]
fn splash_mounts_first() {
    let root = fresh_root("app-splash");
    web::mount("app-splash").unwrap();

    assert_eq!(web::with_app(|app| app.showing_splash()), Some(true));
    let status = root
        .query_selector(".loading-content")
        .unwrap()
        .expect("splash content rendered");
    assert_eq!(status.get_attribute("role").as_deref(), Some("status"));
    assert_eq!(
        root.query_selector(".loading-text").unwrap().unwrap().text_content().as_deref(),
        Some("Loading portfolio...")
    );

    web::unmount();
    assert!(root.first_child().is_none());
    assert!(web::with_app(|_| ()).is_none());
}

#[wasm_bindgen_test]
fn portfolio_renders_every_section() {
    let root = fresh_root("app-portfolio");
    let config = PortfolioConfig::default();
    let view = web::PortfolioView::mount(&root, &config).unwrap();

    let items = root.query_selector_all(".floating-nav li").unwrap();
    assert_eq!(items.length(), 5);
    assert_eq!(root.query_selector_all(".dot").unwrap().length(), 5);
    assert_eq!(root.query_selector_all(".section-panel").unwrap().length(), 5);

    let first = items.get(0).unwrap().dyn_into::<web_sys::Element>().unwrap();
    assert!(first.class_list().contains("active"));
    assert_eq!(view.current_index(), 0);

    let nav_list = root
        .query_selector(".floating-nav ul")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    assert_eq!(
        nav_list.style().get_property_value("--underline-opacity").unwrap(),
        "1"
    );

    let background = html(root.query_selector(".parallax-bg").unwrap());
    assert_eq!(background.style().get_property_value("width").unwrap(), "500vw");

    drop(view);
    assert!(root.first_child().is_none());
}

#[wasm_bindgen_test]
async fn keyboard_wheel_and_dots_navigate() {
    let root = fresh_root("app-inputs");
    let view = web::PortfolioView::mount(&root, &quick_config()).unwrap();
    let window = web_sys::window().unwrap();

    let init = web_sys::KeyboardEventInit::new();
    init.set_key("ArrowRight");
    let key =
        web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    window.dispatch_event(&key).unwrap();
    sleep(300).await;
    assert_eq!(view.current_index(), 1);

    let init = web_sys::WheelEventInit::new();
    init.set_delta_y(120.0);
    init.set_cancelable(true);
    let wheel = web_sys::WheelEvent::new_with_event_init_dict("wheel", &init).unwrap();
    // `false` means a listener called `preventDefault`.
    assert!(!window.dispatch_event(&wheel).unwrap());
    sleep(300).await;
    assert_eq!(view.current_index(), 2);

    let dot = html(root.query_selector(".dot:nth-child(5)").unwrap());
    dot.click();
    sleep(300).await;
    assert_eq!(view.current_index(), 4);
    assert!(dot.class_list().contains("active"));

    let label = html(root.query_selector(".floating-nav li").unwrap());
    label.click();
    sleep(300).await;
    assert_eq!(view.current_index(), 0);
    assert!(label.class_list().contains("active"));
    assert!(!dot.class_list().contains("active"));

    drop(view);
}

#[wasm_bindgen_test]
async fn loading_overlay_clears_after_the_minimum_delay() {
    let root = fresh_root("app-overlay");
    let mut config = quick_config();
    config.navigation.min_loading_ms = 150;
    let view = web::PortfolioView::mount(&root, &config).unwrap();
    let overlay = html(root.query_selector(".loading-screen").unwrap());

    sleep(50).await;
    assert!(!overlay.class_list().contains("hidden"));
    sleep(300).await;
    assert!(overlay.class_list().contains("hidden"));

    drop(view);
}

#[wasm_bindgen_test]
async fn splash_hands_over_to_the_portfolio() {
    let root = fresh_root("app-swap");
    let mut config = quick_config();
    config.splash.display_ms = 50;
    config.splash.fade_ms = 200;
    web::mount_with("app-swap", config).unwrap();
    assert_eq!(web::with_app(|app| app.showing_splash()), Some(true));

    sleep(120).await;
    let splash = html(root.query_selector(".loading-experience").unwrap());
    assert!(splash.class_list().contains("fade-out"));
    assert_eq!(web::with_app(|app| app.showing_splash()), Some(true));

    sleep(400).await;
    assert_eq!(web::with_app(|app| app.showing_splash()), Some(false));
    assert_eq!(web::with_app(|app| app.current_section()), Some(Some(0)));
    assert!(root.query_selector(".loading-experience").unwrap().is_none());
    assert!(root.query_selector(".portfolio-container").unwrap().is_some());

    web::unmount();
    assert!(root.first_child().is_none());
}

type DomNavigator = Rc<RefCell<Navigator<web::DomAnimator>>>;

fn dom_navigator(foreground: &HtmlElement, background: &HtmlElement) -> DomNavigator {
    let settings = NavigationSettings {
        tween: Tween::new(0.2, Easing::Linear),
        swipe_threshold_px: 50.0,
    };
    let navigator = Rc::new_cyclic(|weak: &Weak<RefCell<Navigator<web::DomAnimator>>>| {
        let weak = weak.clone();
        let on_complete = move |ticket| {
            if let Some(navigator) = weak.upgrade() {
                navigator.borrow_mut().complete(ticket);
            }
        };
        let animator =
            web::DomAnimator::new(foreground.clone(), background.clone(), on_complete);
        let sections = SectionList::from_names(["a", "b", "c"]).unwrap();
        RefCell::new(Navigator::new(sections, animator, settings, 400.0))
    });
    navigator.borrow_mut().attach_surfaces();
    navigator
}

fn surfaces(root: &web_sys::Element) -> (HtmlElement, HtmlElement) {
    let document = web_sys::window().unwrap().document().unwrap();
    let make = || {
        let element = html(Some(document.create_element("div").unwrap()));
        root.append_child(&element).unwrap();
        element
    };
    (make(), make())
}

#[wasm_bindgen_test]
async fn animator_moves_surfaces_in_lockstep_and_reports_completion() {
    let root = fresh_root("animator-lockstep");
    let (foreground, background) = surfaces(&root);
    let navigator = dom_navigator(&foreground, &background);

    navigator.borrow_mut().request_navigate(2).unwrap();
    sleep(60).await;
    assert!(navigator.borrow().is_animating());
    assert_eq!(transform(&foreground), transform(&background));

    sleep(400).await;
    assert!(!navigator.borrow().is_animating());
    assert_eq!(navigator.borrow().current_index(), 2);
    assert!(transform(&foreground).contains("-800px"));
    assert_eq!(transform(&foreground), transform(&background));
}

#[wasm_bindgen_test]
async fn replaced_motion_never_reports_its_ticket() {
    let root = fresh_root("animator-replace");
    let (foreground, background) = surfaces(&root);
    let navigator = dom_navigator(&foreground, &background);

    navigator.borrow_mut().request_navigate(1).unwrap();
    navigator.borrow_mut().animator_mut().animate_to(
        Surface::Foreground,
        -100.0,
        &Tween::new(0.05, Easing::Linear),
        None,
    );
    sleep(400).await;

    assert!(navigator.borrow().is_animating());
    assert_eq!(navigator.borrow().current_index(), 0);
    assert!(transform(&foreground).contains("-100px"));
    assert!(transform(&background).contains("-400px"));
}

#[wasm_bindgen_test]
fn missing_root_is_an_error() {
    assert!(web::mount("no-such-root").is_err());
}
