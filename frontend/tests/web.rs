//! Browser tests: `wasm-pack test --headless --firefox frontend`.
#![cfg(target_arch = "wasm32")]

use focus_landing::components::showcase::{Preload, ShowcasePanel};
use focus_landing::error::FrontendError;
use focus_landing::utils::listener::WindowListener;
use focus_landing::utils::preload::preload_all;
use focus_landing::App;
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::AppHandle;

wasm_bindgen_test_configure!(run_in_browser);

// 1x1 transparent GIF
const PIXEL: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";
const BROKEN: &str = "data:image/png;base64,AAAA";

#[wasm_bindgen_test]
async fn one_broken_image_does_not_spoil_the_batch() {
    let results = preload_all(&[PIXEL, BROKEN, PIXEL]).await;
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(FrontendError::ImageLoad { .. })));
    assert!(results[2].is_ok());

    let preload = Preload::settled(results.as_slice());
    assert!(preload.is_ready());
    assert_eq!(ShowcasePanel::for_state(&preload, 1), ShowcasePanel::Fallback(1));
    assert_eq!(ShowcasePanel::for_state(&preload, 2), ShowcasePanel::Image(2));
}

#[wasm_bindgen_test]
async fn empty_batch_settles_immediately() {
    assert!(preload_all(&[]).await.is_empty());
}

fn dispatch(event: &str) {
    let window = web_sys::window().unwrap();
    let event = Event::new(event).unwrap();
    window.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn listener_is_removed_on_drop() {
    let hits = Rc::new(Cell::new(0));
    let listener = {
        let hits = hits.clone();
        WindowListener::passive("scroll", move |_| hits.set(hits.get() + 1)).unwrap()
    };
    dispatch("scroll");
    dispatch("scroll");
    assert_eq!(hits.get(), 2);

    drop(listener);
    dispatch("scroll");
    assert_eq!(hits.get(), 2);
}

async fn mount() -> (AppHandle<App>, Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let handle = yew::Renderer::<App>::with_root(root.clone()).render();
    settle().await;
    (handle, root)
}

/// Lets the scheduler flush pending renders and effects.
async fn settle() {
    TimeoutFuture::new(0).await;
}

fn click(root: &Element, selector: &str, nth: u32) {
    root.query_selector_all(selector)
        .unwrap()
        .item(nth)
        .unwrap_or_else(|| panic!("no {selector} #{nth}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn has(root: &Element, selector: &str) -> bool {
    root.query_selector(selector).unwrap().is_some()
}

fn is_active_step(root: &Element, nth: u32) -> bool {
    root.query_selector_all(".step-row")
        .unwrap()
        .item(nth)
        .unwrap()
        .dyn_into::<Element>()
        .unwrap()
        .class_name()
        .split_whitespace()
        .any(|class| class == "active")
}

fn scroll_window_to(offset: f64) {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, offset);
    // The browser delivers its own scroll event a frame later; fire one now
    dispatch("scroll");
}

#[wasm_bindgen_test]
async fn app_renders_every_section() {
    let (handle, root) = mount().await;

    for selector in [".navbar", ".hero", ".features-stack", ".showcase", ".thematic", ".pricing"] {
        assert!(has(&root, selector), "missing section {selector}");
    }
    assert_eq!(root.query_selector_all(".stack-card").unwrap().length(), 5);
    assert_eq!(root.query_selector_all(".step-row").unwrap().length(), 3);
    assert_eq!(root.query_selector_all(".plan-card").unwrap().length(), 2);
    assert!(!has(&root, ".theme-modal"));
    assert!(is_active_step(&root, 0));

    handle.destroy();
}

#[wasm_bindgen_test]
async fn escape_closes_theme_modal() {
    let (handle, root) = mount().await;

    click(&root, ".theme-tile", 0);
    settle().await;
    assert!(has(&root, ".theme-modal"));

    let init = KeyboardEventInit::new();
    init.set_key("Enter");
    let enter = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&enter).unwrap();
    settle().await;
    assert!(has(&root, ".theme-modal"), "only Escape closes the modal");

    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&escape).unwrap();
    settle().await;
    assert!(!has(&root, ".theme-modal"));

    handle.destroy();
}

#[wasm_bindgen_test]
async fn backdrop_and_close_button_dismiss_theme_modal() {
    let (handle, root) = mount().await;

    click(&root, ".theme-tile", 1);
    settle().await;
    assert!(has(&root, ".theme-modal"));
    click(&root, ".theme-modal-backdrop", 0);
    settle().await;
    assert!(!has(&root, ".theme-modal"));

    click(&root, ".theme-tile", 2);
    settle().await;
    let title = root.query_selector(".theme-modal h3").unwrap().unwrap();
    assert_eq!(title.text_content().as_deref(), Some("IA"));
    click(&root, ".theme-modal-close", 0);
    settle().await;
    assert!(!has(&root, ".theme-modal"));

    handle.destroy();
}

#[wasm_bindgen_test]
async fn clicking_a_step_activates_it_and_restarts_the_timer() {
    let (handle, root) = mount().await;

    // Click 1.5s before the first tick would have fired at 4.5s
    TimeoutFuture::new(3_000).await;
    click(&root, ".step-row", 2);
    settle().await;
    assert!(is_active_step(&root, 2));
    assert!(!is_active_step(&root, 0));

    // Past the original 4.5s mark; a timer left running would have wrapped to step 0
    TimeoutFuture::new(2_500).await;
    assert!(is_active_step(&root, 2));

    handle.destroy();
}

#[wasm_bindgen_test]
async fn unmounting_mid_preload_is_quiet() {
    let (handle, root) = mount().await;
    handle.destroy();

    // Long enough for the preload batch and at least one rotation period to come due
    TimeoutFuture::new(5_000).await;
    assert_eq!(root.child_element_count(), 0);
}

#[wasm_bindgen_test]
async fn navbar_hides_past_dead_zone_and_returns_on_scroll_up() {
    let (handle, root) = mount().await;
    root.set_attribute("style", "min-height: 6000px;").unwrap();

    scroll_window_to(40.0);
    settle().await;
    assert!(!has(&root, ".navbar.hidden"), "inside the dead zone");

    scroll_window_to(400.0);
    settle().await;
    assert!(has(&root, ".navbar.hidden"));

    scroll_window_to(300.0);
    settle().await;
    assert!(!has(&root, ".navbar.hidden"));

    scroll_window_to(0.0);
    handle.destroy();
    root.remove();
}
