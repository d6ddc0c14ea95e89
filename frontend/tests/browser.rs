#![cfg(target_arch = "wasm32")]

use aurora_landing::components::nav::{Navbar, NavbarProps};
use aurora_landing::components::scramble_text::{ScrambleText, ScrambleTextProps};
use aurora_landing::content::PageContent;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_point() -> Element {
    let root = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&root).unwrap();
    root
}

fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

fn click(root: &Element, selector: &str) {
    find(root, selector)
        .unwrap_or_else(|| panic!("no {selector}"))
        .unchecked_into::<HtmlElement>()
        .click();
}

fn body_overflow() -> String {
    document().body().unwrap().style().get_property_value("overflow").unwrap()
}

fn navbar_props() -> NavbarProps {
    let content = PageContent::bundled().unwrap();
    NavbarProps { brand: content.brand, links: content.nav_links }
}

/// Lets the scheduler flush renders and effects.
async fn settle() {
    TimeoutFuture::new(20).await;
}

#[wasm_bindgen_test]
async fn menu_link_closes_open_menu() {
    let root = mount_point();
    let app = yew::Renderer::<Navbar>::with_root_and_props(root.clone(), navbar_props()).render();
    settle().await;
    assert!(find(&root, ".mobile-menu").is_none());

    click(&root, ".menu-button");
    settle().await;
    assert!(find(&root, ".mobile-menu").is_some());
    assert_eq!(body_overflow(), "hidden");

    click(&root, ".mobile-link");
    settle().await;
    assert!(find(&root, ".mobile-menu").is_none());
    assert_eq!(body_overflow(), "");

    app.destroy();
}

#[wasm_bindgen_test]
async fn close_button_and_cta_close_menu() {
    let root = mount_point();
    let app = yew::Renderer::<Navbar>::with_root_and_props(root.clone(), navbar_props()).render();
    settle().await;

    for control in [".menu-close", ".mobile-cta"] {
        click(&root, ".menu-button");
        settle().await;
        assert!(find(&root, ".mobile-menu").is_some());

        click(&root, control);
        settle().await;
        assert!(find(&root, ".mobile-menu").is_none(), "{control} left the menu open");
    }

    app.destroy();
}

#[wasm_bindgen_test]
async fn escape_closes_menu() {
    let root = mount_point();
    let app = yew::Renderer::<Navbar>::with_root_and_props(root.clone(), navbar_props()).render();
    settle().await;

    click(&root, ".menu-button");
    settle().await;
    assert!(find(&root, ".mobile-menu").is_some());

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
    settle().await;
    assert!(find(&root, ".mobile-menu").is_none());

    app.destroy();
}

#[wasm_bindgen_test]
async fn scramble_settles_on_target_and_stops() {
    const TARGET: &str = "Aurora";
    let root = mount_point();
    let app = yew::Renderer::<ScrambleText>::with_root_and_props(
        root.clone(),
        ScrambleTextProps { text: TARGET.into() },
    )
    .render();

    // 6 chars * 3 ticks * 30ms, with slack for timer clamping.
    TimeoutFuture::new(1_500).await;
    let text = || find(&root, ".scramble-text").and_then(|span| span.text_content());
    assert_eq!(text().as_deref(), Some(TARGET));

    TimeoutFuture::new(300).await;
    assert_eq!(text().as_deref(), Some(TARGET));

    app.destroy();
}
