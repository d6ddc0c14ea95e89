use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

use crate::error::DomError;
use crate::motion::scroll::ScrollSnapshot;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

fn body() -> Result<HtmlElement, DomError> {
    window()?
        .document()
        .ok_or(DomError::NoDocument)?
        .body()
        .ok_or(DomError::MissingElement("body"))
}

fn viewport_height(window: &Window) -> Result<f64, DomError> {
    window
        .inner_height()
        .map_err(|e| DomError::js("innerHeight", e))?
        .as_f64()
        .ok_or(DomError::MissingElement("viewport"))
}

/// Reads the current scroll offset and progress of the page.
pub fn scroll_snapshot() -> Result<ScrollSnapshot, DomError> {
    let window = window()?;
    let offset = window.scroll_y().map_err(|e| DomError::js("scrollY", e))?;
    let root = window
        .document()
        .ok_or(DomError::NoDocument)?
        .document_element()
        .ok_or(DomError::MissingElement("root"))?;
    // clientHeight excludes a horizontal scrollbar, unlike innerHeight.
    Ok(ScrollSnapshot::new(
        offset,
        root.scroll_height() as f64,
        root.client_height() as f64,
    ))
}

pub fn scroll_to_top() -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn scroll_to_section(id: &str) -> Result<(), DomError> {
    let target = window()?
        .document()
        .ok_or(DomError::NoDocument)?
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement("section"))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// True once any part of `element` sits inside the viewport.
pub fn is_in_viewport(element: &Element) -> Result<bool, DomError> {
    let viewport = viewport_height(&window()?)?;
    let rect = element.get_bounding_client_rect();
    Ok(rect.top() < viewport && rect.bottom() > 0.0)
}

/// A window event listener that unregisters itself when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut() + 'static,
    {
        let window = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| DomError::js("addEventListener", e))?;
        debug!("listening for window {}", event);
        Ok(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        debug!("stopped listening for window {}", self.event);
    }
}

/// Keeps the page from scrolling behind a full-screen overlay.
pub struct BodyScrollLock {
    body: HtmlElement,
    previous: String,
}

impl BodyScrollLock {
    pub fn acquire() -> Result<Self, DomError> {
        let body = body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        style
            .set_property("overflow", "hidden")
            .map_err(|e| DomError::js("lock body scroll", e))?;
        Ok(Self { body, previous })
    }
}

impl Drop for BodyScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let _ = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
    }
}
