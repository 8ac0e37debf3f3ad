use crate::constants::{HOVER_MEDIA_QUERY, TOUCH_START_PROP};
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolve once the document has finished parsing.
pub async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    let state = js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string());
    if state.as_deref() != Some("loading") {
        return Ok(());
    }
    let doc = document.clone();
    let ready = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    JsFuture::from(ready)
        .await
        .map(|_| ())
        .map_err(|e| anyhow!("DOMContentLoaded: {:?}", e))
}

pub fn query_html(root: &web::Element, selector: &str) -> anyhow::Result<web::HtmlElement> {
    root.query_selector(selector)
        .map_err(|e| anyhow!("{} {:?}", selector, e))?
        .ok_or_else(|| anyhow!("missing {}", selector))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("{} is not an HTML element", selector))
}

pub fn query_all_html(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Write an inline style property; an empty value removes it.
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let style = el.style();
    if value.is_empty() {
        _ = style.remove_property(property);
    } else {
        _ = style.set_property(property, value);
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f32 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn hover_media_matches(window: &web::Window) -> bool {
    match window.match_media(HOVER_MEDIA_QUERY) {
        Ok(Some(mql)) => mql.matches(),
        _ => false,
    }
}

pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Top (in document coordinates) and height of `el`'s layout box. Walks the
/// offset-parent chain, so CSS transforms on the element are ignored.
pub fn layout_box(el: &web::HtmlElement) -> (f32, f32) {
    let mut top = 0.0;
    let mut node = Some(el.clone());
    while let Some(current) = node {
        top += current.offset_top() as f64;
        node = current
            .offset_parent()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok());
    }
    (top as f32, el.offset_height() as f32)
}

pub fn touch_capable(window: &web::Window) -> bool {
    let has_touch_start =
        js_sys::Reflect::has(window, &JsValue::from_str(TOUCH_START_PROP)).unwrap_or(false);
    has_touch_start || window.navigator().max_touch_points() > 0
}

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<E>(
        target: &web::EventTarget,
        kind: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> Self
    where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            handler(ev.unchecked_into::<E>());
        }) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
