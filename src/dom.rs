use crate::constants::LOADING_READY_STATE;
use crate::core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Evaluate a media query, `None` when `matchMedia` is unavailable.
pub fn media_query(query: &str) -> Option<web::MediaQueryList> {
    web::window()?.match_media(query).ok().flatten()
}

#[inline]
pub fn media_matches(query: &str) -> Option<bool> {
    media_query(query).map(|q| q.matches())
}

pub fn read_viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(0.0, 0.0, 1.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width as f32, height as f32, w.device_pixel_ratio())
}

/// Computed value of a CSS custom property on the document root.
pub fn root_css_var(name: &str) -> Option<String> {
    let w = web::window()?;
    let root = w.document()?.document_element()?;
    let styles = w.get_computed_style(&root).ok().flatten()?;
    styles.get_property_value(name).ok()
}

/// Register a long-lived listener; the closure is leaked for the page lifetime.
pub fn add_listener<T>(target: &web::EventTarget, event: &str, passive: bool, handler: T)
where
    T: FnMut(web::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Run `f` now, or on `DOMContentLoaded` while the document is still loading.
pub fn when_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != LOADING_READY_STATE {
        f();
        return;
    }
    let mut f = Some(f);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(f) = f.take() {
            f();
        }
    }) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
