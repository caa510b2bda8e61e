use crate::constants::{COLOR_SCHEME_QUERY, REDUCED_MOTION_QUERY};
use crate::dom;
use crate::frame::SharedDriver;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_resize(window: &web::Window, driver: &SharedDriver) {
    let d = driver.clone();
    dom::add_listener(window.as_ref(), "resize", true, move |_| {
        d.borrow_mut().on_resize();
    });
}

pub fn wire_visibility(document: &web::Document, driver: &SharedDriver) {
    let d = driver.clone();
    let doc = document.clone();
    dom::add_listener(document.as_ref(), "visibilitychange", false, move |_| {
        d.borrow_mut().on_visibility_change(doc.hidden());
    });
}

/// Pause when reduced motion is switched on mid-session.
pub fn wire_reduced_motion(driver: &SharedDriver) {
    let Some(query) = dom::media_query(REDUCED_MOTION_QUERY) else {
        return;
    };
    let d = driver.clone();
    let q = query.clone();
    dom::add_listener(query.as_ref(), "change", false, move |_| {
        d.borrow_mut().on_reduced_motion_change(q.matches());
    });
}

/// Refresh the palette when the theme can have changed: root `style`/`class`
/// mutations and light/dark scheme flips.
pub fn wire_theme_watch(document: &web::Document, driver: &SharedDriver) -> anyhow::Result<()> {
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;

    let d = driver.clone();
    let on_mutation = Closure::wrap(Box::new(move |_: js_sys::Array, _: web::MutationObserver| {
        d.borrow_mut().on_theme_change();
    }) as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);
    let observer = web::MutationObserver::new(on_mutation.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    on_mutation.forget();

    let init = web::MutationObserverInit::new();
    init.set_attributes(true);
    let filter = js_sys::Array::of2(&"style".into(), &"class".into());
    init.set_attribute_filter(&filter);
    observer
        .observe_with_options(&root, &init)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    if let Some(query) = dom::media_query(COLOR_SCHEME_QUERY) {
        let d = driver.clone();
        dom::add_listener(query.as_ref(), "change", false, move |_| {
            d.borrow_mut().on_theme_change();
        });
    }
    Ok(())
}
