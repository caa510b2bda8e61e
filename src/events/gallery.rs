use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

const TILE_SELECTOR: &str = "a.tile";
const PLACEHOLDER_HREF: &str = "#";

/// Keep placeholder gallery tiles (`href="#"`) from jumping to the top of the page.
pub fn wire_placeholder_guard(document: &web::Document) {
    dom::add_listener(document.as_ref(), "click", false, |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        let Ok(Some(link)) = target.closest(TILE_SELECTOR) else {
            return;
        };
        if link.get_attribute("href").as_deref() == Some(PLACEHOLDER_HREF) {
            ev.prevent_default();
        }
    });
}
