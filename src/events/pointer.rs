use crate::dom;
use crate::frame::SharedDriver;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Sub-pixel `clientX`/`clientY`; the typed web-sys getters round to `i32`.
fn client_coord(ev: &web::Event, key: &str) -> Option<f64> {
    let target: &JsValue = ev.as_ref();
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()?
        .as_f64()
}

/// Pointer move/press/release feed the driver's shared pointer state.
pub fn wire_pointer_handlers(window: &web::Window, driver: &SharedDriver) {
    let target: &web::EventTarget = window.as_ref();

    let d = driver.clone();
    dom::add_listener(target, "pointermove", true, move |ev| {
        let x = client_coord(&ev, "clientX");
        let y = client_coord(&ev, "clientY");
        if let (Some(x), Some(y)) = (x, y) {
            d.borrow_mut().on_pointer_move(x as f32, y as f32);
        }
    });

    let d = driver.clone();
    dom::add_listener(target, "pointerdown", true, move |_| {
        d.borrow_mut().on_pointer_down();
    });

    for event in ["pointerup", "pointercancel"] {
        let d = driver.clone();
        dom::add_listener(target, event, true, move |_| {
            d.borrow_mut().on_pointer_up();
        });
    }
}
