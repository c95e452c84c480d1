use crate::registry::ToggleHandle;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Bind the group's trigger events on the toggle's element. Hover shares one
/// closure between enter and leave so each edge flips once.
///
/// Listeners live as long as the page, so the closure is never dropped.
pub fn wire_toggle(handle: ToggleHandle<web::Element>) {
    let element = handle.target().clone();
    let group = handle.group();

    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        handle.flip();
    }) as Box<dyn FnMut(_)>);

    for event in group.trigger_events() {
        _ = element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
