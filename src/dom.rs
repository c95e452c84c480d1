use crate::constants::REGISTRATION_PROPERTY;
use crate::registry::ClassTarget;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

impl ClassTarget for web::Element {
    #[inline]
    fn add_class(&self, name: &str) {
        _ = self.class_list().add_1(name);
    }

    #[inline]
    fn remove_class(&self, name: &str) {
        _ = self.class_list().remove_1(name);
    }

    fn registration_id(&self) -> Option<u32> {
        js_sys::Reflect::get(self, &JsValue::from_str(REGISTRATION_PROPERTY))
            .ok()
            .and_then(|v| v.as_f64())
            .map(|n| n as u32)
    }

    fn set_registration_id(&self, id: u32) {
        _ = js_sys::Reflect::set(
            self,
            &JsValue::from_str(REGISTRATION_PROPERTY),
            &JsValue::from(id),
        );
    }

    #[inline]
    fn is_attached(&self) -> bool {
        self.is_connected()
    }
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Every element currently matching `selector`, in document order.
/// An invalid selector yields no elements.
pub fn elements_matching(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("[dom] invalid selector {selector:?}");
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}
