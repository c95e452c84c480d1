#![cfg(target_arch = "wasm32")]
use crate::registry::{Registry, RegistryError};
use crate::state::{Markers, ToggleGroup};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod constants;
mod dom;
mod events;
pub mod registry;
pub mod state;

thread_local! {
    static REGISTRY: RefCell<Registry<web::Element>> = RefCell::new(Registry::new(Markers::default()));
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showhide-web loaded");
    Ok(())
}

/// Scan the document for both toggle groups and wire their listeners.
///
/// Call once the page's view tree is built. Calling again only picks up
/// elements that were not registered yet.
#[wasm_bindgen(js_name = initToggles)]
pub fn init_toggles() -> Result<(), JsValue> {
    let (click, hover) = scan_document().map_err(|e| JsValue::from_str(&format!("{e:?}")))?;
    log::info!("[init] click toggles={click} hover toggles={hover}");
    Ok(())
}

/// Like `initToggles`, with custom class names. Must be called before any
/// element is registered.
#[wasm_bindgen(js_name = initTogglesWith)]
pub fn init_toggles_with(
    click_group: String,
    hover_group: String,
    hidden: String,
    visible: String,
) -> Result<(), JsValue> {
    let markers = Markers {
        click_group,
        hover_group,
        hidden,
        visible,
    };
    REGISTRY
        .with(|r| match r.try_borrow_mut() {
            Ok(mut r) => r.set_markers(markers),
            Err(_) => Err(RegistryError::Busy),
        })
        .map_err(|e| {
            log::warn!("[init] {e}");
            to_js(e)
        })?;
    init_toggles()
}

/// Drop toggles for elements no longer in the page, then rescan. Returns how
/// many elements were newly registered.
#[wasm_bindgen(js_name = refreshToggles)]
pub fn refresh_toggles() -> Result<u32, JsValue> {
    let pruned = REGISTRY
        .with(|r| r.try_borrow_mut().map(|mut r| r.prune()))
        .map_err(|_| to_js(RegistryError::Busy))?;
    if pruned > 0 {
        log::debug!("[refresh] pruned {pruned} detached toggles");
    }
    let (click, hover) = scan_document().map_err(|e| JsValue::from_str(&format!("{e:?}")))?;
    Ok((click + hover) as u32)
}

/// Register a single element in `group` ("click", "hover", "showhide" or
/// "showhide_step"). Returns false when the element was already registered.
#[wasm_bindgen(js_name = registerToggle)]
pub fn register_toggle(element: web::Element, group: &str) -> Result<bool, JsValue> {
    let group: ToggleGroup = group.parse().map_err(|e| {
        log::warn!("[register] {e}");
        to_js(e)
    })?;
    let handle = REGISTRY
        .with(|r| registry::register_shared(r, element, group))
        .map_err(to_js)?;
    Ok(match handle {
        Some(h) => {
            events::wire_toggle(h);
            true
        }
        None => false,
    })
}

/// Current state of a registered element, or `undefined` if unregistered or
/// the registry is mid-update.
#[wasm_bindgen(js_name = isToggleVisible)]
pub fn is_toggle_visible(element: &web::Element) -> Option<bool> {
    REGISTRY.with(|r| {
        r.try_borrow()
            .ok()?
            .visibility(element)
            .map(|v| v.is_visible())
    })
}

fn scan_document() -> anyhow::Result<(usize, usize)> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let markers = REGISTRY
        .with(|r| r.try_borrow().map(|r| r.markers().clone()))
        .map_err(|_| anyhow::anyhow!(RegistryError::Busy))?;
    let mut counts = [0usize; 2];
    for (slot, group) in counts.iter_mut().zip(ToggleGroup::ALL) {
        let elements = dom::elements_matching(&document, &markers.selector(group));
        for element in elements {
            let handle = REGISTRY.with(|r| registry::register_shared(r, element, group))?;
            if let Some(h) = handle {
                events::wire_toggle(h);
                *slot += 1;
            }
        }
    }
    Ok((counts[0], counts[1]))
}
