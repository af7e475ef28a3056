use std::cell::RefCell;
use std::collections::HashMap;

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{ObservationUnavailable, RevealController, TargetId, ViewportObserver, WeakRevealController};

const TARGET_ATTR: &str = "data-reveal-id";

thread_local! {
    static DOM: RefCell<DomState> = RefCell::new(DomState::default());
}

struct ThresholdObserver {
    threshold: f64,
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

#[derive(Default)]
struct DomState {
    controller: Option<WeakRevealController>,
    observers: Vec<ThresholdObserver>,
    elements: HashMap<TargetId, (Element, Option<usize>)>,
}

impl DomState {
    fn observer_for(&mut self, threshold: f64) -> Result<usize, ObservationUnavailable> {
        if let Some(index) = self.observers.iter().position(|o| o.threshold == threshold) {
            return Ok(index);
        }

        let callback = Closure::<dyn FnMut(Array)>::new(dispatch);
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| {
                tracing::warn!(?err, threshold, "IntersectionObserver construction failed");
                ObservationUnavailable
            })?;

        self.observers.push(ThresholdObserver {
            threshold,
            observer,
            _callback: callback,
        });
        Ok(self.observers.len() - 1)
    }

    fn observe(&mut self, target: TargetId, threshold: f64) -> Result<(), ObservationUnavailable> {
        let index = self.observer_for(threshold)?;
        let (element, slot) = self.elements.get_mut(&target).ok_or(ObservationUnavailable)?;
        self.observers[index].observer.observe(element);
        *slot = Some(index);
        Ok(())
    }

    fn unobserve(&mut self, target: TargetId) {
        if let Some((element, Some(index))) = self.elements.remove(&target) {
            self.observers[index].observer.unobserve(&element);
        }
    }
}

/// Forwards intersection entries to the connected controller.
fn dispatch(entries: Array) {
    let Some(controller) = DOM.with(|dom| dom.borrow().controller.as_ref().and_then(WeakRevealController::upgrade)) else {
        return;
    };
    for entry in entries.iter() {
        let entry: IntersectionObserverEntry = entry.unchecked_into();
        let Some(target) = entry
            .target()
            .get_attribute(TARGET_ATTR)
            .and_then(|raw| raw.parse::<TargetId>().ok())
        else {
            continue;
        };
        controller.on_visibility_change(target, entry.is_intersecting());
    }
}

/// Browser viewport observation through `IntersectionObserver`.
///
/// One observer is shared per distinct threshold. Elements are handed over
/// with [`DomViewport::attach`] before their target is registered; the
/// controller's `register` then starts observing them.
#[derive(Debug, Clone, Copy)]
pub struct DomViewport {
    _private: (),
}

impl DomViewport {
    /// Fails when the host has no `IntersectionObserver`.
    pub fn install() -> Result<Self, ObservationUnavailable> {
        let window = web_sys::window().ok_or(ObservationUnavailable)?;
        let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if supported {
            Ok(Self { _private: () })
        } else {
            Err(ObservationUnavailable)
        }
    }

    /// Routes future intersection entries to `controller`.
    pub fn connect(self, controller: &RevealController) {
        DOM.with(|dom| dom.borrow_mut().controller = Some(controller.downgrade()));
    }

    /// Binds `element` to `target`, tagging it so entries can be traced back.
    pub fn attach(self, target: TargetId, element: Element) {
        if let Err(err) = element.set_attribute(TARGET_ATTR, &target.to_string()) {
            tracing::warn!(?err, %target, "could not tag reveal element");
            return;
        }
        DOM.with(|dom| dom.borrow_mut().elements.insert(target, (element, None)));
    }
}

impl ViewportObserver for DomViewport {
    fn observe(&self, target: TargetId, threshold: f64) -> Result<(), ObservationUnavailable> {
        DOM.with(|dom| dom.borrow_mut().observe(target, threshold))
    }

    fn unobserve(&self, target: TargetId) {
        DOM.with(|dom| dom.borrow_mut().unobserve(target));
    }
}
