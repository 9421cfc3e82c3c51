use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use crate::error::Result;
use crate::reveal::{RevealOptions, RevealTracker, REVEALED_STYLE};

/// Fades gallery items in the first time they scroll into view.
pub struct RevealTrigger {
    tracker: Rc<RefCell<RevealTracker>>,
}

impl RevealTrigger {
    pub fn start(items: &[HtmlElement], options: &RevealOptions) -> Result<Self> {
        let items: Rc<Vec<HtmlElement>> = Rc::new(items.to_vec());
        let tracker = Rc::new(RefCell::new(RevealTracker::new(items.len())));

        let callback = {
            let items = items.clone();
            let tracker = tracker.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = items.iter().position(|item| {
                        AsRef::<JsValue>::as_ref(item) == AsRef::<JsValue>::as_ref(&target)
                    }) else {
                        continue;
                    };
                    if !tracker.borrow_mut().observe(index, entry.is_intersecting()) {
                        continue;
                    }
                    if let Err(err) = dom::set_styles(&items[index], &REVEALED_STYLE) {
                        log::warn!("reveal of item {index} failed: {err}");
                    }
                    // revealed for good, no need for further reports
                    observer.unobserve(&target);
                    log::debug!("revealed gallery item {index}");
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        callback.forget();

        for item in items.iter() {
            observer.observe(item);
        }

        Ok(Self { tracker })
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.tracker.borrow().is_revealed(index)
    }

    pub fn revealed_count(&self) -> usize {
        self.tracker.borrow().revealed_count()
    }
}
