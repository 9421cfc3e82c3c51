use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement, KeyboardEvent};

use super::dom;
use crate::config::Selectors;
use crate::error::Result;
use crate::modal::{ItemContent, ModalState};

/// DOM handles of the single modal overlay.
struct ModalView {
    modal: HtmlElement,
    image: HtmlImageElement,
    title: Element,
    description: Element,
    close: Element,
    body: HtmlElement,
}

impl ModalView {
    fn apply(&self, state: &ModalState) -> Result<()> {
        if let Some(content) = state.content().filter(|_| state.is_open()) {
            self.image.set_src(&content.image_src);
            self.image.set_alt(&content.image_alt);
            self.title.set_text_content(Some(&content.title));
            self.description.set_text_content(Some(&content.description));
        }
        self.modal.style().set_property("display", state.display())?;
        self.body
            .style()
            .set_property("overflow", state.scroll_lock().overflow())?;
        if state.is_open() {
            // reading layout flushes styles so the entry transition starts from display:block
            let _ = self.modal.offset_height();
        }
        Ok(())
    }
}

/// Click, keyboard and backdrop wiring around one shared [`ModalState`].
///
/// Cloning is cheap: clones share the same state and DOM handles.
#[derive(Clone)]
pub struct Gallery {
    document: Document,
    view: Rc<ModalView>,
    state: Rc<RefCell<ModalState>>,
    items: Rc<Vec<HtmlElement>>,
    selectors: Rc<Selectors>,
}

impl Gallery {
    /// Resolve the modal elements and discover the items present right now.
    ///
    /// Items inserted later are not picked up.
    pub fn new(document: &Document, selectors: &Selectors) -> Result<Self> {
        let view = ModalView {
            modal: dom::by_id(document, &selectors.modal_id)?,
            image: dom::by_id(document, &selectors.modal_image_id)?,
            title: dom::by_id(document, &selectors.modal_title_id)?,
            description: dom::by_id(document, &selectors.modal_description_id)?,
            close: dom::query(document, &selectors.close)?,
            body: dom::body(document)?,
        };
        let items = dom::query_all(document, &selectors.item)?
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();

        Ok(Self {
            document: document.clone(),
            view: Rc::new(view),
            state: Rc::new(RefCell::new(ModalState::new())),
            items: Rc::new(items),
            selectors: Rc::new(selectors.clone()),
        })
    }

    /// Install every listener. Handlers live for the rest of the page.
    pub fn bind_events(&self) -> Result<()> {
        for item in self.items.iter() {
            let gallery = self.clone();
            let target = item.clone();
            let on_click = Closure::wrap(Box::new(move || {
                gallery.open_item(&target);
            }) as Box<dyn FnMut()>);
            item.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
        }

        let gallery = self.clone();
        let on_close = Closure::wrap(Box::new(move || {
            gallery.dismiss("close button");
        }) as Box<dyn FnMut()>);
        self.view
            .close
            .add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        on_close.forget();

        // Clicks inside the content bubble up with a different target.
        let gallery = self.clone();
        let on_backdrop = Closure::wrap(Box::new(move |event: Event| {
            let backdrop: &JsValue = gallery.view.modal.as_ref();
            if event.target().is_some_and(|t| AsRef::<JsValue>::as_ref(&t) == backdrop) {
                gallery.dismiss("backdrop");
            }
        }) as Box<dyn FnMut(Event)>);
        self.view
            .modal
            .add_event_listener_with_callback("click", on_backdrop.as_ref().unchecked_ref())?;
        on_backdrop.forget();

        let gallery = self.clone();
        let on_key = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let closed = gallery.state.borrow_mut().handle_key(&event.key());
            if closed {
                log::debug!("modal dismissed via {}", event.key());
                gallery.render();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        self.document
            .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
        on_key.forget();

        Ok(())
    }

    /// Copy `item`'s image and caption into the modal and show it.
    ///
    /// Items missing part of their markup are skipped.
    pub fn open_item(&self, item: &Element) {
        match self.read_item(item) {
            Ok(content) => self.open_modal(content),
            Err(err) => log::warn!("gallery item skipped: {err}"),
        }
    }

    pub fn open_modal(&self, content: ItemContent) {
        log::debug!("opening modal for {:?}", content.title);
        self.state.borrow_mut().open(content);
        self.render();
    }

    pub fn close_modal(&self) {
        self.state.borrow_mut().close();
        self.render();
    }

    /// Warm the cache by requesting every item image again off-screen.
    ///
    /// Best effort: failures only cost latency, so they are logged and dropped.
    pub fn preload_images(&self) -> Vec<HtmlImageElement> {
        let sources = match dom::query_all(&self.document, &self.selectors.item_image) {
            Ok(images) => images,
            Err(err) => {
                log::warn!("image preload skipped: {err}");
                return Vec::new();
            }
        };
        sources
            .iter()
            .filter_map(|el| el.dyn_ref::<HtmlImageElement>())
            .filter_map(|img| match HtmlImageElement::new() {
                Ok(preload) => {
                    preload.set_src(&img.src());
                    Some(preload)
                }
                Err(err) => {
                    log::warn!("image preload failed for {}: {err:?}", img.src());
                    None
                }
            })
            .collect()
    }

    pub fn state(&self) -> std::cell::Ref<'_, ModalState> {
        self.state.borrow()
    }

    pub fn items(&self) -> &[HtmlElement] {
        &self.items
    }

    fn read_item(&self, item: &Element) -> Result<ItemContent> {
        let image: HtmlImageElement = dom::query(item, &self.selectors.item_image)?;
        let title: Element = dom::query(item, &self.selectors.item_title)?;
        let description: Element = dom::query(item, &self.selectors.item_description)?;
        Ok(ItemContent {
            image_src: image.src(),
            image_alt: image.alt(),
            title: title.text_content().unwrap_or_default(),
            description: description.text_content().unwrap_or_default(),
        })
    }

    fn dismiss(&self, via: &str) {
        log::debug!("modal dismissed via {via}");
        self.close_modal();
    }

    fn render(&self) {
        if let Err(err) = self.view.apply(&self.state.borrow()) {
            log::error!("modal update failed: {err}");
        }
    }
}
