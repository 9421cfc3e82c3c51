//! Small lookup helpers over `web_sys` that report misses as [`GalleryError`].

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::{GalleryError, Result};

pub fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| GalleryError::missing("window"))
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or_else(|| GalleryError::missing("body"))
}

/// `getElementById`, cast to `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| GalleryError::missing(format!("#{id}")))?;
    cast(element, &format!("#{id}"))
}

/// `querySelector` on a document or element, cast to `T`.
pub fn query<T: JsCast>(root: &impl Queryable, selector: &str) -> Result<T> {
    let element = root
        .query(selector)?
        .ok_or_else(|| GalleryError::missing(selector))?;
    cast(element, selector)
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Whole viewport size in CSS pixels.
pub fn viewport(window: &web_sys::Window) -> Result<(f64, f64)> {
    let w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((w, h))
}

pub fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) -> Result<()> {
    let style = element.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Checked cast; `what` names the value in the error.
pub fn cast<T: JsCast>(value: impl JsCast, what: &str) -> Result<T> {
    value.dyn_into::<T>().map_err(|_| GalleryError::WrongElementType {
        selector: what.to_owned(),
        expected: std::any::type_name::<T>().rsplit("::").next().unwrap_or("element"),
    })
}

/// Anything exposing `querySelector`.
pub trait Queryable {
    fn query(&self, selector: &str) -> Result<Option<Element>>;
}

impl Queryable for Document {
    fn query(&self, selector: &str) -> Result<Option<Element>> {
        Ok(self.query_selector(selector)?)
    }
}

impl Queryable for Element {
    fn query(&self, selector: &str) -> Result<Option<Element>> {
        Ok(self.query_selector(selector)?)
    }
}
