use crate::error::ToggleError;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub fn window() -> Result<Window, ToggleError> {
    web_sys::window().ok_or(ToggleError::NoDocument)
}

pub fn document() -> Result<Document, ToggleError> {
    window()?.document().ok_or(ToggleError::NoDocument)
}

pub fn html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement, ToggleError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ToggleError::not_found(id))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ToggleError::NotHtmlElement { id: id.to_string() })
}
