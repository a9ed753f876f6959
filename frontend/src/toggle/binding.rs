use super::{surface::DomSurface, toggler::FormToggler};
use crate::{
    config::FormsConfig,
    error::{js_message, ToggleError},
    utils::dom,
};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, MouseEvent};

/// Resolves the form elements in the current document and binds the toggle
/// control's click handler.
pub fn install(config: &FormsConfig) -> Result<(), ToggleError> {
    let document = dom::document()?;
    install_in(&document, config)
}

pub fn install_in(document: &Document, config: &FormsConfig) -> Result<(), ToggleError> {
    let control = dom::html_element_by_id(document, &config.toggle_link_id)?;
    let surface = DomSurface::resolve(document, config)?;
    let toggler = Rc::new(RefCell::new(FormToggler::new(surface)));

    let handler = {
        let toggler = Rc::clone(&toggler);
        Closure::wrap(Box::new(move |event: MouseEvent| {
            // The control is a `href="#"` anchor.
            event.prevent_default();
            toggler.borrow_mut().handle_toggle();
        }) as Box<dyn FnMut(_)>)
    };
    control
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|err| ToggleError::Listener(js_message(&err)))?;
    // Lives as long as the page.
    handler.forget();

    log::info!(
        "form toggle bound to #{} (showing {} form)",
        config.toggle_link_id,
        toggler.borrow().current_mode()
    );
    Ok(())
}
