use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget};

use crate::error::MountError;

pub fn by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<T, MountError> {
    document
        .get_element_by_id(id)
        .ok_or(MountError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| MountError::WrongType(id))
}

pub fn by_selector<T: JsCast>(document: &Document, selector: &'static str) -> Result<T, MountError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or(MountError::MissingElement(selector))?
        .dyn_into::<T>()
        .map_err(|_| MountError::WrongType(selector))
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &'static str, handler: F) -> Result<(), MountError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| MountError::Listener(event))?;
    closure.forget();
    Ok(())
}
