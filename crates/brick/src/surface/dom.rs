//! Browser backend over `web_sys`

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::{Backend, Listener, SurfaceNode};
use crate::error::{BrickError, BrickResult};
use crate::types::Pixels;

fn js_error(context: &str, err: JsValue) -> BrickError {
    let detail = err
        .as_string()
        .unwrap_or_else(|| format!("{:?}", err));
    BrickError::SurfaceError(format!("{}: {}", context, detail))
}

/// Backend creating `<div>` elements in the current document
#[derive(Clone, Debug)]
pub struct DomBackend {
    window: web_sys::Window,
    document: Document,
}

impl DomBackend {
    /// Bind to the global `window.document`
    pub fn new() -> BrickResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| BrickError::SurfaceError("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| BrickError::SurfaceError("window has no document".to_string()))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Backend for DomBackend {
    type Node = HtmlElement;

    fn create_node(&self) -> BrickResult<HtmlElement> {
        self.document
            .create_element("div")
            .map_err(|e| js_error("createElement", e))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BrickError::SurfaceError("div is not an HtmlElement".to_string()))
    }

    fn attach_to_body(&self, node: &HtmlElement) -> BrickResult<()> {
        let body = self
            .document
            .body()
            .ok_or_else(|| BrickError::SurfaceError("document has no body".to_string()))?;
        body.append_child(node)
            .map_err(|e| js_error("appendChild", e))?;
        Ok(())
    }

    fn viewport_size(&self) -> BrickResult<(Pixels, Pixels)> {
        let width = self
            .window
            .inner_width()
            .map_err(|e| js_error("innerWidth", e))?
            .as_f64()
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .map_err(|e| js_error("innerHeight", e))?
            .as_f64()
            .unwrap_or(0.0);
        Ok((width, height))
    }
}

impl SurfaceNode for HtmlElement {
    type Event = web_sys::Event;

    fn set_style(&self, property: &str, value: &str) -> BrickResult<()> {
        self.style()
            .set_property(property, value)
            .map_err(|e| js_error(property, e))
    }

    fn set_attribute(&self, name: &str, value: &str) -> BrickResult<()> {
        web_sys::Element::set_attribute(self, name, value).map_err(|e| js_error(name, e))
    }

    fn append_child(&self, child: &HtmlElement) -> BrickResult<()> {
        web_sys::Node::append_child(self, child)
            .map(|_| ())
            .map_err(|e| js_error("appendChild", e))
    }

    fn add_listener(&self, event: &str, callback: Listener<web_sys::Event>) -> BrickResult<()> {
        let closure = Closure::wrap(callback as Box<dyn FnMut(web_sys::Event)>);
        self.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| js_error(event, e))?;
        // Listeners are never removed, so the closure lives with the page
        closure.forget();
        Ok(())
    }
}
