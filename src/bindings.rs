//! Browser bindings.
//!
//! The host passes two callbacks: one returning the workspace element's
//! client rect, one returning a node's client rect by key (or `null` when the
//! node is not laid out). Everything else crosses the boundary as JSON.

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;

use crate::config::WorkspaceConfig;
use crate::geometry::{Point, Rect, Viewport};
use crate::input::Input;
use crate::layout::Layout;
use crate::workspace::Workspace;

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn number(value: &JsValue, field: &str) -> Option<f64> {
    match Reflect::get(value, &JsValue::from_str(field)) {
        Ok(v) => v.as_f64(),
        Err(_) => None,
    }
}

/// Read a `DOMRect`-like object.
fn read_rect(value: &JsValue) -> Option<Rect> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    Some(Rect::new(number(value, "x")?, number(value, "y")?, number(value, "width")?, number(value, "height")?))
}

/// Geometry read live from the DOM through host callbacks.
pub struct JsLayout {
    workspace_rect: Function,
    client_rect: Function,
}

impl Layout for JsLayout {
    fn workspace_rect(&self) -> Rect {
        match self.workspace_rect.call0(&JsValue::NULL) {
            Ok(value) => read_rect(&value).unwrap_or_default(),
            Err(_) => {
                tracing::warn!("workspace rect callback threw");
                Rect::default()
            }
        }
    }

    fn client_rect(&self, key: &str, _viewport: &Viewport) -> Option<Rect> {
        match self.client_rect.call1(&JsValue::NULL, &JsValue::from_str(key)) {
            Ok(value) => read_rect(&value),
            Err(_) => {
                tracing::warn!(key = %key, "client rect callback threw");
                None
            }
        }
    }
}

#[wasm_bindgen]
pub struct VizWorkspace {
    inner: Workspace<JsLayout>,
}

#[wasm_bindgen]
impl VizWorkspace {
    /// # Errors
    ///
    /// Fails when `config_json` is present but malformed.
    #[wasm_bindgen(constructor)]
    pub fn new(workspace_rect: Function, client_rect: Function, config_json: Option<String>) -> Result<VizWorkspace, JsValue> {
        let config = match config_json {
            Some(raw) => WorkspaceConfig::from_json(&raw).map_err(js_error)?,
            None => WorkspaceConfig::default(),
        };
        let layout = JsLayout { workspace_rect, client_rect };
        Ok(Self { inner: Workspace::with_config(layout, config) })
    }

    /// Apply one JSON input; returns the resulting events as a JSON array.
    ///
    /// # Errors
    ///
    /// Fails on malformed input.
    pub fn dispatch(&mut self, input_json: &str) -> Result<String, JsValue> {
        let input: Input = serde_json::from_str(input_json).map_err(js_error)?;
        let events = self.inner.dispatch(input);
        serde_json::to_string(&events).map_err(js_error)
    }

    /// Returns the data-transfer entries as JSON, or `undefined` for non-draggable keys.
    ///
    /// # Errors
    ///
    /// Fails only if the payload cannot be serialized.
    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&mut self, key: &str, x: f64, y: f64) -> Result<Option<String>, JsValue> {
        match self.inner.drag_start(key, Point::new(x, y)) {
            Some(payload) => serde_json::to_string(&payload).map(Some).map_err(js_error),
            None => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Fails only if the edges cannot be serialized.
    pub fn render(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.render()).map_err(js_error)
    }

    #[wasm_bindgen(js_name = renderSvg)]
    pub fn render_svg(&self) -> String {
        self.inner.render_svg()
    }

    /// # Errors
    ///
    /// Fails only if the labels cannot be serialized.
    #[wasm_bindgen(js_name = debugLabels)]
    pub fn debug_labels(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.debug_labels()).map_err(js_error)
    }

    #[wasm_bindgen(getter, js_name = scrollLeft)]
    pub fn scroll_left(&self) -> f64 {
        self.inner.scroll_left()
    }

    #[wasm_bindgen(getter, js_name = scrollTop)]
    pub fn scroll_top(&self) -> f64 {
        self.inner.scroll_top()
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.scale()
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> i32 {
        self.inner.zoom()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.inner.height()
    }

    #[wasm_bindgen(getter, js_name = autoResize)]
    pub fn auto_resize(&self) -> bool {
        self.inner.auto_resize()
    }

    #[wasm_bindgen(getter)]
    pub fn debug(&self) -> bool {
        self.inner.debug()
    }
}
