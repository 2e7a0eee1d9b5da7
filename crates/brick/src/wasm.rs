//! WASM exports
//!
//! JS-facing wrappers over [`Brick`] on the DOM backend. Property setters
//! throw a JS error when a value is rejected; methods return `Result`.
//!
//! ```js
//! import { createLibrary } from "brick";
//!
//! const lib = createLibrary();          // z-index 999
//! const hero = lib.sprite(0, 0, 32, 32, "url(sheet.png)");
//! hero.setAnimation("spin", [0, 1, 2, 3], 10);
//! hero.useAnimation("spin");
//!
//! function frame() {
//!     hero.animate();
//!     requestAnimationFrame(frame);
//! }
//! requestAnimationFrame(frame);
//! ```

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::brick::Brick;
use crate::config::BrickConfig;
use crate::entity::Entity;
use crate::error::{BrickError, BrickResult};
use crate::sprite::{frame_indices, Sprite};
use crate::surface::DomBackend;

fn to_js(err: BrickError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn or_throw(result: BrickResult<()>) {
    if let Err(err) = result {
        wasm_bindgen::throw_str(&err.to_string());
    }
}

/// Milliseconds from `performance.now()`, falling back to `Date.now()`
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Log an exception thrown by a host listener to the console
fn report_listener_error(result: Result<JsValue, JsValue>) {
    if let Err(err) = result {
        web_sys::console::error_1(&err);
    }
}

fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Create a library instance with its own root container
///
/// `zIndex` defaults to 999.
#[wasm_bindgen(js_name = createLibrary)]
pub fn create_library(z_index: Option<i32>) -> Result<BrickLibrary, JsValue> {
    let mut config = BrickConfig::default();
    if let Some(z_index) = z_index {
        config.z_index = z_index;
    }
    BrickLibrary::from_config(config)
}

/// Create a library instance from a config object
///
/// Missing keys take their defaults: `{ z_index, root_id, root_sizing,
/// default_graphic }`.
#[wasm_bindgen(js_name = createLibraryWithConfig)]
pub fn create_library_with_config(config: JsValue) -> Result<BrickLibrary, JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        BrickConfig::default()
    } else {
        let json: String = js_sys::JSON::stringify(&config)?.into();
        serde_json::from_str(&json)
            .map_err(|e| JsValue::from_str(&format!("invalid config: {}", e)))?
    };
    BrickLibrary::from_config(config)
}

/// A library instance (root container + entity factories)
#[wasm_bindgen]
pub struct BrickLibrary {
    inner: Brick<DomBackend>,
}

impl BrickLibrary {
    fn from_config(config: BrickConfig) -> Result<BrickLibrary, JsValue> {
        init_panic_hook();
        let backend = DomBackend::new().map_err(to_js)?;
        let inner = Brick::new(backend, config).map_err(to_js)?;
        Ok(Self { inner })
    }
}

#[wasm_bindgen]
impl BrickLibrary {
    /// The root container element
    #[wasm_bindgen(getter)]
    pub fn root(&self) -> HtmlElement {
        self.inner.root().node().clone()
    }

    #[wasm_bindgen(getter, js_name = zIndex)]
    pub fn z_index(&self) -> i32 {
        self.inner.z_index()
    }

    /// Re-size the root to the window (hook to `resize`)
    #[wasm_bindgen(js_name = fitViewport)]
    pub fn fit_viewport(&mut self) -> Result<(), JsValue> {
        self.inner.fit_viewport().map_err(to_js)
    }

    pub fn entity(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        graphic: Option<String>,
    ) -> Result<BrickEntity, JsValue> {
        let inner = self
            .inner
            .entity(x, y, width, height, graphic.as_deref())
            .map_err(to_js)?;
        Ok(BrickEntity { inner })
    }

    pub fn sprite(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        graphic: Option<String>,
    ) -> Result<BrickSprite, JsValue> {
        let mut inner = self
            .inner
            .sprite(x, y, width, height, graphic.as_deref())
            .map_err(to_js)?;
        inner.sync_clock(now_ms());
        Ok(BrickSprite { inner })
    }
}

/// Positioned entity handle
#[wasm_bindgen]
pub struct BrickEntity {
    inner: Entity<HtmlElement>,
}

impl BrickEntity {
    fn entity(&self) -> &Entity<HtmlElement> {
        &self.inner
    }

    fn entity_mut(&mut self) -> &mut Entity<HtmlElement> {
        &mut self.inner
    }
}

/// Sprite handle
#[wasm_bindgen]
pub struct BrickSprite {
    inner: Sprite<HtmlElement>,
}

impl BrickSprite {
    fn entity(&self) -> &Entity<HtmlElement> {
        self.inner.entity()
    }

    fn entity_mut(&mut self) -> &mut Entity<HtmlElement> {
        self.inner.entity_mut()
    }
}

// Both handles expose the same entity properties
macro_rules! entity_accessors {
    ($handle:ident) => {
        #[wasm_bindgen]
        impl $handle {
            #[wasm_bindgen(getter)]
            pub fn x(&self) -> f64 {
                self.entity().x()
            }

            #[wasm_bindgen(setter)]
            pub fn set_x(&mut self, x: f64) {
                or_throw(self.entity_mut().set_x(x));
            }

            #[wasm_bindgen(getter)]
            pub fn y(&self) -> f64 {
                self.entity().y()
            }

            #[wasm_bindgen(setter)]
            pub fn set_y(&mut self, y: f64) {
                or_throw(self.entity_mut().set_y(y));
            }

            #[wasm_bindgen(getter)]
            pub fn width(&self) -> f64 {
                self.entity().width()
            }

            #[wasm_bindgen(setter)]
            pub fn set_width(&mut self, width: f64) {
                or_throw(self.entity_mut().set_width(width));
            }

            #[wasm_bindgen(getter)]
            pub fn height(&self) -> f64 {
                self.entity().height()
            }

            #[wasm_bindgen(setter)]
            pub fn set_height(&mut self, height: f64) {
                or_throw(self.entity_mut().set_height(height));
            }

            #[wasm_bindgen(getter)]
            pub fn graphic(&self) -> String {
                self.entity().graphic().to_string()
            }

            #[wasm_bindgen(setter)]
            pub fn set_graphic(&mut self, graphic: String) {
                or_throw(self.entity_mut().set_graphic(&graphic));
            }

            #[wasm_bindgen(getter)]
            pub fn scale(&self) -> f64 {
                self.entity().scale()
            }

            #[wasm_bindgen(setter)]
            pub fn set_scale(&mut self, scale: f64) {
                or_throw(self.entity_mut().set_scale(scale));
            }

            #[wasm_bindgen(getter)]
            pub fn angle(&self) -> f64 {
                self.entity().angle()
            }

            #[wasm_bindgen(setter)]
            pub fn set_angle(&mut self, angle: f64) {
                or_throw(self.entity_mut().set_angle(angle));
            }

            #[wasm_bindgen(getter, js_name = zIndex)]
            pub fn z_index(&self) -> i32 {
                self.entity().z_index()
            }

            /// The backing element
            #[wasm_bindgen(getter)]
            pub fn element(&self) -> HtmlElement {
                self.entity().node().clone()
            }

            /// Add an event listener to the element
            pub fn on(&self, event: &str, callback: js_sys::Function) -> Result<(), JsValue> {
                self.entity()
                    .on(event, move |e: web_sys::Event| {
                        report_listener_error(callback.call1(&JsValue::NULL, &e));
                    })
                    .map_err(to_js)
            }
        }
    };
}

entity_accessors!(BrickEntity);
entity_accessors!(BrickSprite);

#[wasm_bindgen]
impl BrickSprite {
    /// Register an animation: sheet frame indices and frames per second
    ///
    /// Frames must be whole, non-negative numbers.
    #[wasm_bindgen(js_name = setAnimation)]
    pub fn set_animation(
        &mut self,
        name: &str,
        frames: Vec<f64>,
        frame_rate: f64,
    ) -> Result<(), JsValue> {
        let frames = frame_indices(&frames).map_err(to_js)?;
        self.inner
            .set_animation(name, frames, frame_rate)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = useAnimation)]
    pub fn use_animation(&mut self, name: &str) -> Result<(), JsValue> {
        self.inner.use_animation(name).map_err(to_js)
    }

    /// Advance by the time since the previous call; meant for
    /// `requestAnimationFrame` callbacks
    pub fn animate(&mut self) -> Result<bool, JsValue> {
        self.inner.tick(now_ms()).map_err(to_js)
    }

    /// Advance by an explicit delta in milliseconds
    #[wasm_bindgen(js_name = animateBy)]
    pub fn animate_by(&mut self, delta_ms: f64) -> Result<bool, JsValue> {
        self.inner.animate(delta_ms).map_err(to_js)
    }

    pub fn stop(&mut self) {
        self.inner.stop();
    }

    #[wasm_bindgen(getter, js_name = currentAnimation)]
    pub fn current_animation(&self) -> Option<String> {
        self.inner.current_animation().map(str::to_string)
    }

    #[wasm_bindgen(getter, js_name = currentFrame)]
    pub fn current_frame(&self) -> Option<u32> {
        self.inner.current_frame()
    }
}
