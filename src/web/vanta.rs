//! Binding to the `VANTA.CLOUDS` WebGL background, looked up at runtime.

use js_sys::{Function, Reflect, JSON};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::config::CloudEffectConfig;
use crate::engine::{EffectFactory, EffectHandle};

pub struct VantaEffect {
    handle: JsValue,
}

impl EffectHandle for VantaEffect {
    fn destroy(&mut self) {
        let destroy = Reflect::get(&self.handle, &JsValue::from_str("destroy"));
        if let Some(destroy) = destroy.ok().and_then(|f| f.dyn_into::<Function>().ok()) {
            if let Err(err) = destroy.call0(&self.handle) {
                log::warn!("vanta destroy failed: {err:?}");
            }
        }
    }
}

/// Creates cloud effects on one mount surface.
pub struct VantaClouds {
    surface: HtmlElement,
}

impl VantaClouds {
    pub fn new(surface: HtmlElement) -> Self {
        Self { surface }
    }

    fn try_create(&self, config: &CloudEffectConfig) -> Result<Option<VantaEffect>, JsValue> {
        let vanta = Reflect::get(&js_sys::global(), &JsValue::from_str("VANTA"))?;
        if vanta.is_undefined() || vanta.is_null() {
            return Ok(None);
        }
        let clouds = Reflect::get(&vanta, &JsValue::from_str("CLOUDS"))?;
        let Ok(clouds) = clouds.dyn_into::<Function>() else {
            return Ok(None);
        };

        let json =
            serde_json::to_string(config).map_err(|err| JsValue::from_str(&err.to_string()))?;
        let options = JSON::parse(&json)?;
        Reflect::set(&options, &JsValue::from_str("el"), &self.surface)?;

        let handle = clouds.call1(&vanta, &options)?;
        Ok(Some(VantaEffect { handle }))
    }
}

impl EffectFactory for VantaClouds {
    type Handle = VantaEffect;

    fn create(&mut self, config: &CloudEffectConfig) -> Option<VantaEffect> {
        match self.try_create(config) {
            Ok(effect) => effect,
            Err(err) => {
                log::warn!("vanta clouds failed to start: {err:?}");
                None
            }
        }
    }
}
