use crate::dto::ServerMessage;
use crate::table::*;
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// Session handle for a browser host. Frames, intents, effects, and views
/// cross the boundary as JSON; time is `performance.now()` in milliseconds.
#[wasm_bindgen]
pub struct WasmSession(Session);

fn elapsed(ms: f64) -> Duration {
    Duration::try_from_secs_f64(ms.max(0.0) / 1000.0).unwrap_or_default()
}

fn json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
impl WasmSession {
    /// `layout` holds each screen slot's class list, in screen order.
    #[wasm_bindgen(constructor)]
    pub fn new(layout: Vec<String>, now: f64) -> WasmSession {
        Self(Session::new(
            Settings::default().with_layout(layout),
            elapsed(now),
        ))
    }

    /// Applies one inbound frame; returns the effects. Frames that fail to
    /// decode are skipped.
    #[wasm_bindgen]
    pub fn receive(&mut self, frame: &str, now: f64) -> Result<String, JsValue> {
        match ServerMessage::from_json(frame) {
            Ok(msg) => json(&self.0.receive(msg, elapsed(now))),
            Err(e) => {
                log::warn!("[wasm] dropping frame: {}", e);
                Ok("[]".to_string())
            }
        }
    }

    /// Applies a player intent; a failed local check rejects with the text
    /// to alert.
    #[wasm_bindgen]
    pub fn dispatch(&mut self, intent: &str, now: f64) -> Result<String, JsValue> {
        let intent = serde_json::from_str::<Intent>(intent)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        match self.0.dispatch(intent, elapsed(now)) {
            Ok(effects) => json(&effects),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }

    #[wasm_bindgen]
    pub fn tick(&mut self, now: f64) -> Result<String, JsValue> {
        json(&self.0.tick(elapsed(now)))
    }

    /// Milliseconds at which `tick` next has work.
    #[wasm_bindgen]
    pub fn deadline(&self) -> Option<f64> {
        self.0.deadline().map(|d| d.as_secs_f64() * 1000.0)
    }

    #[wasm_bindgen]
    pub fn view(&self, now: f64) -> Result<String, JsValue> {
        json(&self.0.view(elapsed(now)))
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
