//! Bindings to the page-level Lenis and GSAP/ScrollTrigger globals loaded by
//! index.html, and the browser implementations of the scroll traits.

use gloo_timers::callback::Timeout;
use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{self, Array, Function, Reflect};
use web_sys::{window, HtmlElement};

use super::showcase::{PinGeometry, TimelineEngine, Viewport};
use super::smooth_scroll::{ScrollPlatform, ScrollSession, SmoothScrollEngine, SmoothScrollOptions};
use super::EngineError;
use crate::config;

#[wasm_bindgen]
extern "C" {
    type Lenis;

    #[wasm_bindgen(constructor, catch)]
    fn new(options: &JsValue) -> Result<Lenis, JsValue>;

    #[wasm_bindgen(method)]
    fn raf(this: &Lenis, time: f64);

    #[wasm_bindgen(method, catch)]
    fn destroy(this: &Lenis) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &Lenis, event: &str, callback: &JsValue);

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn gsap_to(target: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ScrollTrigger, js_name = refresh)]
    fn scroll_trigger_refresh() -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ScrollTrigger, js_name = getAll)]
    fn scroll_trigger_get_all() -> Result<Array, JsValue>;
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        EngineError(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

thread_local! {
    static SMOOTH_SCROLL: ScrollSession<BrowserScrollPlatform> = ScrollSession::new();
}

/// Attaches the page's smooth-scroll engine unless one is already attached.
pub fn init_smooth_scroll() {
    SMOOTH_SCROLL.with(|session| {
        let created = session.init(
            BrowserScrollPlatform::default,
            SmoothScrollOptions::default(),
            config::SMOOTH_SCROLL_INIT_DELAY_MS,
        );
        if created {
            info!("Smooth scroll scheduled");
        }
    });
}

pub fn teardown_smooth_scroll() {
    SMOOTH_SCROLL.with(ScrollSession::teardown);
}

/// Calls `target.kill()` if the object has one.
fn kill_js(target: &JsValue) {
    let kill = Reflect::get(target, &JsValue::from_str("kill"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok());
    if let Some(kill) = kill {
        if let Err(e) = kill.call0(target) {
            warn!("Failed to kill scroll trigger: {:?}", e);
        }
    }
}

pub struct LenisEngine(Lenis);

impl SmoothScrollEngine for LenisEngine {
    fn raf(&mut self, time: f64) {
        self.0.raf(time);
    }

    fn destroy(&mut self) -> Result<(), EngineError> {
        self.0.destroy()?;
        Ok(())
    }
}

/// Cancels the requested frame when dropped.
pub struct AnimationFrame(Option<i32>);

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let (Some(handle), Some(window)) = (self.0, window()) {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

#[derive(Default)]
pub struct BrowserScrollPlatform;

impl ScrollPlatform for BrowserScrollPlatform {
    type Engine = LenisEngine;
    type Timer = Timeout;
    type Frame = AnimationFrame;

    fn create_engine(&self, options: &SmoothScrollOptions) -> Result<LenisEngine, EngineError> {
        let options = serde_wasm_bindgen::to_value(options).map_err(|e| EngineError(e.to_string()))?;
        let lenis = Lenis::new(&options)?;

        // Keep pinned timelines in step with the smoothed position.
        let update = Reflect::get(&js_sys::global(), &JsValue::from_str("ScrollTrigger"))
            .and_then(|st| Reflect::get(&st, &JsValue::from_str("update")))
            .ok()
            .filter(|f| f.is_function());
        if let Some(update) = update {
            lenis.on("scroll", &update);
        }

        Ok(LenisEngine(lenis))
    }

    fn defer(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn next_frame(&self, callback: Box<dyn FnOnce(f64)>) -> AnimationFrame {
        let Some(window) = window() else {
            return AnimationFrame(None);
        };
        let closure = Closure::once_into_js(move |time: f64| callback(time));
        match window.request_animation_frame(closure.unchecked_ref()) {
            Ok(handle) => AnimationFrame(Some(handle)),
            Err(e) => {
                warn!("requestAnimationFrame failed: {:?}", e);
                AnimationFrame(None)
            }
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrollTriggerVars {
    start: &'static str,
    end: String,
    scrub: f64,
    pin: bool,
    anticipate_pin: f64,
    invalidate_on_refresh: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TweenVars {
    x: f64,
    ease: &'static str,
    scroll_trigger: ScrollTriggerVars,
}

/// GSAP tween on `track`, pinned through a ScrollTrigger on `container`.
pub struct GsapTimeline {
    container: HtmlElement,
    track: HtmlElement,
}

impl GsapTimeline {
    pub fn new(container: HtmlElement, track: HtmlElement) -> Self {
        Self { container, track }
    }
}

impl TimelineEngine for GsapTimeline {
    type Trigger = JsValue;

    fn content_width(&self) -> f64 {
        self.track.scroll_width() as f64
    }

    fn viewport(&self) -> Viewport {
        let (width, height) = window()
            .map(|w| {
                (
                    w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
                    w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
                )
            })
            .unwrap_or((0.0, 0.0));
        Viewport { width, height }
    }

    fn pin_horizontal(&mut self, geometry: PinGeometry) -> Result<JsValue, EngineError> {
        let vars = TweenVars {
            x: -geometry.distance,
            ease: "none",
            scroll_trigger: ScrollTriggerVars {
                start: "top top",
                end: format!("+={}", geometry.pin_length),
                scrub: 1.0,
                pin: true,
                anticipate_pin: 1.0,
                invalidate_on_refresh: true,
            },
        };
        let vars = serde_wasm_bindgen::to_value(&vars).map_err(|e| EngineError(e.to_string()))?;
        let scroll_trigger = Reflect::get(&vars, &JsValue::from_str("scrollTrigger"))?;
        Reflect::set(&scroll_trigger, &JsValue::from_str("trigger"), &self.container)?;
        Ok(gsap_to(&self.track, &vars)?)
    }

    fn kill(&mut self, trigger: JsValue) {
        kill_js(&trigger);
    }

    fn refresh(&mut self) {
        if let Err(e) = scroll_trigger_refresh() {
            warn!("ScrollTrigger refresh failed: {:?}", e);
        }
    }

    fn kill_all(&mut self) {
        match scroll_trigger_get_all() {
            Ok(triggers) => triggers.for_each(&mut |trigger, _, _| kill_js(&trigger)),
            Err(e) => warn!("ScrollTrigger unavailable during teardown: {:?}", e),
        }
    }

    fn revert(&mut self) {
        if let Err(e) = self.track.style().remove_property("transform") {
            warn!("Failed to reset showcase transform: {:?}", e);
        }
    }
}
