use std::rc::Rc;

use js_sys::{Function, Reflect};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use folio_motion_core::{
    scroll_to_top, Animator, CounterTrigger, FrameCallback, FrameScheduler, ImmediateScheduler,
    MotionConfig, Sink, SinkId, SinkKind, SinkValue,
};
use folio_page_core::{
    active_section, generate_stars, loader_hidden, plan_reveal, ContactForm, NavMenu, PageConfig,
    RevealSection, ScrollChrome, SectionBounds, SubmissionTimeline,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn to_js<T: Serialize + ?Sized>(what: &str, v: &T) -> Result<JsValue, JsError> {
    swb::to_value(v).map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

/// Forwards frame requests to the global `requestAnimationFrame`. Without
/// one (workers, some test hosts) runs jump straight to their end value.
struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn schedule(&self, callback: FrameCallback) {
        let global = js_sys::global();
        let raf = Reflect::get(&global, &JsValue::from_str("requestAnimationFrame"))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok());
        let Some(raf) = raf else {
            log::warn!("requestAnimationFrame unavailable; finishing run immediately");
            ImmediateScheduler.schedule(callback);
            return;
        };
        let cb = Closure::once_into_js(move |ts: f64| callback(ts));
        if let Err(e) = raf.call1(&global, &cb) {
            log::warn!("requestAnimationFrame failed: {e:?}");
        }
    }
}

/// Sink that hands each value to a JS callback: text for displays, a number
/// for scroll offsets.
struct JsSink {
    kind: SinkKind,
    f: Function,
}

impl Sink for JsSink {
    fn kind(&self) -> SinkKind {
        self.kind
    }

    fn write(&mut self, value: SinkValue) {
        let arg = match value {
            SinkValue::Integer(_) => JsValue::from_str(&value.to_text()),
            SinkValue::Offset(v) => JsValue::from_f64(v),
        };
        if let Err(e) = self.f.call1(&JsValue::UNDEFINED, &arg) {
            log::warn!("sink callback threw: {e:?}");
        }
    }
}

#[derive(Serialize)]
struct NavState {
    open: bool,
    bars: [folio_page_core::BarStyle; 3],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ObserverOptions {
    threshold: f64,
    root_margin: String,
}

#[wasm_bindgen]
pub struct FolioPage {
    animator: Animator,
    counters: CounterTrigger,
    page: PageConfig,
    nav: NavMenu,
}

#[wasm_bindgen]
impl FolioPage {
    /// Create the page runtime. Both configs are optional JSON objects; pass
    /// undefined/null for defaults.
    /// Example:
    ///   new FolioPage({ counter_stagger_ms: 50 }, { star_count: 60 })
    #[wasm_bindgen(constructor)]
    pub fn new(motion_config: JsValue, page_config: JsValue) -> Result<FolioPage, JsError> {
        console_error_panic_hook::set_once();

        let motion: MotionConfig = if jsvalue_is_undefined_or_null(&motion_config) {
            MotionConfig::default()
        } else {
            swb::from_value(motion_config)
                .map_err(|e| JsError::new(&format!("motion config error: {e}")))?
        };
        let page: PageConfig = if jsvalue_is_undefined_or_null(&page_config) {
            PageConfig::default()
        } else {
            swb::from_value(page_config)
                .map_err(|e| JsError::new(&format!("page config error: {e}")))?
        };

        Ok(FolioPage {
            animator: Animator::new(motion, Rc::new(RafScheduler)),
            counters: CounterTrigger::new(),
            page,
            nav: NavMenu::new(),
        })
    }

    /// Register a stat display. `callback(text)` runs on every step. Returns a sink id.
    #[wasm_bindgen(js_name = register_display)]
    pub fn register_display(&mut self, callback: Function) -> u32 {
        self.register(SinkKind::NumericDisplay, callback)
    }

    /// Register the viewport. `callback(offset)` runs on every step. Returns a sink id.
    #[wasm_bindgen(js_name = register_scroll)]
    pub fn register_scroll(&mut self, callback: Function) -> u32 {
        self.register(SinkKind::ScrollPosition, callback)
    }

    fn register(&mut self, kind: SinkKind, f: Function) -> u32 {
        self.animator.register_sink(Box::new(JsSink { kind, f })).0
    }

    /// A section became visible. `section` is `{ id, skill_bars: [{ bar, width }],
    /// counters: [{ sink, goal }] }`. Starts its counters and returns the reveal
    /// plan (skill fills for the host to apply).
    #[wasm_bindgen(js_name = section_entered)]
    pub fn section_entered(&mut self, section: JsValue) -> Result<JsValue, JsError> {
        let section: RevealSection = swb::from_value(section)
            .map_err(|e| JsError::new(&format!("section parse error: {e}")))?;
        let plan = plan_reveal(&section, &self.page);
        self.counters.section_entered(&self.animator, &plan.counters);
        to_js("reveal plan", &plan)
    }

    /// Smoothly scroll `sink` from `current` to the top. Returns the run id.
    #[wasm_bindgen(js_name = scroll_to_top)]
    pub fn scroll_to_top(&mut self, sink: u32, current: f64) -> Result<u32, JsError> {
        scroll_to_top(&self.animator, SinkId(sink), current)
            .map(|r| r.0)
            .map_err(|e| JsError::new(&format!("scroll_to_top {} error: {e}", e.category())))
    }

    /// Stop the run on `sink`. Returns whether one was active.
    #[wasm_bindgen]
    pub fn cancel(&mut self, sink: u32) -> Result<bool, JsError> {
        self.animator
            .cancel(SinkId(sink))
            .map_err(|e| JsError::new(&format!("cancel {} error: {e}", e.category())))
    }

    #[wasm_bindgen(js_name = drain_events)]
    pub fn drain_events(&mut self) -> Result<JsValue, JsError> {
        to_js("events", &self.animator.drain_events())
    }

    /// Navbar, scroll-to-top and parallax state for a scroll offset.
    #[wasm_bindgen(js_name = scroll_chrome)]
    pub fn scroll_chrome(&self, scroll_y: f64) -> Result<JsValue, JsError> {
        to_js("scroll chrome", &ScrollChrome::at(scroll_y, &self.page))
    }

    /// Id of the section whose nav link should be highlighted.
    /// `sections` is `[{ id, top, height }]` in document order.
    #[wasm_bindgen(js_name = active_section)]
    pub fn active_section(&self, scroll_y: f64, sections: JsValue) -> Result<Option<String>, JsError> {
        let sections: Vec<SectionBounds> = swb::from_value(sections)
            .map_err(|e| JsError::new(&format!("sections parse error: {e}")))?;
        Ok(active_section(scroll_y, &sections, self.page.section_activation_offset)
            .map(str::to_string))
    }

    #[wasm_bindgen(js_name = toggle_nav)]
    pub fn toggle_nav(&mut self) -> Result<JsValue, JsError> {
        self.nav.toggle();
        self.nav_state()
    }

    #[wasm_bindgen(js_name = close_nav)]
    pub fn close_nav(&mut self) -> Result<JsValue, JsError> {
        self.nav.close();
        self.nav_state()
    }

    fn nav_state(&self) -> Result<JsValue, JsError> {
        to_js(
            "nav",
            &NavState {
                open: self.nav.open,
                bars: self.nav.hamburger(),
            },
        )
    }

    /// Validate `{ name, email, message }`. Returns per-field states.
    #[wasm_bindgen(js_name = validate_form)]
    pub fn validate_form(&self, form: JsValue) -> Result<JsValue, JsError> {
        let form: ContactForm = swb::from_value(form)
            .map_err(|e| JsError::new(&format!("form parse error: {e}")))?;
        to_js("validation", &form.validate())
    }

    /// Phase of the simulated send `elapsed_ms` after the submit press.
    #[wasm_bindgen(js_name = submission_phase)]
    pub fn submission_phase(&self, elapsed_ms: f64) -> Result<JsValue, JsError> {
        to_js(
            "submission phase",
            &SubmissionTimeline::new(&self.page).phase_at(elapsed_ms),
        )
    }

    /// Star field for the hero background, reproducible per seed.
    #[wasm_bindgen]
    pub fn stars(&self, seed: u32) -> Result<JsValue, JsError> {
        let mut rng = StdRng::seed_from_u64(u64::from(seed));
        to_js("stars", &generate_stars(&mut rng, &self.page))
    }

    /// Inline style strings for the same star field as `stars(seed)`.
    #[wasm_bindgen(js_name = star_styles)]
    pub fn star_styles(&self, seed: u32) -> Result<JsValue, JsError> {
        let mut rng = StdRng::seed_from_u64(u64::from(seed));
        let styles: Vec<String> = generate_stars(&mut rng, &self.page)
            .iter()
            .map(|s| s.style())
            .collect();
        to_js("star styles", &styles)
    }

    #[wasm_bindgen(js_name = loader_hidden)]
    pub fn loader_hidden(&self, since_load_ms: f64) -> bool {
        loader_hidden(since_load_ms, &self.page)
    }

    /// Options for the host's section visibility observer.
    #[wasm_bindgen(js_name = observer_options)]
    pub fn observer_options(&self) -> Result<JsValue, JsError> {
        to_js(
            "observer options",
            &ObserverOptions {
                threshold: self.page.reveal_threshold,
                root_margin: self.page.observer_root_margin(),
            },
        )
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
