#![cfg(target_arch = "wasm32")]
use folio_wasm::{abi_version, FolioPage};
use serde_json::json;
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// Plain JS objects, the shape a page script would pass.
fn js(v: serde_json::Value) -> JsValue {
    js_sys::JSON::parse(&v.to_string()).unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults_and_partial_config() {
    assert!(FolioPage::new(JsValue::UNDEFINED, JsValue::NULL).is_ok());
    assert!(FolioPage::new(js(json!({ "counter_stagger_ms": 50.0 })), JsValue::NULL).is_ok());
    assert!(FolioPage::new(js(json!("nope")), JsValue::NULL).is_err());
}

#[wasm_bindgen_test]
fn scroll_chrome_round_trip() {
    let page = FolioPage::new(JsValue::NULL, JsValue::NULL).unwrap();
    let out: serde_json::Value = swb::from_value(page.scroll_chrome(400.0).unwrap()).unwrap();
    assert_eq!(out["navbar_scrolled"], json!(true));
    assert_eq!(out["scroll_top_visible"], json!(true));
}

#[wasm_bindgen_test]
fn active_section_and_form() {
    let page = FolioPage::new(JsValue::NULL, JsValue::NULL).unwrap();
    let sections = js(json!([
        { "id": "home", "top": 0.0 },
        { "id": "about", "top": 900.0 }
    ]));
    assert_eq!(
        page.active_section(750.0, sections).unwrap().as_deref(),
        Some("about")
    );

    let report: serde_json::Value = swb::from_value(
        page.validate_form(js(json!({ "name": "A", "email": "bad", "message": "m" })))
            .unwrap(),
    )
    .unwrap();
    assert_eq!(report["email"], json!("Invalid"));
    assert_eq!(report["name"], json!("Valid"));
}

#[wasm_bindgen_test]
fn stars_are_seeded() {
    let page = FolioPage::new(JsValue::NULL, js(json!({ "star_count": 4 }))).unwrap();
    let a: serde_json::Value = swb::from_value(page.stars(9).unwrap()).unwrap();
    let b: serde_json::Value = swb::from_value(page.stars(9).unwrap()).unwrap();
    assert_eq!(a.as_array().unwrap().len(), 4);
    assert_eq!(a, b);
}

#[wasm_bindgen_test]
fn section_entered_returns_plan() {
    let mut page = FolioPage::new(JsValue::NULL, JsValue::NULL).unwrap();
    let f = js_sys::Function::new_no_args("");
    let sink = page.register_display(f);
    let plan: serde_json::Value = swb::from_value(
        page.section_entered(js(json!({
            "id": "about",
            "skill_bars": [{ "bar": "rust", "width": "90" }],
            "counters": [{ "sink": sink, "goal": "25" }]
        })))
        .unwrap(),
    )
    .unwrap();
    assert_eq!(plan["section"], json!("about"));
    assert_eq!(plan["skill_fills"][0]["width_pct"].as_f64(), Some(90.0));
    assert!(page.cancel(sink).unwrap());
}

#[wasm_bindgen_test]
fn star_styles_follow_the_seeded_field() {
    let page = FolioPage::new(JsValue::NULL, js(json!({ "star_count": 3 }))).unwrap();
    let styles: Vec<String> = swb::from_value(page.star_styles(9).unwrap()).unwrap();
    let stars: serde_json::Value = swb::from_value(page.stars(9).unwrap()).unwrap();
    assert_eq!(styles.len(), 3);
    let left = stars[0]["left_pct"].as_f64().unwrap();
    assert!(styles[0].starts_with(&format!("left: {left}%;")));
}

#[wasm_bindgen_test]
fn scroll_to_top_needs_a_scroll_sink() {
    let mut page = FolioPage::new(JsValue::NULL, JsValue::NULL).unwrap();
    let viewport = page.register_scroll(js_sys::Function::new_no_args(""));
    let display = page.register_display(js_sys::Function::new_no_args(""));
    assert!(page.scroll_to_top(viewport, 640.0).is_ok());
    assert!(page.scroll_to_top(display, 640.0).is_err());
    assert!(page.scroll_to_top(999, 640.0).is_err());
    assert!(page.cancel(viewport).unwrap());
    assert!(!page.cancel(viewport).unwrap());
}

#[wasm_bindgen_test]
fn drain_events_reports_runs() {
    let mut page = FolioPage::new(JsValue::NULL, JsValue::NULL).unwrap();
    let viewport = page.register_scroll(js_sys::Function::new_no_args(""));
    page.scroll_to_top(viewport, 300.0).unwrap();
    page.cancel(viewport).unwrap();
    let events: serde_json::Value = swb::from_value(page.drain_events().unwrap()).unwrap();
    let started = &events[0]["RunStarted"];
    assert_eq!(started["sink"], json!(viewport));
    assert_eq!(started["start"].as_f64(), Some(300.0));
    assert_eq!(started["duration_ms"].as_f64(), Some(1000.0));
    assert!(events[1].get("RunCancelled").is_some());
    let again: serde_json::Value = swb::from_value(page.drain_events().unwrap()).unwrap();
    assert_eq!(again, json!([]));
}

#[wasm_bindgen_test]
fn nav_toggles_and_closes() {
    let mut page = FolioPage::new(JsValue::NULL, JsValue::NULL).unwrap();
    let open: serde_json::Value = swb::from_value(page.toggle_nav().unwrap()).unwrap();
    assert_eq!(open["open"], json!(true));
    assert_eq!(open["bars"].as_array().unwrap().len(), 3);
    let closed: serde_json::Value = swb::from_value(page.close_nav().unwrap()).unwrap();
    assert_eq!(closed["open"], json!(false));
    let closed_again: serde_json::Value = swb::from_value(page.close_nav().unwrap()).unwrap();
    assert_eq!(closed_again["open"], json!(false));
}

#[wasm_bindgen_test]
fn submission_phases_follow_the_timeline() {
    let page = FolioPage::new(JsValue::NULL, JsValue::NULL).unwrap();
    let phase = |ms: f64| -> serde_json::Value {
        swb::from_value(page.submission_phase(ms).unwrap()).unwrap()
    };
    assert_eq!(phase(0.0), json!("Sending"));
    assert_eq!(phase(1500.0), json!("Succeeded"));
    assert_eq!(phase(6500.0), json!("Idle"));
}

#[wasm_bindgen_test]
fn observer_options_match_config() {
    let page = FolioPage::new(JsValue::NULL, JsValue::NULL).unwrap();
    let opts: serde_json::Value = swb::from_value(page.observer_options().unwrap()).unwrap();
    assert_eq!(opts["threshold"].as_f64(), Some(0.1));
    assert_eq!(opts["rootMargin"], json!("0px 0px -100px 0px"));
}
