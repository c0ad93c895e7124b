//! WASM bindings for weekgrid-core.
//!
//! Exposes the overlap validator, the week editor, and submission
//! normalization to JavaScript via `wasm-bindgen`. All complex types cross
//! the boundary as JSON strings, so a browser form can keep its schedule
//! state as a plain object and hand it over verbatim on every edit.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p weekgrid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/weekgrid_wasm.wasm
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;
use weekgrid_core::time::parse_field;
use weekgrid_core::validate::{validate_week, WeekValidity};
use weekgrid_core::{apply_all, submit, EditOp, Interval, WeekSchedule};

/// Combined result of an edit script: the updated week plus its validity map.
#[derive(Serialize)]
struct ApplyResultDto {
    week: WeekSchedule,
    validity: WeekValidity,
}

fn parse_week(json: &str) -> Result<WeekSchedule, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid week JSON: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Check one candidate interval against a day's schedule.
///
/// `day_json` is a JSON array of `{start, end}` rows (minute integers or
/// `"HH:MM"` strings, `null` for blank bounds). `start` and `end` are raw
/// field strings; empty strings model blank fields and make the candidate
/// invalid. `self_index` is the candidate's own row, excluded from
/// comparison. Returns the collapsed boolean verdict.
#[wasm_bindgen(js_name = "checkInterval")]
pub fn check_interval(
    day_json: &str,
    start: &str,
    end: &str,
    self_index: usize,
) -> Result<bool, JsValue> {
    let day: Vec<Interval> = serde_json::from_str(day_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid day JSON: {}", e)))?;

    let start = parse_field(start).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let end = parse_field(end).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(weekgrid_core::is_valid(start, end, self_index, &day))
}

/// Validate a whole week document.
///
/// Returns the per-field validity map as JSON: for each day, one
/// `{start, end}` verdict object per row, where each field is `null` or an
/// invalidity like `{"kind":"overlap","other":1}`.
#[wasm_bindgen(js_name = "validateWeek")]
pub fn validate_week_json(week_json: &str) -> Result<String, JsValue> {
    let week = parse_week(week_json)?;
    to_json(&validate_week(&week))
}

/// Apply a JSON array of edit ops to a week document.
///
/// Ops look like `{"op":"add","day":"Monday"}`,
/// `{"op":"set_start","day":"Monday","index":0,"value":"09:00"}`,
/// `{"op":"set_end",...}`, `{"op":"remove","day":"Monday","index":0}`.
/// Returns `{week, validity}` after the last op. Structural errors (bad row
/// index, garbled time string) reject the whole script.
#[wasm_bindgen(js_name = "applyOps")]
pub fn apply_ops(week_json: &str, ops_json: &str) -> Result<String, JsValue> {
    let mut week = parse_week(week_json)?;
    let ops: Vec<EditOp> = serde_json::from_str(ops_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid ops JSON: {}", e)))?;

    let validity =
        apply_all(&mut week, &ops).map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&ApplyResultDto { week, validity })
}

/// Read a week document out as its canonical submission form.
///
/// Returns `{payload, validity, clean}` where the payload renders every
/// bound as an `"HH:MM"` string (`null` for blanks). Submission always
/// succeeds; `clean` reports whether every row passed validation.
#[wasm_bindgen(js_name = "submitWeek")]
pub fn submit_week(week_json: &str) -> Result<String, JsValue> {
    let week = parse_week(week_json)?;
    to_json(&submit(&week))
}
