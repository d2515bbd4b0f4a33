//! Shareable plan codes.
//!
//! A code is the base64 encoding of a UTF-8 JSON array holding one object per
//! plan entry: `[{"id": "legs-1", "v": "徒手 Bodyweight", "s": 3, "r": 10, "w": 0}]`.
//! Codes carry no version. Decoding therefore never trusts the payload shape:
//! entries of unknown exercises are dropped and missing or unusable fields fall
//! back to defaults.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::{debug, error, warn};
use serde::Serialize;
use serde_json::Value;

use crate::{PlanEntry, PlanItem, Reps, Sets, Weight, catalog};

/// Message shown for every rejected code. The cause is logged.
const REJECTION: &str = "代碼無效。請確認代碼完整性。 Invalid code, please check that it is complete.";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum InvalidCodeError {
    #[error("{}", REJECTION)]
    Base64,
    #[error("{}", REJECTION)]
    Utf8,
    #[error("{}", REJECTION)]
    Json,
    #[error("{}", REJECTION)]
    NotAnArray,
    #[error("{}", REJECTION)]
    NoValidExercises,
}

#[derive(Serialize)]
struct CodeItem<'a> {
    id: &'a str,
    v: &'a str,
    s: u32,
    r: u32,
    w: f32,
}

impl<'a> From<&'a PlanItem> for CodeItem<'a> {
    fn from(value: &'a PlanItem) -> Self {
        Self {
            id: &value.exercise_id,
            v: &value.variant,
            s: value.sets.into(),
            r: value.reps.into(),
            w: value.weight.into(),
        }
    }
}

/// An empty plan results in an empty code.
#[must_use]
pub fn encode(entries: &[PlanEntry]) -> String {
    encode_items(&entries.iter().map(PlanEntry::item).collect::<Vec<_>>())
}

#[must_use]
pub fn encode_items(items: &[PlanItem]) -> String {
    if items.is_empty() {
        return String::new();
    }
    match serde_json::to_string(&items.iter().map(CodeItem::from).collect::<Vec<_>>()) {
        Ok(json) => STANDARD.encode(json),
        Err(err) => {
            error!("failed to encode plan: {err}");
            String::new()
        }
    }
}

/// Entries get a fresh identity and are not completed.
pub fn decode(code: &str) -> Result<Vec<PlanEntry>, InvalidCodeError> {
    let entries = parse(code)?
        .iter()
        .filter_map(coalesce)
        .filter_map(PlanItem::hydrate)
        .collect::<Vec<_>>();

    if entries.is_empty() {
        warn!("rejected code without known exercises");
        return Err(InvalidCodeError::NoValidExercises);
    }

    Ok(entries)
}

fn parse(code: &str) -> Result<Vec<Value>, InvalidCodeError> {
    let bytes = STANDARD.decode(code.trim()).map_err(|err| {
        warn!("failed to decode base64-encoded code: {err}");
        InvalidCodeError::Base64
    })?;
    let json = String::from_utf8(bytes).map_err(|err| {
        warn!("failed to decode code as UTF-8: {err}");
        InvalidCodeError::Utf8
    })?;
    match serde_json::from_str(&json) {
        Ok(Value::Array(values)) => Ok(values),
        Ok(_) => {
            warn!("rejected code without top-level array");
            Err(InvalidCodeError::NotAnArray)
        }
        Err(err) => {
            warn!("failed to parse code: {err}");
            Err(InvalidCodeError::Json)
        }
    }
}

fn coalesce(value: &Value) -> Option<PlanItem> {
    let Some(exercise) = value
        .get("id")
        .and_then(Value::as_str)
        .and_then(catalog::find_by_id)
    else {
        debug!("dropped unknown exercise {:?}", value.get("id"));
        return None;
    };

    Some(PlanItem {
        exercise_id: exercise.id.to_string(),
        variant: value
            .get("v")
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
            .unwrap_or(exercise.default_variant())
            .to_string(),
        sets: value
            .get("s")
            .and_then(integer)
            .and_then(|s| Sets::new(s).ok())
            .unwrap_or(Sets::DEFAULT),
        reps: value
            .get("r")
            .and_then(integer)
            .and_then(|r| Reps::new(r).ok())
            .unwrap_or(Reps::DEFAULT),
        weight: value
            .get("w")
            .and_then(Value::as_f64)
            .and_then(|w| {
                #[allow(clippy::cast_possible_truncation)]
                let w = w as f32;
                Weight::new(w).ok()
            })
            .unwrap_or(Weight::BODYWEIGHT),
    })
}

fn integer(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    value
        .as_f64()
        .filter(|n| n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(n))
        .map(|n| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let n = n as u32;
            n
        })
}
