//! Deserialization of Square payloads.
//!
//! Unknown keys never fail deserialization; with the `tracing` feature each one is logged so
//! schema drift on Square's side is visible. Failures always carry the JSON path of the offending
//! value.

use std::any::type_name;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// Deserialize `value` into `T`, warning about keys `T` does not declare.
#[cfg(feature = "tracing")]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    tracing::trace!(type_name = %type_name::<T>(), json = %value, "deserializing JSON");

    let original = value.clone();
    let mut unknown_paths: Vec<String> = Vec::new();

    let result: T = serde_ignored::deserialize(value, |path| {
        unknown_paths.push(path.to_string());
    })
    .map_err(|source| {
        // Replay to recover the path of the failure; serde_ignored only reports the message.
        let err = path_error::<T>(original.clone(), &source);
        if let Some(malformed) = err.downcast_ref::<crate::error::MalformedResponse>() {
            tracing::error!(
                type_name = %malformed.type_name,
                path = %malformed.path,
                value = %format_value(lookup_value(&original, &malformed.path)),
                error = %malformed.reason,
                "deserialization failed"
            );
        }
        err
    })?;

    for path in unknown_paths {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %format_value(lookup_value(&original, &path)),
            "unknown field in API response"
        );
    }

    Ok(result)
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    serde_path_to_error::deserialize(value).map_err(malformed::<T>)
}

#[cfg(feature = "tracing")]
fn path_error<T: DeserializeOwned>(value: Value, source: &serde_json::Error) -> Error {
    match serde_path_to_error::deserialize::<_, T>(value) {
        Err(e) => malformed::<T>(e),
        Ok(_) => Error::malformed(type_name::<T>(), String::new(), source.to_string()),
    }
}

fn malformed<T>(err: serde_path_to_error::Error<serde_json::Error>) -> Error {
    let path = err.path().to_string();
    Error::malformed(type_name::<T>(), path, err.into_inner().to_string())
}

/// Finds the value at a path as reported by `serde_ignored` or `serde_path_to_error`, e.g.
/// `activities[3].gift_card_id`, `activities.3.gift_card_id` or `?.note`.
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty() && *segment != "?")
        .try_fold(value, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
            _ => None,
        })
}

#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "<unable to retrieve>".to_owned(), Value::to_string)
}
