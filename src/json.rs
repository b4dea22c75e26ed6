//! Converting models to and from JSON wire payloads.
//!
//! [`JsonSerialize`] is implemented for every [`Serialize`] type and turns a model into the JSON
//! object Square expects. Field presence is decided by the model itself (see
//! [`Nullable`](crate::Nullable)); this module applies the request-wide options on top:
//!
//! - [`NullHandling::Preserve`] (default) keeps `"key": null` for fields explicitly set to null,
//!   which is how Square clears a field on update.
//! - [`NullHandling::Strip`] omits every [`Nullable`](crate::Nullable) field set to null, in the
//!   model and in every nested model. This matches the behaviour of older generated SDKs, where a
//!   cleared field was indistinguishable from an absent one. Free-form JSON carried in a field
//!   (a custom attribute value, a definition schema) is emitted unchanged, nulls included.
//!
//! [`FromJson`] is the reverse path: unknown keys are ignored (and logged with the `tracing`
//! feature), missing required keys are a [`Kind::MalformedResponse`](crate::error::Kind) error.

use std::cell::Cell;

use bon::Builder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::Result;
use crate::error::Error;
use crate::serde_helpers;

/// What to do with keys whose serialized value is `null`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NullHandling {
    /// Emit explicit nulls. Absent fields are still omitted.
    #[default]
    Preserve,
    /// Omit null fields of every model being serialized.
    Strip,
}

thread_local! {
    static STRIP_NULLS: Cell<bool> = const { Cell::new(false) };
}

/// Whether the model currently being serialized on this thread omits its null fields.
///
/// Consulted by [`Nullable::is_omitted`](crate::Nullable::is_omitted) from
/// `skip_serializing_if`, so only model fields are affected.
pub(crate) fn nulls_stripped() -> bool {
    STRIP_NULLS.with(Cell::get)
}

/// Sets the null handling for the current thread, restoring the previous one on drop.
struct NullMode {
    previous: bool,
}

impl NullMode {
    fn enter(nulls: NullHandling) -> Self {
        let previous = STRIP_NULLS.with(|strip| strip.replace(nulls == NullHandling::Strip));
        Self { previous }
    }
}

impl Drop for NullMode {
    fn drop(&mut self) {
        STRIP_NULLS.with(|strip| strip.set(self.previous));
    }
}

/// Options applied by [`JsonSerialize::json_serialize_with`].
///
/// # Example
///
/// ```
/// use square_models_sdk::json::{NullHandling, SerializeOptions};
///
/// let options = SerializeOptions::builder()
///     .nulls(NullHandling::Strip)
///     .build();
/// assert!(!options.as_array_when_empty);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
pub struct SerializeOptions {
    #[builder(default)]
    pub nulls: NullHandling,
    /// Serialize a model with no emitted keys as `[]` rather than `{}`.
    ///
    /// Only useful for endpoints written against encoders that treat an empty mapping as a list.
    #[builder(default)]
    pub as_array_when_empty: bool,
}

/// Serializes a model to its JSON wire shape.
pub trait JsonSerialize: Serialize {
    /// Returns the model's key/value mapping, keys in declaration order.
    ///
    /// The mapping is returned as-is even when empty.
    fn to_json_map(&self, nulls: NullHandling) -> Result<Map<String, Value>> {
        let type_name = std::any::type_name::<Self>();
        let value = {
            let _mode = NullMode::enter(nulls);
            serde_json::to_value(self)?
        };
        let map = match value {
            Value::Object(map) => map,
            other => return Err(Error::not_an_object(type_name, json_kind(&other))),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(type_name = %type_name, keys = map.len(), ?nulls, "serialized model");

        Ok(map)
    }

    /// Serializes with [`SerializeOptions::default`]: explicit nulls kept, empty models as `{}`.
    fn json_serialize(&self) -> Result<Value> {
        self.json_serialize_with(&SerializeOptions::default())
    }

    fn json_serialize_with(&self, options: &SerializeOptions) -> Result<Value> {
        let map = self.to_json_map(options.nulls)?;

        if map.is_empty() && options.as_array_when_empty {
            Ok(Value::Array(Vec::new()))
        } else {
            Ok(Value::Object(map))
        }
    }

    /// Serializes with default options straight to a JSON string, ready for a request body.
    fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.json_serialize()?)?)
    }
}

impl<T: Serialize + ?Sized> JsonSerialize for T {}

/// Builds a model from a JSON payload received from Square.
pub trait FromJson: DeserializeOwned {
    fn from_json(value: Value) -> Result<Self> {
        serde_helpers::deserialize_with_warnings(value)
    }

    fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            Error::malformed(std::any::type_name::<Self>(), String::new(), e.to_string())
        })?;
        Self::from_json(value)
    }
}

impl<T: DeserializeOwned> FromJson for T {}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;
    use crate::Nullable;
    use crate::error::Kind;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Inner {
        #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
        label: Nullable<String>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Outer {
        id: String,
        #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
        note: Nullable<String>,
        #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
        inner: Nullable<Inner>,
        #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
        tags: Nullable<Vec<Option<String>>>,
    }

    fn outer() -> Outer {
        Outer {
            id: "abc".to_owned(),
            note: Nullable::Null,
            inner: Nullable::Value(Inner {
                label: Nullable::Null,
            }),
            tags: Nullable::Value(vec![Some("a".to_owned()), None]),
        }
    }

    #[test]
    fn preserve_keeps_explicit_nulls() {
        let value = outer().json_serialize().expect("serialization failed");

        assert_eq!(
            value,
            json!({
                "id": "abc",
                "note": null,
                "inner": { "label": null },
                "tags": ["a", null]
            })
        );
    }

    #[test]
    fn strip_omits_null_fields_of_nested_models() {
        let options = SerializeOptions::builder()
            .nulls(NullHandling::Strip)
            .build();
        let value = outer()
            .json_serialize_with(&options)
            .expect("serialization failed");

        // Array elements are values, not keys, and are left alone.
        assert_eq!(
            value,
            json!({
                "id": "abc",
                "inner": {},
                "tags": ["a", null]
            })
        );
    }

    #[test]
    fn strip_leaves_free_form_values_alone() {
        #[derive(Serialize)]
        struct Attribute {
            #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
            value: Nullable<Value>,
            #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
            version: Nullable<i64>,
        }

        let attribute = Attribute {
            value: Nullable::Value(json!({ "nickname": null, "drink": "latte" })),
            version: Nullable::Null,
        };
        let options = SerializeOptions::builder()
            .nulls(NullHandling::Strip)
            .build();

        assert_eq!(
            attribute
                .json_serialize_with(&options)
                .expect("serialization failed"),
            json!({ "value": { "nickname": null, "drink": "latte" } })
        );
    }

    #[test]
    fn strip_mode_is_restored_after_serializing() {
        let options = SerializeOptions::builder()
            .nulls(NullHandling::Strip)
            .build();
        outer()
            .json_serialize_with(&options)
            .expect("serialization failed");

        assert!(!nulls_stripped(), "strip mode leaked past the call");
        assert_eq!(
            serde_json::to_value(outer()).expect("serialization failed")["note"],
            Value::Null
        );
    }

    #[test]
    fn empty_model_is_object_by_default() {
        let value = Inner::default().json_serialize().expect("serialization failed");

        assert_eq!(value, json!({}));
        assert_eq!(
            Inner::default().to_json_string().expect("serialization failed"),
            "{}"
        );
    }

    #[test]
    fn empty_model_as_array_when_requested() {
        let options = SerializeOptions::builder().as_array_when_empty(true).build();
        let value = Inner::default()
            .json_serialize_with(&options)
            .expect("serialization failed");

        assert_eq!(value, json!([]));
    }

    #[test]
    fn to_json_map_returns_empty_mapping() {
        let map = Inner::default()
            .to_json_map(NullHandling::Preserve)
            .expect("serialization failed");
        assert!(map.is_empty(), "expected empty map, got {map:?}");
    }

    #[test]
    fn non_object_is_serialization_error() {
        let err = vec![1, 2, 3]
            .json_serialize()
            .expect_err("arrays are not models");
        assert_eq!(err.kind(), Kind::Serialization);
    }

    #[test]
    fn serializing_twice_is_identical() {
        let model = outer();
        let first = model.to_json_string().expect("serialization failed");
        let second = model.to_json_string().expect("serialization failed");
        assert_eq!(first, second);
    }

    #[test]
    fn from_json_roundtrip_preserves_presence() {
        let json = json!({ "id": "abc", "note": null, "inner": { "label": null } });
        let model = Outer::from_json(json.clone()).expect("deserialization failed");

        assert_eq!(model.note, Nullable::Null);
        assert_eq!(model.tags, Nullable::Absent);
        assert_eq!(model.json_serialize().expect("serialization failed"), json);
    }

    #[test]
    fn from_json_str_rejects_invalid_json() {
        let err = Outer::from_json_str("{ not json").expect_err("should fail");
        assert_eq!(err.kind(), Kind::MalformedResponse);
    }
}
