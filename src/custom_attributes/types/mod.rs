use bon::Builder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::types::{DateTime, Utc, Value};
use crate::{FromJson as _, Nullable, Result};

pub mod request;
pub mod response;

/// Who can see and edit a custom attribute besides the application that defined it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum CustomAttributeVisibility {
    VisibilityHidden,
    VisibilityReadOnly,
    VisibilityReadWriteValues,
    #[serde(untagged)]
    Unknown(String),
}

/// Declares the key, schema and visibility of a custom attribute.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct CustomAttributeDefinition {
    /// Unique per application, e.g. `favorite-drink`. Qualified as `{application_id}:{key}`
    /// when read by other applications.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub key: Nullable<String>,
    /// JSON Schema reference, e.g.
    /// `{"$ref": "https://developer-production-s.squarecdn.com/schemas/v1/common.json#squareup.common.String"}`.
    #[builder(default, with = |schema: Value| Nullable::from_json_value(schema))]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub schema: Nullable<Value>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub name: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub description: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub visibility: Nullable<CustomAttributeVisibility>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub version: Nullable<i32>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub updated_at: Nullable<DateTime<Utc>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub created_at: Nullable<DateTime<Utc>>,
}

/// A value of a custom attribute on one resource.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct CustomAttribute {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub key: Nullable<String>,
    /// Must conform to the definition's schema. Explicit `null` removes the value.
    ///
    /// The builder and [`set_value`](Self::set_value) store JSON `null` as [`Nullable::Null`].
    #[builder(default, with = |value: Value| Nullable::from_json_value(value))]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub value: Nullable<Value>,
    /// Expected current version on upsert; the write fails if it is stale.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub version: Nullable<i32>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub visibility: Nullable<CustomAttributeVisibility>,
    /// Returned only when requested with `with_definitions`.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub definition: Nullable<CustomAttributeDefinition>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub updated_at: Nullable<DateTime<Utc>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub created_at: Nullable<DateTime<Utc>>,
}

impl CustomAttribute {
    /// Marks the value for removal on the next upsert.
    pub fn clear_value(&mut self) {
        self.value.set(None);
    }

    /// Replaces the value. JSON `null` is the same as [`clear_value`](Self::clear_value).
    pub fn set_value(&mut self, value: Value) {
        self.value = Nullable::from_json_value(value);
    }

    /// Decodes the value into `T`. `Ok(None)` when the value is absent or null.
    pub fn value_as<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match self.value.get() {
            Some(Value::Null) | None => Ok(None),
            Some(value) => T::from_json(value.clone()).map(Some),
        }
    }
}
