//! Request types for the custom attribute endpoints.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::CustomAttribute;
use crate::error::Error;
use crate::{Nullable, Result};

/// Longest idempotency key Square accepts on upsert.
const MAX_IDEMPOTENCY_KEY_LEN: usize = 45;

/// Body of `POST /v2/{resource}/{id}/custom-attributes/{key}`.
///
/// The attribute key comes from the path; `custom_attribute.key` must be left absent.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct UpsertCustomAttributeRequest {
    pub custom_attribute: CustomAttribute,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub idempotency_key: Nullable<String>,
}

impl UpsertCustomAttributeRequest {
    #[must_use]
    pub fn new(custom_attribute: CustomAttribute) -> Self {
        Self {
            custom_attribute,
            idempotency_key: Nullable::Absent,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.custom_attribute.key.is_present() {
            return Err(Error::validation(
                "custom_attribute.key is taken from the request path and must be absent",
            ));
        }
        if self.custom_attribute.value.is_absent() {
            return Err(Error::validation(
                "custom_attribute.value is required; set it to null to clear the attribute",
            ));
        }
        if let Some(key) = self.idempotency_key.get()
            && (key.is_empty() || key.chars().count() > MAX_IDEMPOTENCY_KEY_LEN)
        {
            return Err(Error::validation(format!(
                "idempotency_key must be 1 to {MAX_IDEMPOTENCY_KEY_LEN} characters"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::JsonSerialize as _;
    use crate::error::Kind;
    use crate::json::{NullHandling, SerializeOptions};

    #[test]
    fn clearing_upsert_keeps_null() -> anyhow::Result<()> {
        let mut attribute = CustomAttribute::builder().version(3_i32).build();
        attribute.clear_value();
        let request = UpsertCustomAttributeRequest::builder()
            .custom_attribute(attribute)
            .idempotency_key("0c2d3cd8-4b71-4d35-8b50-e3b9c2a4cd47")
            .build();
        request.validate()?;

        assert_eq!(
            request.json_serialize()?,
            json!({
                "custom_attribute": { "value": null, "version": 3 },
                "idempotency_key": "0c2d3cd8-4b71-4d35-8b50-e3b9c2a4cd47"
            })
        );

        let stripped = request.json_serialize_with(
            &SerializeOptions::builder()
                .nulls(NullHandling::Strip)
                .build(),
        )?;
        assert_eq!(
            stripped,
            json!({
                "custom_attribute": { "version": 3 },
                "idempotency_key": "0c2d3cd8-4b71-4d35-8b50-e3b9c2a4cd47"
            })
        );
        Ok(())
    }

    #[test]
    fn upsert_rejects_key_in_body() {
        let attribute = CustomAttribute::builder()
            .key("favorite-drink")
            .value(json!("latte"))
            .build();
        let err = UpsertCustomAttributeRequest::new(attribute)
            .validate()
            .expect_err("key belongs in the path");
        assert_eq!(err.kind(), Kind::Validation);
    }

    #[test]
    fn upsert_requires_value_presence() {
        let err = UpsertCustomAttributeRequest::new(CustomAttribute::default())
            .validate()
            .expect_err("absent value");
        assert!(err.to_string().contains("value"), "unexpected: {err}");
    }

    #[test]
    fn idempotency_key_length() {
        let mut request = UpsertCustomAttributeRequest::new(
            CustomAttribute::builder().value(json!(1)).build(),
        );
        request.idempotency_key.set("k".repeat(46));

        let err = request.validate().expect_err("key too long");
        assert!(err.to_string().contains("45"), "unexpected: {err}");
    }

    #[test]
    fn idempotency_key_limit_counts_characters() -> anyhow::Result<()> {
        let mut request = UpsertCustomAttributeRequest::new(
            CustomAttribute::builder().value(json!(1)).build(),
        );
        request.idempotency_key.set("é".repeat(45));
        request.validate()?;

        request.idempotency_key.set("é".repeat(46));
        let err = request.validate().expect_err("46 characters");
        assert_eq!(err.kind(), Kind::Validation);
        Ok(())
    }
}
