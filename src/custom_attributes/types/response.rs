#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::CustomAttribute;
use crate::Nullable;
use crate::types::ApiError;

/// Response of `POST /v2/{resource}/{id}/custom-attributes/{key}`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct UpsertCustomAttributeResponse {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub custom_attribute: Nullable<CustomAttribute>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub errors: Nullable<Vec<ApiError>>,
}
