#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::LoyaltyEvent;
use crate::Nullable;
use crate::types::ApiError;

/// Response of `POST /v2/loyalty/events/search`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct SearchLoyaltyEventsResponse {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub errors: Nullable<Vec<ApiError>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub events: Nullable<Vec<LoyaltyEvent>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub cursor: Nullable<String>,
}
