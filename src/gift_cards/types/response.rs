#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::GiftCardActivity;
use crate::Nullable;
use crate::types::ApiError;

/// Response of `POST /v2/gift-cards/activities`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct CreateGiftCardActivityResponse {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub errors: Nullable<Vec<ApiError>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub gift_card_activity: Nullable<GiftCardActivity>,
}

/// Response of `GET /v2/gift-cards/activities`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct ListGiftCardActivitiesResponse {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub errors: Nullable<Vec<ApiError>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub gift_card_activities: Nullable<Vec<GiftCardActivity>>,
    /// Absent on the last page.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub cursor: Nullable<String>,
}
