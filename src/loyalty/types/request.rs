//! Request types for `POST /v2/loyalty/events/search`.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::LoyaltyEventType;
use crate::types::{TimeRange, validate_bound};
use crate::{Nullable, Result};

/// Restricts results to one loyalty account.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct LoyaltyEventLoyaltyAccountFilter {
    pub loyalty_account_id: String,
}

/// Restricts results to the listed event types.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct LoyaltyEventTypeFilter {
    pub types: Vec<LoyaltyEventType>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct LoyaltyEventDateTimeFilter {
    pub created_at: TimeRange,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct LoyaltyEventLocationFilter {
    pub location_ids: Vec<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct LoyaltyEventOrderFilter {
    pub order_id: String,
}

/// Filters combined with AND.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct LoyaltyEventFilter {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub loyalty_account_filter: Nullable<LoyaltyEventLoyaltyAccountFilter>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub type_filter: Nullable<LoyaltyEventTypeFilter>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub date_time_filter: Nullable<LoyaltyEventDateTimeFilter>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub location_filter: Nullable<LoyaltyEventLocationFilter>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub order_filter: Nullable<LoyaltyEventOrderFilter>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct LoyaltyEventQuery {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub filter: Nullable<LoyaltyEventFilter>,
}

/// Body of `POST /v2/loyalty/events/search`.
///
/// All fields are optional; an empty body searches every event, newest first.
///
/// # Example
///
/// ```
/// use square_models_sdk::JsonSerialize as _;
/// use square_models_sdk::loyalty::types::request::{
///     LoyaltyEventFilter, LoyaltyEventLoyaltyAccountFilter, LoyaltyEventQuery,
///     SearchLoyaltyEventsRequest,
/// };
///
/// let filter = LoyaltyEventFilter::builder()
///     .loyalty_account_filter(
///         LoyaltyEventLoyaltyAccountFilter::builder()
///             .loyalty_account_id("5adcb100-07f1-4ee7-b8c6-6bb9ebc474bd")
///             .build(),
///     )
///     .build();
/// let request = SearchLoyaltyEventsRequest::builder()
///     .query(LoyaltyEventQuery::builder().filter(filter).build())
///     .limit(30_i32)
///     .build();
///
/// request.validate().unwrap();
/// assert_eq!(
///     request.to_json_string().unwrap(),
///     r#"{"query":{"filter":{"loyalty_account_filter":{"loyalty_account_id":"5adcb100-07f1-4ee7-b8c6-6bb9ebc474bd"}}},"limit":30}"#
/// );
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct SearchLoyaltyEventsRequest {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub query: Nullable<LoyaltyEventQuery>,
    /// Page size (1-30, default: 30).
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub limit: Nullable<i32>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub cursor: Nullable<String>,
}

impl SearchLoyaltyEventsRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(&limit) = self.limit.get() {
            validate_bound(limit, 1, 30, "limit")?;
        }
        Ok(())
    }
}
