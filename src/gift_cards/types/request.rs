//! Request types for the gift card activity endpoints.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{GiftCardActivity, GiftCardActivityType};
use crate::Result;
use crate::error::Error;
use crate::types::{BoundedIntError, DateTime, SortOrder, Utc, validate_bound};

/// Longest idempotency key Square accepts on this endpoint.
const MAX_IDEMPOTENCY_KEY_LEN: usize = 128;

/// Body of `POST /v2/gift-cards/activities`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct CreateGiftCardActivityRequest {
    pub idempotency_key: String,
    pub gift_card_activity: GiftCardActivity,
}

impl CreateGiftCardActivityRequest {
    #[must_use]
    pub fn new<S: Into<String>>(idempotency_key: S, gift_card_activity: GiftCardActivity) -> Self {
        Self {
            idempotency_key: idempotency_key.into(),
            gift_card_activity,
        }
    }

    /// Checks the constraints Square would otherwise reject with `400 Bad Request`.
    pub fn validate(&self) -> Result<()> {
        if self.idempotency_key.is_empty()
            || self.idempotency_key.chars().count() > MAX_IDEMPOTENCY_KEY_LEN
        {
            return Err(Error::validation(format!(
                "idempotency_key must be 1 to {MAX_IDEMPOTENCY_KEY_LEN} characters"
            )));
        }

        let activity = &self.gift_card_activity;
        if activity.location_id.is_empty() {
            return Err(Error::validation("location_id must not be empty"));
        }
        if activity.gift_card_id.get().is_none() && activity.gift_card_gan.get().is_none() {
            return Err(Error::validation(
                "one of gift_card_id or gift_card_gan is required",
            ));
        }
        if !activity.details_match_type() {
            return Err(Error::validation(format!(
                "{} activity must carry exactly {}, found {:?}",
                activity.activity_type,
                activity.expected_details().unwrap_or("one details field"),
                activity.populated_details()
            )));
        }

        Ok(())
    }
}

/// Query parameters for `GET /v2/gift-cards/activities`.
///
/// # Example
///
/// ```
/// use square_models_sdk::ToQueryParams as _;
/// use square_models_sdk::gift_cards::types::GiftCardActivityType;
/// use square_models_sdk::gift_cards::types::request::ListGiftCardActivitiesRequest;
///
/// let request = ListGiftCardActivitiesRequest::builder()
///     .gift_card_id("gftc:6d55a72470d940c6ba09c0ab8ad08d20")
///     .activity_type(GiftCardActivityType::Redeem)
///     .limit(50)?
///     .build();
///
/// assert_eq!(
///     request.query_params(),
///     "?gift_card_id=gftc%3A6d55a72470d940c6ba09c0ab8ad08d20&type=REDEEM&limit=50"
/// );
/// # Ok::<(), square_models_sdk::types::BoundedIntError>(())
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Builder, Serialize)]
#[non_exhaustive]
pub struct ListGiftCardActivitiesRequest {
    #[builder(into)]
    pub gift_card_id: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: Option<GiftCardActivityType>,
    #[builder(into)]
    pub location_id: Option<String>,
    /// Inclusive start of the reporting period.
    pub begin_time: Option<DateTime<Utc>>,
    /// Exclusive end of the reporting period.
    pub end_time: Option<DateTime<Utc>>,
    /// Page size (1-100, default: 50).
    #[builder(with = |v: i32| -> std::result::Result<_, BoundedIntError> { validate_bound(v, 1, 100, "limit") })]
    pub limit: Option<i32>,
    /// Cursor returned by a previous page.
    #[builder(into)]
    pub cursor: Option<String>,
    pub sort_order: Option<SortOrder>,
}
