//! Query parameters for the payout endpoints.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use super::PayoutStatus;
use crate::types::{BoundedIntError, DateTime, SortOrder, Utc, validate_bound};

/// Query parameters for `GET /v2/payouts`.
///
/// # Example
///
/// ```
/// use square_models_sdk::ToQueryParams as _;
/// use square_models_sdk::payouts::types::PayoutStatus;
/// use square_models_sdk::payouts::types::request::ListPayoutsRequest;
///
/// let request = ListPayoutsRequest::builder()
///     .location_id("L88917AVBK2S5")
///     .status(PayoutStatus::Paid)
///     .build();
///
/// assert_eq!(request.query_params(), "?location_id=L88917AVBK2S5&status=PAID");
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Builder, Serialize)]
#[non_exhaustive]
pub struct ListPayoutsRequest {
    /// Defaults to the main location of the seller.
    #[builder(into)]
    pub location_id: Option<String>,
    pub status: Option<PayoutStatus>,
    /// Inclusive. Defaults to one year ago.
    pub begin_time: Option<DateTime<Utc>>,
    /// Exclusive. Defaults to now.
    pub end_time: Option<DateTime<Utc>>,
    pub sort_order: Option<SortOrder>,
    #[builder(into)]
    pub cursor: Option<String>,
    /// Page size (1-100, default: 100).
    #[builder(with = |v: i32| -> std::result::Result<_, BoundedIntError> { validate_bound(v, 1, 100, "limit") })]
    pub limit: Option<i32>,
}

/// Query parameters for `GET /v2/payouts/{payout_id}/payout-entries`.
///
/// The payout ID is a path segment and is not serialized.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct ListPayoutEntriesRequest {
    #[builder(into)]
    #[serde(skip)]
    pub payout_id: String,
    pub sort_order: Option<SortOrder>,
    #[builder(into)]
    pub cursor: Option<String>,
    /// Page size (1-100, default: 100).
    #[builder(with = |v: i32| -> std::result::Result<_, BoundedIntError> { validate_bound(v, 1, 100, "limit") })]
    pub limit: Option<i32>,
}

impl ListPayoutEntriesRequest {
    /// Request path, relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/v2/payouts/{}/payout-entries", self.payout_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToQueryParams as _;

    #[test]
    fn time_window_is_rfc3339() -> anyhow::Result<()> {
        let request = ListPayoutsRequest::builder()
            .begin_time("2022-03-01T00:00:00Z".parse()?)
            .sort_order(SortOrder::Asc)
            .limit(100)?
            .build();

        assert_eq!(
            request.query_params(),
            "?begin_time=2022-03-01T00%3A00%3A00Z&sort_order=ASC&limit=100"
        );
        Ok(())
    }

    #[test]
    fn entries_query_skips_path_segment() -> anyhow::Result<()> {
        let request = ListPayoutEntriesRequest::builder()
            .payout_id("po_1")
            .cursor("abc")
            .limit(10)?
            .build();

        assert_eq!(request.query_params(), "?cursor=abc&limit=10");
        assert_eq!(request.path(), "/v2/payouts/po_1/payout-entries");
        Ok(())
    }

    #[test]
    fn limit_out_of_range() {
        let err = ListPayoutsRequest::builder()
            .limit(0)
            .err()
            .expect("zero is below the minimum");
        assert_eq!(err.to_string(), "limit must be between 1 and 100 (got 0)");
    }
}
