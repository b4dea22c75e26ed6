//! Models shared by every API area, plus re-exported types used in model fields.
//!
//! These types are commonly used in this SDK and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

use std::error::Error as StdError;
use std::fmt;

use bon::Builder;
/// Date and time types for RFC 3339 timestamps such as `created_at`.
pub use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
/// Free-form JSON, used for custom attribute values.
pub use serde_json::Value;
use uuid::Uuid;

use crate::Nullable;

/// Returns a fresh idempotency key for a mutating request.
///
/// Square deduplicates requests carrying the same key, so retries of one logical operation must
/// reuse the key this returns.
#[must_use]
pub fn new_idempotency_key() -> String {
    Uuid::new_v4().to_string()
}

/// ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[non_exhaustive]
pub enum Currency {
    Aud,
    Cad,
    Chf,
    Eur,
    Gbp,
    Jpy,
    Usd,
    /// Currency not modelled by this crate (captures the raw code).
    #[serde(untagged)]
    Unknown(String),
}

/// Chronological order of list results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[non_exhaustive]
pub enum SortOrder {
    Asc,
    /// Newest first. Square's default for most list endpoints.
    #[default]
    Desc,
}

/// An amount of money in the smallest denomination of its currency.
///
/// For example, `amount = 500` with `currency = USD` is $5.00.
///
/// # Example
///
/// ```
/// use square_models_sdk::JsonSerialize as _;
/// use square_models_sdk::types::{Currency, Money};
///
/// let money = Money::builder().amount(500_i64).currency(Currency::Usd).build();
/// assert_eq!(
///     money.to_json_string().unwrap(),
///     r#"{"amount":500,"currency":"USD"}"#
/// );
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct Money {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub amount: Nullable<i64>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub currency: Nullable<Currency>,
}

impl Money {
    /// Both fields set, the common case for request bodies.
    #[must_use]
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self {
            amount: Nullable::Value(amount),
            currency: Nullable::Value(currency),
        }
    }
}

/// A half-open range of instants. Either end may be left open.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct TimeRange {
    /// Inclusive start.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub start_at: Nullable<DateTime<Utc>>,
    /// Exclusive end.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub end_at: Nullable<DateTime<Utc>>,
}

impl TimeRange {
    /// `true` if `at` falls within the range; open ends match everything on that side.
    #[must_use]
    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        self.start_at.get().is_none_or(|start| start <= at)
            && self.end_at.get().is_none_or(|end| at < end)
    }
}

/// A physical address.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct Address {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub address_line_1: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub address_line_2: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub address_line_3: Nullable<String>,
    /// City or town.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub locality: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub sublocality: Nullable<String>,
    /// State or province.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub administrative_district_level_1: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub postal_code: Nullable<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub country: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub first_name: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub last_name: Nullable<String>,
}

/// High-level grouping of an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorCategory {
    ApiError,
    AuthenticationError,
    InvalidRequestError,
    RateLimitError,
    PaymentMethodError,
    RefundError,
    MerchantSubscriptionError,
    ExternalVendorError,
    #[serde(untagged)]
    Unknown(String),
}

/// Specific reason for an [`ApiError`]. Only the codes the modelled endpoints commonly return are
/// named; everything else lands in [`Unknown`](Self::Unknown).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorCode {
    InternalServerError,
    Unauthorized,
    AccessTokenExpired,
    Forbidden,
    InsufficientScopes,
    BadRequest,
    MissingRequiredParameter,
    IncorrectType,
    InvalidValue,
    InvalidCursor,
    InvalidEmailAddress,
    ValueTooLong,
    ValueTooLow,
    ValueTooHigh,
    IdempotencyKeyReused,
    NotFound,
    Conflict,
    VersionMismatch,
    RateLimited,
    #[serde(untagged)]
    Unknown(String),
}

/// An error returned by Square in the `errors` array of a response.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct ApiError {
    pub category: ErrorCategory,
    pub code: ErrorCode,
    /// Human-readable explanation, for logs rather than end users.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub detail: Nullable<String>,
    /// Request field the error relates to, if any.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub field: Nullable<String>,
}

impl ApiError {
    #[must_use]
    pub fn new(category: ErrorCategory, code: ErrorCode) -> Self {
        Self {
            category,
            code,
            detail: Nullable::Absent,
            field: Nullable::Absent,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.category)?;
        if let Some(detail) = self.detail.get() {
            write!(f, ": {detail}")?;
        }
        if let Some(field) = self.field.get() {
            write!(f, " [field: {field}]")?;
        }
        Ok(())
    }
}

impl StdError for ApiError {}

/// Error returned when a bounded integer parameter such as `limit` is out of range.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedIntError {
    pub value: i32,
    pub min: i32,
    pub max: i32,
    pub param_name: &'static str,
}

impl BoundedIntError {
    #[must_use]
    pub const fn new(value: i32, min: i32, max: i32, param_name: &'static str) -> Self {
        Self {
            value,
            min,
            max,
            param_name,
        }
    }
}

impl fmt::Display for BoundedIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be between {} and {} (got {})",
            self.param_name, self.min, self.max, self.value
        )
    }
}

impl StdError for BoundedIntError {}

impl From<BoundedIntError> for crate::error::Error {
    fn from(err: BoundedIntError) -> Self {
        Self::with_source(crate::error::Kind::Validation, err)
    }
}

/// Validates that an i32 value is within the specified bounds.
#[cfg_attr(
    not(any(
        test,
        feature = "bookings",
        feature = "gift_cards",
        feature = "invoices",
        feature = "loyalty",
        feature = "payouts"
    )),
    expect(dead_code, reason = "Only requests of enabled API areas are bounded")
)]
pub(crate) fn validate_bound(
    value: i32,
    min: i32,
    max: i32,
    param_name: &'static str,
) -> Result<i32, BoundedIntError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(BoundedIntError::new(value, min, max, param_name))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::JsonSerialize as _;

    #[test]
    fn money_serializes_only_set_fields() -> anyhow::Result<()> {
        let mut money = Money::default();
        assert_eq!(money.to_json_string()?, "{}");

        money.amount.set(500_i64);
        assert_eq!(money.to_json_string()?, r#"{"amount":500}"#);

        money.currency.set(Currency::Usd);
        assert_eq!(
            money.to_json_string()?,
            r#"{"amount":500,"currency":"USD"}"#
        );

        money.amount.unset();
        assert_eq!(money.to_json_string()?, r#"{"currency":"USD"}"#);

        Ok(())
    }

    #[test]
    fn unknown_currency_is_captured() -> anyhow::Result<()> {
        let money: Money = serde_json::from_value(json!({ "amount": 1, "currency": "XTS" }))?;
        assert_eq!(money.currency, Nullable::Value(Currency::Unknown("XTS".to_owned())));
        assert_eq!(money.json_serialize()?, json!({ "amount": 1, "currency": "XTS" }));
        Ok(())
    }

    #[test]
    fn api_error_requires_category_and_code() -> anyhow::Result<()> {
        let error = ApiError::new(ErrorCategory::InvalidRequestError, ErrorCode::NotFound);
        assert_eq!(
            error.to_json_string()?,
            r#"{"category":"INVALID_REQUEST_ERROR","code":"NOT_FOUND"}"#
        );
        Ok(())
    }

    #[test]
    fn api_error_display() {
        let error = ApiError::builder()
            .category(ErrorCategory::InvalidRequestError)
            .code(ErrorCode::MissingRequiredParameter)
            .detail("Missing required parameter.")
            .field("gift_card_id")
            .build();

        assert_eq!(
            error.to_string(),
            "MISSING_REQUIRED_PARAMETER (INVALID_REQUEST_ERROR): Missing required parameter. \
             [field: gift_card_id]"
        );
    }

    #[test]
    fn api_error_unknown_code_is_captured() -> anyhow::Result<()> {
        let error: ApiError = serde_json::from_value(json!({
            "category": "INVALID_REQUEST_ERROR",
            "code": "GIFT_CARD_AVAILABLE_AMOUNT",
            "detail": "Insufficient balance"
        }))?;
        assert_eq!(
            error.code,
            ErrorCode::Unknown("GIFT_CARD_AVAILABLE_AMOUNT".to_owned())
        );
        Ok(())
    }

    #[test]
    fn address_with_explicit_null_clears_line() -> anyhow::Result<()> {
        let mut address = Address::builder()
            .address_line_1("500 Electric Ave")
            .locality("New York")
            .build();
        address.address_line_2.set(None);

        assert_eq!(
            address.json_serialize()?,
            json!({
                "address_line_1": "500 Electric Ave",
                "address_line_2": null,
                "locality": "New York"
            })
        );
        Ok(())
    }

    #[test]
    fn time_range_is_half_open() -> anyhow::Result<()> {
        let start: DateTime<Utc> = "2024-01-01T00:00:00Z".parse()?;
        let end: DateTime<Utc> = "2024-02-01T00:00:00Z".parse()?;
        let range = TimeRange::builder().start_at(start).end_at(end).build();

        assert!(range.contains(&start), "start is inclusive");
        assert!(!range.contains(&end), "end is exclusive");
        assert!(TimeRange::default().contains(&end), "open range matches all");
        Ok(())
    }

    #[test]
    fn idempotency_keys_are_unique() {
        assert_ne!(new_idempotency_key(), new_idempotency_key());
    }

    #[test]
    fn bound_is_inclusive() {
        assert_eq!(validate_bound(1, 1, 200, "limit"), Ok(1));
        assert_eq!(validate_bound(200, 1, 200, "limit"), Ok(200));
        assert_eq!(
            validate_bound(0, 1, 200, "limit"),
            Err(BoundedIntError::new(0, 1, 200, "limit"))
        );
    }
}
