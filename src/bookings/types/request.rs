//! Request types for the booking endpoints.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::Booking;
use crate::error::Error;
use crate::types::{BoundedIntError, DateTime, Utc, validate_bound};
use crate::{Nullable, Result};

/// Longest appointment segment Square accepts, in minutes.
const MAX_SEGMENT_MINUTES: i32 = 1440;

/// Body of `POST /v2/bookings`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct CreateBookingRequest {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub idempotency_key: Nullable<String>,
    pub booking: Booking,
}

impl CreateBookingRequest {
    #[must_use]
    pub fn new(booking: Booking) -> Self {
        Self {
            idempotency_key: Nullable::Absent,
            booking,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let booking = &self.booking;
        if booking.start_at.get().is_none() {
            return Err(Error::validation("booking.start_at is required"));
        }
        let Some(segments) = booking.appointment_segments.get().filter(|s| !s.is_empty()) else {
            return Err(Error::validation(
                "booking.appointment_segments must contain at least one segment",
            ));
        };
        for (index, segment) in segments.iter().enumerate() {
            if segment.team_member_id.is_empty() {
                return Err(Error::validation(format!(
                    "appointment_segments[{index}].team_member_id must not be empty"
                )));
            }
            if let Some(&minutes) = segment.duration_minutes.get() {
                validate_bound(minutes, 0, MAX_SEGMENT_MINUTES, "duration_minutes")?;
            }
        }
        Ok(())
    }
}

/// Body of `PUT /v2/bookings/{booking_id}`. Only the fields present on `booking` change.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct UpdateBookingRequest {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub idempotency_key: Nullable<String>,
    pub booking: Booking,
}

/// Body of `POST /v2/bookings/{booking_id}/cancel`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct CancelBookingRequest {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub idempotency_key: Nullable<String>,
    /// Revision of the booking being cancelled; Square rejects the request if it is stale.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub booking_version: Nullable<i32>,
}

/// Query parameters for `GET /v2/bookings`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Builder, Serialize)]
#[non_exhaustive]
pub struct ListBookingsRequest {
    /// Page size (1-10000, default: 100).
    #[builder(with = |v: i32| -> std::result::Result<_, BoundedIntError> { validate_bound(v, 1, 10_000, "limit") })]
    pub limit: Option<i32>,
    #[builder(into)]
    pub cursor: Option<String>,
    #[builder(into)]
    pub customer_id: Option<String>,
    #[builder(into)]
    pub team_member_id: Option<String>,
    #[builder(into)]
    pub location_id: Option<String>,
    /// Defaults to the current time.
    pub start_at_min: Option<DateTime<Utc>>,
    /// Defaults to 31 days after `start_at_min`.
    pub start_at_max: Option<DateTime<Utc>>,
}
