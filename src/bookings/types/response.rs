#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::Booking;
use crate::Nullable;
use crate::types::ApiError;

/// Response of `POST /v2/bookings`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct CreateBookingResponse {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub booking: Nullable<Booking>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub errors: Nullable<Vec<ApiError>>,
}

/// Response of `PUT /v2/bookings/{booking_id}`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct UpdateBookingResponse {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub booking: Nullable<Booking>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub errors: Nullable<Vec<ApiError>>,
}

/// Response of `POST /v2/bookings/{booking_id}/cancel`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct CancelBookingResponse {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub booking: Nullable<Booking>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub errors: Nullable<Vec<ApiError>>,
}

/// Response of `GET /v2/bookings`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct ListBookingsResponse {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub bookings: Nullable<Vec<Booking>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub cursor: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub errors: Nullable<Vec<ApiError>>,
}
