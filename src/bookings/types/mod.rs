use bon::Builder;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::Nullable;
use crate::types::{Address, DateTime, Utc};

pub mod request;
pub mod response;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum BookingStatus {
    Pending,
    CancelledByCustomer,
    CancelledBySeller,
    Declined,
    Accepted,
    NoShow,
    /// Unknown status from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

impl BookingStatus {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::CancelledByCustomer | Self::CancelledBySeller)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum BookingLocationType {
    BusinessLocation,
    CustomerLocation,
    Phone,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum BookingSource {
    FirstPartyMerchant,
    FirstPartyBuyer,
    ThirdPartyBuyer,
    Api,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum BookingCreatorType {
    TeamMember,
    Customer,
    #[serde(untagged)]
    Unknown(String),
}

/// One service performed by one team member within a booking.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct AppointmentSegment {
    pub team_member_id: String,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub duration_minutes: Nullable<i32>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub service_variation_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub service_variation_version: Nullable<i64>,
    /// Read-only; taken from the service variation.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub intermission_minutes: Nullable<i32>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub any_team_member: Nullable<bool>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub resource_ids: Nullable<Vec<String>>,
}

impl AppointmentSegment {
    #[must_use]
    pub fn new<S: Into<String>>(team_member_id: S) -> Self {
        Self {
            team_member_id: team_member_id.into(),
            duration_minutes: Nullable::Absent,
            service_variation_id: Nullable::Absent,
            service_variation_version: Nullable::Absent,
            intermission_minutes: Nullable::Absent,
            any_team_member: Nullable::Absent,
            resource_ids: Nullable::Absent,
        }
    }
}

/// Who created a booking. Read-only.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct BookingCreatorDetails {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub creator_type: Nullable<BookingCreatorType>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub team_member_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub customer_id: Nullable<String>,
}

/// A reservation of one or more team members' time at a location.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct Booking {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub version: Nullable<i32>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub status: Nullable<BookingStatus>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub created_at: Nullable<DateTime<Utc>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub updated_at: Nullable<DateTime<Utc>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub start_at: Nullable<DateTime<Utc>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub location_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub customer_id: Nullable<String>,
    /// Visible to the seller and the customer.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub customer_note: Nullable<String>,
    /// Visible to the seller only.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub seller_note: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub appointment_segments: Nullable<Vec<AppointmentSegment>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub transition_time_minutes: Nullable<i32>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub all_day: Nullable<bool>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub location_type: Nullable<BookingLocationType>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub creator_details: Nullable<BookingCreatorDetails>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub source: Nullable<BookingSource>,
    /// Where the appointment happens when `location_type` is `CUSTOMER_LOCATION`.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub address: Nullable<Address>,
}

impl Booking {
    /// Minutes from the start of the first segment to the end of the last one, including
    /// intermissions and the trailing transition time.
    #[must_use]
    pub fn total_minutes(&self) -> i64 {
        let segments: i64 = self
            .appointment_segments
            .get()
            .map(|segments| {
                segments
                    .iter()
                    .map(|segment| {
                        i64::from(segment.duration_minutes.get().copied().unwrap_or_default())
                            + i64::from(
                                segment.intermission_minutes.get().copied().unwrap_or_default(),
                            )
                    })
                    .sum()
            })
            .unwrap_or_default();
        segments + i64::from(self.transition_time_minutes.get().copied().unwrap_or_default())
    }

    /// When the booking ends, if it has a start time.
    #[must_use]
    pub fn end_at(&self) -> Option<DateTime<Utc>> {
        let start = self.start_at.get()?;
        start.checked_add_signed(TimeDelta::try_minutes(self.total_minutes())?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{FromJson as _, JsonSerialize as _};

    fn booking_json() -> serde_json::Value {
        json!({
            "id": "zkras0xv0xwswx",
            "version": 1,
            "status": "ACCEPTED",
            "created_at": "2020-10-28T15:47:41Z",
            "updated_at": "2020-10-28T15:49:25Z",
            "start_at": "2020-11-26T13:00:00Z",
            "location_id": "LEQHH0YY8B42M",
            "customer_id": "EX2QSVGTZN4K1E5QE1CBFNVQ8M",
            "customer_note": "",
            "seller_note": "",
            "appointment_segments": [{
                "duration_minutes": 60,
                "service_variation_id": "RU3PBTZTK7DXZDQFCJHOK2MC",
                "team_member_id": "TMXUrsBWWcHTt79t",
                "service_variation_version": 1_599_775_456_731_i64,
                "intermission_minutes": 0
            }],
            "transition_time_minutes": 15,
            "all_day": false,
            "location_type": "BUSINESS_LOCATION",
            "creator_details": {
                "creator_type": "TEAM_MEMBER",
                "team_member_id": "TMXUrsBWWcHTt79t"
            },
            "source": "FIRST_PARTY_MERCHANT"
        })
    }

    #[test]
    fn booking_roundtrips_through_json() -> anyhow::Result<()> {
        let json = booking_json();
        let booking = Booking::from_json(json.clone())?;

        assert_eq!(booking.status, Nullable::Value(BookingStatus::Accepted));
        assert_eq!(booking.customer_note, Nullable::Value(String::new()));
        assert_eq!(booking.json_serialize()?, json);
        Ok(())
    }

    #[test]
    fn end_time_includes_transition() -> anyhow::Result<()> {
        let booking = Booking::from_json(booking_json())?;

        assert_eq!(booking.total_minutes(), 75);
        let expected = "2020-11-26T14:15:00Z".parse::<DateTime<Utc>>()?;
        assert_eq!(booking.end_at(), Some(expected));
        Ok(())
    }

    #[test]
    fn end_time_needs_start() {
        let booking = Booking::builder()
            .appointment_segments(vec![
                AppointmentSegment::builder()
                    .team_member_id("TM1")
                    .duration_minutes(30_i32)
                    .build(),
            ])
            .build();

        assert_eq!(booking.total_minutes(), 30);
        assert_eq!(booking.end_at(), None);
    }

    #[test]
    fn segment_requires_team_member() {
        let err = AppointmentSegment::from_json(json!({ "duration_minutes": 30 }))
            .expect_err("team_member_id is required");
        assert!(
            err.to_string().contains("team_member_id"),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn cancelled_statuses() {
        assert!(BookingStatus::CancelledBySeller.is_cancelled(), "seller cancel");
        assert!(!BookingStatus::NoShow.is_cancelled(), "no-show is not a cancellation");
    }
}
