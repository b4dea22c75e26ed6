#![cfg(feature = "bookings")]

use serde_json::json;
use square_models_sdk::bookings::types::request::{
    CancelBookingRequest, CreateBookingRequest, ListBookingsRequest,
};
use square_models_sdk::bookings::types::response::{CancelBookingResponse, ListBookingsResponse};
use square_models_sdk::bookings::types::{AppointmentSegment, Booking, BookingStatus};
use square_models_sdk::types::{DateTime, Utc};
use square_models_sdk::{FromJson as _, JsonSerialize as _, ToQueryParams as _};

#[test]
fn create_body() -> anyhow::Result<()> {
    let start: DateTime<Utc> = "2030-11-26T13:00:00Z".parse()?;
    let mut segment = AppointmentSegment::new("TMXUrsBWWcHTt79t");
    segment.duration_minutes.set(60_i32);
    segment.service_variation_id.set("RU3PBTZTK7DXZDQFCJHOK2MC".to_owned());
    segment.service_variation_version.set(1_599_775_456_731_i64);

    let request = CreateBookingRequest::builder()
        .idempotency_key("4b0e2e7c-6d1a-4c1d-9e63-3a8f1f1e2b3c")
        .booking(
            Booking::builder()
                .start_at(start)
                .location_id("SNTR5190QMFGM")
                .customer_id("EX2QSVGTZN4K1E5QE1CBFNVQ8M")
                .customer_note("Window seat please")
                .appointment_segments(vec![segment])
                .build(),
        )
        .build();
    request.validate()?;

    assert_eq!(
        request.json_serialize()?,
        json!({
            "idempotency_key": "4b0e2e7c-6d1a-4c1d-9e63-3a8f1f1e2b3c",
            "booking": {
                "start_at": "2030-11-26T13:00:00Z",
                "location_id": "SNTR5190QMFGM",
                "customer_id": "EX2QSVGTZN4K1E5QE1CBFNVQ8M",
                "customer_note": "Window seat please",
                "appointment_segments": [{
                    "team_member_id": "TMXUrsBWWcHTt79t",
                    "duration_minutes": 60,
                    "service_variation_id": "RU3PBTZTK7DXZDQFCJHOK2MC",
                    "service_variation_version": 1_599_775_456_731_i64
                }]
            }
        })
    );
    Ok(())
}

#[test]
fn cancel_with_version() -> anyhow::Result<()> {
    let request = CancelBookingRequest::builder().booking_version(1_i32).build();
    assert_eq!(request.json_serialize()?, json!({ "booking_version": 1 }));

    let response = CancelBookingResponse::from_json(json!({
        "booking": {
            "id": "zkras0xv0xwswx",
            "version": 2,
            "status": "CANCELLED_BY_SELLER"
        },
        "errors": []
    }))?;
    let status = response
        .booking
        .get()
        .and_then(|booking| booking.status.get())
        .expect("status present");
    assert!(status.is_cancelled(), "cancelled by seller");
    assert_eq!(response.errors.get().map(Vec::is_empty), Some(true));
    Ok(())
}

#[test]
fn list_query_and_response() -> anyhow::Result<()> {
    let request = ListBookingsRequest::builder()
        .team_member_id("TMXUrsBWWcHTt79t")
        .limit(50)?
        .build();
    assert_eq!(request.query_params(), "?limit=50&team_member_id=TMXUrsBWWcHTt79t");

    let response = ListBookingsResponse::from_json(json!({
        "bookings": [{ "id": "a", "status": "PENDING" }, { "id": "b", "status": "NO_SHOW" }],
        "cursor": null
    }))?;
    assert!(response.cursor.is_null(), "explicit null cursor");
    let statuses: Vec<_> = response
        .bookings
        .get()
        .expect("bookings present")
        .iter()
        .filter_map(|booking| booking.status.get().cloned())
        .collect();
    assert_eq!(statuses, vec![BookingStatus::Pending, BookingStatus::NoShow]);
    Ok(())
}
