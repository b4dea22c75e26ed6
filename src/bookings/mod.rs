//! Booking models.
//!
//! **Feature flag:** `bookings` (required to use this module)
//!
//! ## Modelled Endpoints
//!
//! | Endpoint | Method | Request | Response |
//! |----------|--------|---------|----------|
//! | `/v2/bookings` | GET | [`ListBookingsRequest`](types::request::ListBookingsRequest) | [`ListBookingsResponse`](types::response::ListBookingsResponse) |
//! | `/v2/bookings` | POST | [`CreateBookingRequest`](types::request::CreateBookingRequest) | [`CreateBookingResponse`](types::response::CreateBookingResponse) |
//! | `/v2/bookings/{booking_id}` | PUT | [`UpdateBookingRequest`](types::request::UpdateBookingRequest) | [`UpdateBookingResponse`](types::response::UpdateBookingResponse) |
//! | `/v2/bookings/{booking_id}/cancel` | POST | [`CancelBookingRequest`](types::request::CancelBookingRequest) | [`CancelBookingResponse`](types::response::CancelBookingResponse) |

pub mod types;
