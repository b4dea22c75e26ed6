//! Payout models: transfers of funds from a Square balance to a seller's bank account or card.
//!
//! **Feature flag:** `payouts` (required to use this module)
//!
//! ## Modelled Endpoints
//!
//! | Endpoint | Method | Request | Response |
//! |----------|--------|---------|----------|
//! | `/v2/payouts` | GET | [`ListPayoutsRequest`](types::request::ListPayoutsRequest) | [`ListPayoutsResponse`](types::response::ListPayoutsResponse) |
//! | `/v2/payouts/{payout_id}` | GET | - | [`GetPayoutResponse`](types::response::GetPayoutResponse) |
//! | `/v2/payouts/{payout_id}/payout-entries` | GET | [`ListPayoutEntriesRequest`](types::request::ListPayoutEntriesRequest) | [`ListPayoutEntriesResponse`](types::response::ListPayoutEntriesResponse) |

pub mod types;
