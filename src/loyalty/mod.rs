//! Loyalty event models.
//!
//! **Feature flag:** `loyalty` (required to use this module)
//!
//! Loyalty events are read-only records of point and reward changes on a loyalty account. They
//! are retrieved with `POST /v2/loyalty/events/search`, whose body is a
//! [`SearchLoyaltyEventsRequest`](types::request::SearchLoyaltyEventsRequest) combining any of
//! the filters in [`LoyaltyEventFilter`](types::request::LoyaltyEventFilter).

pub mod types;
