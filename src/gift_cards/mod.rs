//! Gift card and gift card activity models.
//!
//! **Feature flag:** `gift_cards` (required to use this module)
//!
//! A [`GiftCard`](types::GiftCard) is the card itself; every balance or state change is recorded
//! as a [`GiftCardActivity`](types::GiftCardActivity) whose `type` selects which of its
//! `*_activity_details` fields carries the specifics.
//!
//! ## Modelled Endpoints
//!
//! | Endpoint | Method | Request | Response |
//! |----------|--------|---------|----------|
//! | `/v2/gift-cards/activities` | POST | [`CreateGiftCardActivityRequest`](types::request::CreateGiftCardActivityRequest) | [`CreateGiftCardActivityResponse`](types::response::CreateGiftCardActivityResponse) |
//! | `/v2/gift-cards/activities` | GET | [`ListGiftCardActivitiesRequest`](types::request::ListGiftCardActivitiesRequest) | [`ListGiftCardActivitiesResponse`](types::response::ListGiftCardActivitiesResponse) |
//!
//! # Example
//!
//! ```
//! use square_models_sdk::JsonSerialize as _;
//! use square_models_sdk::gift_cards::types::request::CreateGiftCardActivityRequest;
//! use square_models_sdk::gift_cards::types::{
//!     GiftCardActivity, GiftCardActivityLoad, GiftCardActivityType,
//! };
//! use square_models_sdk::types::{Currency, Money};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut activity = GiftCardActivity::new(GiftCardActivityType::Load, "81FN9BNFZTKS4");
//! activity.gift_card_id.set("gftc:6d55a72470d940c6ba09c0ab8ad08d20".to_owned());
//! activity.load_activity_details.set(
//!     GiftCardActivityLoad::builder()
//!         .amount_money(Money::new(1000, Currency::Usd))
//!         .order_id("jJNGHm4gLI6XkFbwtiSLqK72KkAZY")
//!         .build(),
//! );
//!
//! let request = CreateGiftCardActivityRequest::new("U16kfr-kA70er-q4Rsym-7U7NnY", activity);
//! request.validate()?;
//! let body = request.to_json_string()?;
//! assert!(body.contains(r#""type":"LOAD""#));
//! # Ok(())
//! # }
//! ```

pub mod types;
