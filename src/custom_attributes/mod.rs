//! Custom attribute models, shared by every resource that supports seller-defined attributes
//! (customers, bookings, locations, merchants, orders).
//!
//! **Feature flag:** `custom_attributes` (required to use this module)
//!
//! A custom attribute's `value` is free-form JSON. Sending `"value": null` clears it, which
//! only works when explicit nulls are kept on the wire:
//!
//! ```
//! use square_models_sdk::JsonSerialize as _;
//! use square_models_sdk::custom_attributes::types::CustomAttribute;
//! use square_models_sdk::json::{NullHandling, SerializeOptions};
//!
//! let mut attribute = CustomAttribute::builder().version(4_i32).build();
//! attribute.clear_value();
//!
//! let body = attribute.json_serialize()?;
//! assert_eq!(body, serde_json::json!({ "value": null, "version": 4 }));
//!
//! // The legacy null filter turns the clear into a no-op.
//! let legacy = attribute.json_serialize_with(
//!     &SerializeOptions::builder().nulls(NullHandling::Strip).build(),
//! )?;
//! assert_eq!(legacy, serde_json::json!({ "version": 4 }));
//! # Ok::<(), square_models_sdk::error::Error>(())
//! ```
//!
//! ## Modelled Endpoints
//!
//! | Endpoint | Method | Request | Response |
//! |----------|--------|---------|----------|
//! | `/v2/{resource}/{id}/custom-attributes/{key}` | POST | [`UpsertCustomAttributeRequest`](types::request::UpsertCustomAttributeRequest) | [`UpsertCustomAttributeResponse`](types::response::UpsertCustomAttributeResponse) |

pub mod types;
