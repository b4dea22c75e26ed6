#![cfg_attr(doc, doc = include_str!("../README.md"))]

#[cfg(feature = "bookings")]
pub mod bookings;
#[cfg(feature = "custom_attributes")]
pub mod custom_attributes;
pub mod error;
#[cfg(feature = "gift_cards")]
pub mod gift_cards;
#[cfg(feature = "invoices")]
pub mod invoices;
pub mod json;
#[cfg(feature = "loyalty")]
pub mod loyalty;
pub mod nullable;
#[cfg(feature = "payouts")]
pub mod payouts;
pub(crate) mod serde_helpers;
pub mod types;

use serde::Serialize;

use crate::error::Error;
pub use crate::json::{FromJson, JsonSerialize};
pub use crate::nullable::Nullable;

pub type Result<T> = std::result::Result<T, Error>;

/// Square API version the models in this crate mirror, sent as the `Square-Version` header.
pub const SQUARE_VERSION: &str = "2024-10-17";

/// Trait for converting list request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string.
/// Arrays are serialized as repeated keys (`key=val1&key=val2`).
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    fn query_params(&self) -> String {
        let params = serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{params}")
        }
    }

    /// Like [`query_params`](Self::query_params), but surfaces encoding failures.
    fn try_query_params(&self) -> Result<String> {
        let params = serde_html_form::to_string(self)?;
        Ok(if params.is_empty() {
            String::new()
        } else {
            format!("?{params}")
        })
    }
}

impl<T: Serialize> ToQueryParams for T {}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_with::skip_serializing_none;

    use super::*;

    #[skip_serializing_none]
    #[derive(Serialize, Default)]
    struct Query {
        cursor: Option<String>,
        limit: Option<i32>,
    }

    #[test]
    fn empty_query_has_no_question_mark() {
        assert_eq!(Query::default().query_params(), "");
    }

    #[test]
    fn query_params_are_encoded() {
        let query = Query {
            cursor: Some("a b".to_owned()),
            limit: Some(10),
        };
        assert_eq!(query.query_params(), "?cursor=a+b&limit=10");
        assert_eq!(
            query.try_query_params().expect("encodable"),
            "?cursor=a+b&limit=10"
        );
    }
}
