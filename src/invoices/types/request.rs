//! Request types for the invoice endpoints.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::Invoice;
use crate::error::Error;
use crate::json::NullHandling;
use crate::types::{BoundedIntError, validate_bound};
use crate::{FromJson as _, JsonSerialize as _, Nullable, Result};

/// Body of `POST /v2/invoices`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct CreateInvoiceRequest {
    pub invoice: Invoice,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub idempotency_key: Nullable<String>,
}

impl CreateInvoiceRequest {
    #[must_use]
    pub fn new(invoice: Invoice) -> Self {
        Self {
            invoice,
            idempotency_key: Nullable::Absent,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let invoice = &self.invoice;
        if invoice.location_id.get().is_none_or(String::is_empty) {
            return Err(Error::validation("invoice.location_id is required"));
        }
        if invoice.order_id.get().is_none_or(String::is_empty) {
            return Err(Error::validation("invoice.order_id is required"));
        }
        if invoice.payment_requests.get().is_none_or(Vec::is_empty) {
            return Err(Error::validation(
                "invoice.payment_requests must contain at least one payment request",
            ));
        }
        Ok(())
    }
}

/// Body of `PUT /v2/invoices/{invoice_id}`.
///
/// Square ignores `null` for most invoice fields; names listed in `fields_to_clear` are the
/// reliable way to remove a value.
///
/// # Example
///
/// ```
/// use square_models_sdk::Nullable;
/// use square_models_sdk::invoices::types::Invoice;
/// use square_models_sdk::invoices::types::request::UpdateInvoiceRequest;
///
/// let invoice = Invoice::builder()
///     .version(3_i32)
///     .title("Spring cleaning")
///     .description(Nullable::Null)
///     .build();
///
/// let request = UpdateInvoiceRequest::new(invoice).nulls_to_fields_to_clear()?;
///
/// assert_eq!(request.invoice.description, Nullable::Absent);
/// assert_eq!(
///     request.fields_to_clear.get(),
///     Some(&vec!["description".to_owned()])
/// );
/// # Ok::<(), square_models_sdk::error::Error>(())
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct UpdateInvoiceRequest {
    pub invoice: Invoice,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub idempotency_key: Nullable<String>,
    /// Top-level invoice field names, or `payment_requests[uid].field` paths, to remove.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub fields_to_clear: Nullable<Vec<String>>,
}

impl UpdateInvoiceRequest {
    #[must_use]
    pub fn new(invoice: Invoice) -> Self {
        Self {
            invoice,
            idempotency_key: Nullable::Absent,
            fields_to_clear: Nullable::Absent,
        }
    }

    /// Adds `field` to `fields_to_clear` unless it is already listed.
    pub fn clear_field<S: Into<String>>(&mut self, field: S) {
        let field = field.into();
        match self.fields_to_clear.get_mut() {
            Some(fields) => {
                if !fields.contains(&field) {
                    fields.push(field);
                }
            }
            None => self.fields_to_clear.set(vec![field]),
        }
    }

    /// Moves every top-level invoice field set to explicit `null` into `fields_to_clear`.
    ///
    /// The moved fields become absent on the invoice, so the body carries each removal exactly
    /// once. Nulls nested inside objects are left in place.
    pub fn nulls_to_fields_to_clear(mut self) -> Result<Self> {
        let mut map = self.invoice.to_json_map(NullHandling::Preserve)?;
        let cleared: Vec<String> = map
            .iter()
            .filter(|(_, value)| value.is_null())
            .map(|(key, _)| key.clone())
            .collect();

        if cleared.is_empty() {
            return Ok(self);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(fields = ?cleared, "moving null invoice fields to fields_to_clear");

        for key in &cleared {
            map.remove(key);
        }
        self.invoice = Invoice::from_json(Value::Object(map))?;
        for key in cleared {
            self.clear_field(key);
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.invoice.version.get().is_none() {
            return Err(Error::validation("invoice.version is required on update"));
        }
        if let Some(fields) = self.fields_to_clear.get()
            && let Some(empty) = fields.iter().position(String::is_empty)
        {
            return Err(Error::validation(format!(
                "fields_to_clear[{empty}] must not be empty"
            )));
        }
        Ok(())
    }
}

/// Body of `POST /v2/invoices/{invoice_id}/publish`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct PublishInvoiceRequest {
    /// Must match the current version of the invoice.
    pub version: i32,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub idempotency_key: Nullable<String>,
}

/// Query parameters for `GET /v2/invoices`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct ListInvoicesRequest {
    #[builder(into)]
    pub location_id: String,
    #[builder(into)]
    pub cursor: Option<String>,
    /// Page size (1-200, default: 100).
    #[builder(with = |v: i32| -> std::result::Result<_, BoundedIntError> { validate_bound(v, 1, 200, "limit") })]
    pub limit: Option<i32>,
}
