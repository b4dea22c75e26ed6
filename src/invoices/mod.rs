//! Invoice models.
//!
//! **Feature flag:** `invoices` (required to use this module)
//!
//! Updates to an invoice are sparse: only the fields present in the request body change. To
//! clear a field, either list its name in `fields_to_clear` or set it to explicit `null` and let
//! [`UpdateInvoiceRequest::nulls_to_fields_to_clear`](types::request::UpdateInvoiceRequest::nulls_to_fields_to_clear)
//! move it there.
//!
//! ## Modelled Endpoints
//!
//! | Endpoint | Method | Request | Response |
//! |----------|--------|---------|----------|
//! | `/v2/invoices` | GET | [`ListInvoicesRequest`](types::request::ListInvoicesRequest) | [`ListInvoicesResponse`](types::response::ListInvoicesResponse) |
//! | `/v2/invoices` | POST | [`CreateInvoiceRequest`](types::request::CreateInvoiceRequest) | [`CreateInvoiceResponse`](types::response::CreateInvoiceResponse) |
//! | `/v2/invoices/{invoice_id}` | PUT | [`UpdateInvoiceRequest`](types::request::UpdateInvoiceRequest) | [`UpdateInvoiceResponse`](types::response::UpdateInvoiceResponse) |
//! | `/v2/invoices/{invoice_id}/publish` | POST | [`PublishInvoiceRequest`](types::request::PublishInvoiceRequest) | [`PublishInvoiceResponse`](types::response::PublishInvoiceResponse) |

pub mod types;
