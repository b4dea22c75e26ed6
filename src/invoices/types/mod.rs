use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::Nullable;
use crate::types::{Address, DateTime, Money, NaiveDate, Utc};

pub mod request;
pub mod response;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum InvoiceStatus {
    Draft,
    Unpaid,
    Scheduled,
    PartiallyPaid,
    Paid,
    PartiallyRefunded,
    Refunded,
    Canceled,
    Failed,
    PaymentPending,
    /// Unknown status from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

impl InvoiceStatus {
    /// Whether the invoice can no longer change state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Paid | Self::Refunded | Self::Canceled | Self::Failed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum InvoiceDeliveryMethod {
    Email,
    ShareManually,
    Sms,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum InvoiceRequestType {
    /// The remaining balance. Every invoice has exactly one.
    Balance,
    Deposit,
    Installment,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum InvoiceAutomaticPaymentSource {
    None,
    CardOnFile,
    BankOnFile,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum InvoicePaymentReminderStatus {
    Pending,
    NotApplicable,
    Sent,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum InvoiceCustomFieldPlacement {
    AboveLineItems,
    BelowLineItems,
    #[serde(untagged)]
    Unknown(String),
}

/// The customer an invoice is addressed to.
///
/// Only `customer_id` is writable; Square fills the contact fields from the customer profile.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct InvoiceRecipient {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub customer_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub given_name: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub family_name: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub email_address: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub address: Nullable<Address>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub phone_number: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub company_name: Nullable<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct InvoicePaymentReminder {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub uid: Nullable<String>,
    /// Days relative to the due date; negative means before it.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub relative_scheduled_days: Nullable<i32>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub message: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub status: Nullable<InvoicePaymentReminderStatus>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub sent_at: Nullable<DateTime<Utc>>,
}

/// One payment the customer owes on an invoice: a deposit, an installment or the balance.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct InvoicePaymentRequest {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub uid: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub request_type: Nullable<InvoiceRequestType>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub due_date: Nullable<NaiveDate>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub fixed_amount_requested_money: Nullable<Money>,
    /// Percentage of the order total, as a decimal string such as `"25"`.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub percentage_requested: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub tipping_enabled: Nullable<bool>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub automatic_payment_source: Nullable<InvoiceAutomaticPaymentSource>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub card_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub reminders: Nullable<Vec<InvoicePaymentReminder>>,
    /// Read-only.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub computed_amount_money: Nullable<Money>,
    /// Read-only.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub total_completed_amount_money: Nullable<Money>,
    /// Read-only.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub rounding_adjustment_included_money: Nullable<Money>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct InvoiceAcceptedPaymentMethods {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub card: Nullable<bool>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub square_gift_card: Nullable<bool>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub bank_account: Nullable<bool>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub buy_now_pay_later: Nullable<bool>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub cash_app_pay: Nullable<bool>,
}

/// Seller-defined text shown on the invoice.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct InvoiceCustomField {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub label: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub value: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub placement: Nullable<InvoiceCustomFieldPlacement>,
}

/// An invoice for an order.
///
/// No field is required by the model; Square requires `location_id`, `order_id`,
/// `primary_recipient` and at least one payment request on create, and `version` on update.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct Invoice {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub id: Nullable<String>,
    /// Optimistic concurrency token, incremented on every update.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub version: Nullable<i32>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub location_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub order_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub primary_recipient: Nullable<InvoiceRecipient>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub payment_requests: Nullable<Vec<InvoicePaymentRequest>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub delivery_method: Nullable<InvoiceDeliveryMethod>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub invoice_number: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub title: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub description: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub scheduled_at: Nullable<DateTime<Utc>>,
    /// Read-only.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub public_url: Nullable<String>,
    /// Read-only.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub next_payment_amount_money: Nullable<Money>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub status: Nullable<InvoiceStatus>,
    /// IANA timezone of the location, e.g. `America/Los_Angeles`. Read-only.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub timezone: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub created_at: Nullable<DateTime<Utc>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub updated_at: Nullable<DateTime<Utc>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub accepted_payment_methods: Nullable<InvoiceAcceptedPaymentMethods>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub custom_fields: Nullable<Vec<InvoiceCustomField>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub subscription_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub sale_or_service_date: Nullable<NaiveDate>,
    /// Payment terms shown to the customer (France only).
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub payment_conditions: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub store_payment_method_enabled: Nullable<bool>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::Currency;
    use crate::{FromJson as _, JsonSerialize as _};

    #[test]
    fn payment_request_dates_are_plain_dates() -> anyhow::Result<()> {
        let request = InvoicePaymentRequest::builder()
            .request_type(InvoiceRequestType::Balance)
            .due_date(NaiveDate::from_ymd_opt(2030, 1, 24).expect("valid date"))
            .tipping_enabled(true)
            .build();

        assert_eq!(
            request.json_serialize()?,
            json!({
                "request_type": "BALANCE",
                "due_date": "2030-01-24",
                "tipping_enabled": true
            })
        );
        Ok(())
    }

    #[test]
    fn invoice_roundtrips_through_json() -> anyhow::Result<()> {
        let json = json!({
            "id": "inv:0-ChCHu2mZEabLeeHahQnXDjZQECY",
            "version": 0,
            "location_id": "ES0RJRZYEC39A",
            "order_id": "CAISENgvlJ6jLWAzERDzjyHVybY",
            "primary_recipient": { "customer_id": "JDKYHBWT1D4F8MFH63DBMEN8Y4" },
            "payment_requests": [{
                "uid": "2da7964f-f3d2-4f43-81e8-5aa220bf3355",
                "request_type": "BALANCE",
                "due_date": "2030-01-24",
                "computed_amount_money": { "amount": 10000, "currency": "USD" },
                "reminders": [{
                    "uid": "beebd363-e47f-4075-8785-c235aaa7df11",
                    "relative_scheduled_days": -1,
                    "message": "Your invoice is due tomorrow",
                    "status": "PENDING"
                }]
            }],
            "delivery_method": "EMAIL",
            "status": "DRAFT",
            "timezone": "America/Los_Angeles",
            "custom_fields": [{ "label": "Event Reference", "value": "Ref. #1234", "placement": "ABOVE_LINE_ITEMS" }],
            "sale_or_service_date": "2030-01-24",
            "store_payment_method_enabled": false
        });

        let invoice = Invoice::from_json(json.clone())?;
        assert_eq!(invoice.status, Nullable::Value(InvoiceStatus::Draft));
        let amount = invoice
            .payment_requests
            .get()
            .and_then(|requests| requests.first())
            .and_then(|request| request.computed_amount_money.get())
            .cloned();
        assert_eq!(amount, Some(Money::new(10000, Currency::Usd)));

        assert_eq!(invoice.json_serialize()?, json);
        Ok(())
    }

    #[test]
    fn terminal_statuses() {
        assert!(InvoiceStatus::Paid.is_terminal(), "paid is final");
        assert!(!InvoiceStatus::PartiallyPaid.is_terminal(), "more payments due");
        assert!(
            !InvoiceStatus::Unknown("ARCHIVED".to_owned()).is_terminal(),
            "unknown statuses are not assumed final"
        );
    }
}
