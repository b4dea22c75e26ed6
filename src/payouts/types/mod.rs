use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::Nullable;
use crate::types::{DateTime, Money, NaiveDate, Utc};

pub mod request;
pub mod response;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum PayoutStatus {
    Sent,
    Failed,
    Paid,
    /// Unknown status from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum PayoutType {
    /// Settled in a daily batch.
    Batch,
    /// An instant transfer.
    Simple,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum DestinationType {
    BankAccount,
    Card,
    SquareBalance,
    SquareStoredBalance,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum PayoutFeeType {
    TransferFee,
    TaxOnTransferFee,
    #[serde(untagged)]
    Unknown(String),
}

/// The kind of balance activity a payout entry records.
///
/// Square adds activity types regularly; anything not listed lands in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ActivityType {
    Adjustment,
    AppFeeRefund,
    AppFeeRevenue,
    AutomaticSavings,
    AutomaticSavingsReversed,
    Charge,
    DepositFee,
    DepositFeeReversed,
    Dispute,
    Escheatment,
    Fee,
    FreeProcessing,
    HoldAdjustment,
    InitialBalanceChange,
    MoneyTransfer,
    MoneyTransferReversal,
    OpenDispute,
    Other,
    OtherAdjustment,
    PaidServiceFee,
    PaidServiceFeeRefund,
    RedemptionCode,
    Refund,
    ReleaseAdjustment,
    ReserveHold,
    ReserveRelease,
    ReturnedPayout,
    SquareCapitalPayment,
    SquareCapitalReversedPayment,
    SubscriptionFee,
    SubscriptionFeePaidRefund,
    SubscriptionFeeRefund,
    TaxOnFee,
    ThirdPartyFee,
    ThirdPartyFeeRefund,
    Payout,
    #[serde(untagged)]
    Unknown(String),
}

/// Where a payout was sent.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct Destination {
    #[builder(default, into)]
    #[serde(rename = "type", default, skip_serializing_if = "Nullable::is_omitted")]
    pub destination_type: Nullable<DestinationType>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub id: Nullable<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct PayoutFee {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub amount_money: Nullable<Money>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub effective_at: Nullable<DateTime<Utc>>,
    #[builder(default, into)]
    #[serde(rename = "type", default, skip_serializing_if = "Nullable::is_omitted")]
    pub fee_type: Nullable<PayoutFeeType>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct Payout {
    pub id: String,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub status: Nullable<PayoutStatus>,
    pub location_id: String,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub created_at: Nullable<DateTime<Utc>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub updated_at: Nullable<DateTime<Utc>>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub amount_money: Nullable<Money>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub destination: Nullable<Destination>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub version: Nullable<i32>,
    #[builder(default, into)]
    #[serde(rename = "type", default, skip_serializing_if = "Nullable::is_omitted")]
    pub payout_type: Nullable<PayoutType>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub payout_fee: Nullable<Vec<PayoutFee>>,
    /// Calendar date the funds reach the destination, in the location's timezone.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub arrival_date: Nullable<NaiveDate>,
    /// Reference shown on the seller's bank statement.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub end_to_end_id: Nullable<String>,
}

impl Payout {
    #[must_use]
    pub fn new<S: Into<String>>(id: S, location_id: S) -> Self {
        Self {
            id: id.into(),
            status: Nullable::Absent,
            location_id: location_id.into(),
            created_at: Nullable::Absent,
            updated_at: Nullable::Absent,
            amount_money: Nullable::Absent,
            destination: Nullable::Absent,
            version: Nullable::Absent,
            payout_type: Nullable::Absent,
            payout_fee: Nullable::Absent,
            arrival_date: Nullable::Absent,
            end_to_end_id: Nullable::Absent,
        }
    }

    /// Sum of `payout_fee` amounts, in the payout's currency.
    ///
    /// `None` when the payout carries no fee list, has no currency, or a fee is in another
    /// currency.
    #[must_use]
    pub fn total_fees(&self) -> Option<Money> {
        let fees = self.payout_fee.get()?;
        let currency = self
            .amount_money
            .get()
            .and_then(|money| money.currency.get())
            .cloned()?;

        let mut total = 0_i64;
        for money in fees.iter().filter_map(|fee| fee.amount_money.get()) {
            if money.currency.get() != Some(&currency) {
                return None;
            }
            total = total.checked_add(money.amount.get().copied().unwrap_or_default())?;
        }
        Some(Money::new(total, currency))
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct PaymentDetails {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub payment_id: Nullable<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct RefundDetails {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub payment_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub refund_id: Nullable<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct DisputeDetails {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub payment_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub dispute_id: Nullable<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct OtherDetails {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub source: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub description: Nullable<String>,
}

/// One balance activity settled by a payout.
///
/// `net_amount_money` is `gross_amount_money` minus `fee_amount_money`. At most one of the
/// `type_*_details` fields is set, matching `entry_type`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct PayoutEntry {
    pub id: String,
    pub payout_id: String,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub effective_at: Nullable<DateTime<Utc>>,
    #[builder(default, into)]
    #[serde(rename = "type", default, skip_serializing_if = "Nullable::is_omitted")]
    pub entry_type: Nullable<ActivityType>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub gross_amount_money: Nullable<Money>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub fee_amount_money: Nullable<Money>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub net_amount_money: Nullable<Money>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub type_charge_details: Nullable<PaymentDetails>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub type_fee_details: Nullable<PaymentDetails>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub type_adjustment_details: Nullable<PaymentDetails>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub type_refund_details: Nullable<RefundDetails>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub type_dispute_details: Nullable<DisputeDetails>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub type_other_details: Nullable<OtherDetails>,
}

impl PayoutEntry {
    /// The payment this entry relates to, whichever details field carries it.
    #[must_use]
    pub fn payment_id(&self) -> Option<&str> {
        self.type_charge_details
            .get()
            .and_then(|details| details.payment_id.get())
            .or_else(|| {
                self.type_fee_details
                    .get()
                    .and_then(|details| details.payment_id.get())
            })
            .or_else(|| {
                self.type_adjustment_details
                    .get()
                    .and_then(|details| details.payment_id.get())
            })
            .or_else(|| {
                self.type_refund_details
                    .get()
                    .and_then(|details| details.payment_id.get())
            })
            .or_else(|| {
                self.type_dispute_details
                    .get()
                    .and_then(|details| details.payment_id.get())
            })
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::Currency;
    use crate::{FromJson as _, JsonSerialize as _};

    fn payout_json() -> serde_json::Value {
        json!({
            "id": "po_b345d2c7-90b3-4f0b-a2aa-df1def7f8afc",
            "status": "PAID",
            "location_id": "L88917AVBK2S5",
            "created_at": "2022-03-29T16:12:31Z",
            "updated_at": "2022-03-30T01:07:22Z",
            "amount_money": { "amount": 6259, "currency": "USD" },
            "destination": { "type": "BANK_ACCOUNT", "id": "ccof:ZPp3oedR3AeEUNd3z7" },
            "version": 2,
            "type": "BATCH",
            "payout_fee": [
                { "amount_money": { "amount": 95, "currency": "USD" }, "type": "TRANSFER_FEE" },
                { "amount_money": { "amount": 10, "currency": "USD" }, "type": "TAX_ON_TRANSFER_FEE" }
            ],
            "arrival_date": "2022-03-30",
            "end_to_end_id": "L2100000005"
        })
    }

    #[test]
    fn payout_roundtrips_through_json() -> anyhow::Result<()> {
        let json = payout_json();
        let payout = Payout::from_json(json.clone())?;

        assert_eq!(payout.payout_type, Nullable::Value(PayoutType::Batch));
        assert_eq!(
            payout.arrival_date,
            Nullable::Value(NaiveDate::from_ymd_opt(2022, 3, 30).expect("valid date"))
        );
        assert_eq!(payout.json_serialize()?, json);
        Ok(())
    }

    #[test]
    fn total_fees_in_payout_currency() -> anyhow::Result<()> {
        let payout = Payout::from_json(payout_json())?;
        assert_eq!(payout.total_fees(), Some(Money::new(105, Currency::Usd)));

        let mut mixed = payout;
        if let Some(fees) = mixed.payout_fee.get_mut() {
            fees.push(
                PayoutFee::builder()
                    .amount_money(Money::new(1, Currency::Cad))
                    .build(),
            );
        }
        assert_eq!(mixed.total_fees(), None);
        Ok(())
    }

    #[test]
    fn no_fee_list_means_no_total() {
        let payout = Payout::new("po_1", "L1");
        assert_eq!(payout.total_fees(), None);
    }

    #[test]
    fn entry_payment_id_from_any_details() -> anyhow::Result<()> {
        let entry = PayoutEntry::from_json(json!({
            "id": "poe_ZQWcw41d0SGJS6IWd4cSi8mKHk",
            "payout_id": "po_b345d2c7-90b3-4f0b-a2aa-df1def7f8afc",
            "effective_at": "2021-12-14T23:31:49Z",
            "type": "REFUND",
            "gross_amount_money": { "amount": -50, "currency": "USD" },
            "fee_amount_money": { "amount": -2, "currency": "USD" },
            "net_amount_money": { "amount": -48, "currency": "USD" },
            "type_refund_details": {
                "payment_id": "HVdG62HeMlti8YYf94oxrN",
                "refund_id": "HVdG62HeMlti8YYf94oxrN_dR8Fviho"
            }
        }))?;

        assert_eq!(entry.entry_type, Nullable::Value(ActivityType::Refund));
        assert_eq!(entry.payment_id(), Some("HVdG62HeMlti8YYf94oxrN"));
        Ok(())
    }

    #[test]
    fn new_activity_types_are_kept() -> anyhow::Result<()> {
        let entry = PayoutEntry::from_json(json!({
            "id": "poe_1",
            "payout_id": "po_1",
            "type": "BALANCE_FOLDERS_TRANSFER"
        }))?;

        assert_eq!(
            entry.entry_type,
            Nullable::Value(ActivityType::Unknown("BALANCE_FOLDERS_TRANSFER".to_owned()))
        );
        assert_eq!(entry.payment_id(), None);
        Ok(())
    }
}
