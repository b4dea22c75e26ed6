use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::Nullable;
use crate::types::{DateTime, Money, Utc};

pub mod request;
pub mod response;

/// Whether the card exists physically or only as a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum GiftCardType {
    Physical,
    Digital,
    /// Unknown card type from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

/// Who generated the gift card account number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum GiftCardGanSource {
    Square,
    Other,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum GiftCardState {
    Active,
    Deactivated,
    Blocked,
    Pending,
    #[serde(untagged)]
    Unknown(String),
}

/// Selects which `*_activity_details` field of a [`GiftCardActivity`] is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum GiftCardActivityType {
    Activate,
    Load,
    Redeem,
    ClearBalance,
    Deactivate,
    AdjustIncrement,
    AdjustDecrement,
    Refund,
    UnlinkedActivityRefund,
    Import,
    Block,
    Unblock,
    ImportReversal,
    TransferBalanceFrom,
    TransferBalanceTo,
    /// Unknown activity type from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum GiftCardActivityRedeemStatus {
    Pending,
    Completed,
    Canceled,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ClearBalanceReason {
    SuspiciousActivity,
    ReuseGiftcard,
    UnknownReason,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum DeactivateReason {
    SuspiciousActivity,
    UnknownReason,
    ChargebackDeactivate,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum AdjustIncrementReason {
    Complimentary,
    SupportIssue,
    TransactionVoided,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum AdjustDecrementReason {
    SuspiciousActivity,
    BalanceAccidentallyIncreased,
    SupportIssue,
    PurchaseWasRefunded,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum BlockReason {
    ChargebackBlock,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum UnblockReason {
    ChargebackUnblock,
    #[serde(untagged)]
    Unknown(String),
}

/// A gift card.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct GiftCard {
    /// Square-assigned ID. Read-only.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub id: Nullable<String>,
    #[serde(rename = "type")]
    pub card_type: GiftCardType,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub gan_source: Nullable<GiftCardGanSource>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub state: Nullable<GiftCardState>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub balance_money: Nullable<Money>,
    /// Gift card account number.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub gan: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub created_at: Nullable<DateTime<Utc>>,
    /// Customer profiles the card is linked to.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub customer_ids: Nullable<Vec<String>>,
}

impl GiftCard {
    #[must_use]
    pub fn new(card_type: GiftCardType) -> Self {
        Self::builder().card_type(card_type).build()
    }
}

/// Details of an `ACTIVATE` activity.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct GiftCardActivityActivate {
    /// Required unless the card is activated through an order.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub amount_money: Nullable<Money>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub order_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub line_item_uid: Nullable<String>,
    /// Client-supplied reference, e.g. an ID in a third-party system.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub reference_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub buyer_payment_instrument_ids: Nullable<Vec<String>>,
}

/// Details of a `LOAD` activity.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct GiftCardActivityLoad {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub amount_money: Nullable<Money>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub order_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub line_item_uid: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub reference_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub buyer_payment_instrument_ids: Nullable<Vec<String>>,
}

/// Details of a `REDEEM` activity.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct GiftCardActivityRedeem {
    pub amount_money: Money,
    /// Set by Square when the redemption was part of a payment. Read-only.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub payment_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub reference_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub status: Nullable<GiftCardActivityRedeemStatus>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct GiftCardActivityClearBalance {
    pub reason: ClearBalanceReason,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct GiftCardActivityDeactivate {
    pub reason: DeactivateReason,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct GiftCardActivityAdjustIncrement {
    pub amount_money: Money,
    pub reason: AdjustIncrementReason,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct GiftCardActivityAdjustDecrement {
    pub amount_money: Money,
    pub reason: AdjustDecrementReason,
}

/// Details of a `REFUND` activity, linked to an earlier redemption.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct GiftCardActivityRefund {
    /// The `REDEEM` activity being refunded.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub redeem_activity_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub amount_money: Nullable<Money>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub reference_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub payment_id: Nullable<String>,
}

/// Details of an `UNLINKED_ACTIVITY_REFUND` activity: a refund with no matching redemption.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct GiftCardActivityUnlinkedActivityRefund {
    pub amount_money: Money,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub reference_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub payment_id: Nullable<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct GiftCardActivityImport {
    pub amount_money: Money,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct GiftCardActivityBlock {
    pub reason: BlockReason,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct GiftCardActivityUnblock {
    pub reason: UnblockReason,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct GiftCardActivityImportReversal {
    pub amount_money: Money,
}

/// Details of a `TRANSFER_BALANCE_TO` activity, recorded on the receiving card.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct GiftCardActivityTransferBalanceTo {
    pub transfer_from_gift_card_id: String,
    pub amount_money: Money,
}

/// Details of a `TRANSFER_BALANCE_FROM` activity, recorded on the sending card.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct GiftCardActivityTransferBalanceFrom {
    pub transfer_to_gift_card_id: String,
    pub amount_money: Money,
}

/// An action that changes a gift card's balance or state.
///
/// Exactly one `*_activity_details` field, the one matching [`activity_type`](Self::activity_type),
/// should be present; [`details_match_type`](Self::details_match_type) checks this.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct GiftCardActivity {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub id: Nullable<String>,
    #[serde(rename = "type")]
    pub activity_type: GiftCardActivityType,
    pub location_id: String,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub created_at: Nullable<DateTime<Utc>>,
    /// Either this or `gift_card_gan` identifies the card on create.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub gift_card_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub gift_card_gan: Nullable<String>,
    /// Balance after the activity. Read-only.
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub gift_card_balance_money: Nullable<Money>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub load_activity_details: Nullable<GiftCardActivityLoad>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub activate_activity_details: Nullable<GiftCardActivityActivate>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub redeem_activity_details: Nullable<GiftCardActivityRedeem>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub clear_balance_activity_details: Nullable<GiftCardActivityClearBalance>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub deactivate_activity_details: Nullable<GiftCardActivityDeactivate>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub adjust_increment_activity_details: Nullable<GiftCardActivityAdjustIncrement>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub adjust_decrement_activity_details: Nullable<GiftCardActivityAdjustDecrement>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub refund_activity_details: Nullable<GiftCardActivityRefund>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub unlinked_activity_refund_activity_details:
        Nullable<GiftCardActivityUnlinkedActivityRefund>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub import_activity_details: Nullable<GiftCardActivityImport>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub block_activity_details: Nullable<GiftCardActivityBlock>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub unblock_activity_details: Nullable<GiftCardActivityUnblock>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub import_reversal_activity_details: Nullable<GiftCardActivityImportReversal>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub transfer_balance_to_activity_details: Nullable<GiftCardActivityTransferBalanceTo>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub transfer_balance_from_activity_details: Nullable<GiftCardActivityTransferBalanceFrom>,
}

impl GiftCardActivity {
    #[must_use]
    pub fn new<S: Into<String>>(activity_type: GiftCardActivityType, location_id: S) -> Self {
        Self::builder()
            .activity_type(activity_type)
            .location_id(location_id)
            .build()
    }

    /// JSON keys of the details fields that hold a value.
    #[must_use]
    pub fn populated_details(&self) -> Vec<&'static str> {
        [
            ("load_activity_details", self.load_activity_details.get().is_some()),
            ("activate_activity_details", self.activate_activity_details.get().is_some()),
            ("redeem_activity_details", self.redeem_activity_details.get().is_some()),
            (
                "clear_balance_activity_details",
                self.clear_balance_activity_details.get().is_some(),
            ),
            (
                "deactivate_activity_details",
                self.deactivate_activity_details.get().is_some(),
            ),
            (
                "adjust_increment_activity_details",
                self.adjust_increment_activity_details.get().is_some(),
            ),
            (
                "adjust_decrement_activity_details",
                self.adjust_decrement_activity_details.get().is_some(),
            ),
            ("refund_activity_details", self.refund_activity_details.get().is_some()),
            (
                "unlinked_activity_refund_activity_details",
                self.unlinked_activity_refund_activity_details.get().is_some(),
            ),
            ("import_activity_details", self.import_activity_details.get().is_some()),
            ("block_activity_details", self.block_activity_details.get().is_some()),
            ("unblock_activity_details", self.unblock_activity_details.get().is_some()),
            (
                "import_reversal_activity_details",
                self.import_reversal_activity_details.get().is_some(),
            ),
            (
                "transfer_balance_to_activity_details",
                self.transfer_balance_to_activity_details.get().is_some(),
            ),
            (
                "transfer_balance_from_activity_details",
                self.transfer_balance_from_activity_details.get().is_some(),
            ),
        ]
        .into_iter()
        .filter_map(|(key, set)| set.then_some(key))
        .collect()
    }

    /// JSON key of the details field that belongs to [`activity_type`](Self::activity_type),
    /// `None` for types this crate does not model.
    #[must_use]
    pub fn expected_details(&self) -> Option<&'static str> {
        let key = match self.activity_type {
            GiftCardActivityType::Activate => "activate_activity_details",
            GiftCardActivityType::Load => "load_activity_details",
            GiftCardActivityType::Redeem => "redeem_activity_details",
            GiftCardActivityType::ClearBalance => "clear_balance_activity_details",
            GiftCardActivityType::Deactivate => "deactivate_activity_details",
            GiftCardActivityType::AdjustIncrement => "adjust_increment_activity_details",
            GiftCardActivityType::AdjustDecrement => "adjust_decrement_activity_details",
            GiftCardActivityType::Refund => "refund_activity_details",
            GiftCardActivityType::UnlinkedActivityRefund => {
                "unlinked_activity_refund_activity_details"
            }
            GiftCardActivityType::Import => "import_activity_details",
            GiftCardActivityType::Block => "block_activity_details",
            GiftCardActivityType::Unblock => "unblock_activity_details",
            GiftCardActivityType::ImportReversal => "import_reversal_activity_details",
            GiftCardActivityType::TransferBalanceFrom => "transfer_balance_from_activity_details",
            GiftCardActivityType::TransferBalanceTo => "transfer_balance_to_activity_details",
            GiftCardActivityType::Unknown(_) => return None,
        };
        Some(key)
    }

    /// `true` when the only populated details field is the one `activity_type` calls for.
    ///
    /// Activities of unknown type pass as long as at most one details field is set.
    #[must_use]
    pub fn details_match_type(&self) -> bool {
        let populated = self.populated_details();
        match self.expected_details() {
            Some(expected) => populated == [expected],
            None => populated.len() <= 1,
        }
    }
}
