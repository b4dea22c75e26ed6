use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::Nullable;
use crate::types::{DateTime, Utc};

pub mod request;
pub mod response;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum LoyaltyEventType {
    AccumulatePoints,
    CreateReward,
    RedeemReward,
    DeleteReward,
    AdjustPoints,
    ExpirePoints,
    Other,
    AccumulatePromotionPoints,
    /// Unknown event type from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

/// Where the event originated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum LoyaltyEventSource {
    /// Square Point of Sale or the Seller Dashboard.
    Square,
    LoyaltyApi,
    #[serde(untagged)]
    Unknown(String),
}

/// Points earned from a purchase.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct LoyaltyEventAccumulatePoints {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub loyalty_program_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub points: Nullable<i32>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub order_id: Nullable<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct LoyaltyEventCreateReward {
    pub loyalty_program_id: String,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub reward_id: Nullable<String>,
    /// Points spent on the reward; negative.
    pub points: i32,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct LoyaltyEventRedeemReward {
    pub loyalty_program_id: String,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub reward_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub order_id: Nullable<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct LoyaltyEventDeleteReward {
    pub loyalty_program_id: String,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub reward_id: Nullable<String>,
    /// Points returned to the account; positive.
    pub points: i32,
}

/// A manual adjustment by the seller.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct LoyaltyEventAdjustPoints {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub loyalty_program_id: Nullable<String>,
    pub points: i32,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub reason: Nullable<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct LoyaltyEventExpirePoints {
    pub loyalty_program_id: String,
    pub points: i32,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct LoyaltyEventOther {
    pub loyalty_program_id: String,
    pub points: i32,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct LoyaltyEventAccumulatePromotionPoints {
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub loyalty_program_id: Nullable<String>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub loyalty_promotion_id: Nullable<String>,
    pub points: i32,
    pub order_id: String,
}

/// A change to a loyalty account: points earned, spent, adjusted or expired.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct LoyaltyEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: LoyaltyEventType,
    pub created_at: DateTime<Utc>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub accumulate_points: Nullable<LoyaltyEventAccumulatePoints>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub create_reward: Nullable<LoyaltyEventCreateReward>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub redeem_reward: Nullable<LoyaltyEventRedeemReward>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub delete_reward: Nullable<LoyaltyEventDeleteReward>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub adjust_points: Nullable<LoyaltyEventAdjustPoints>,
    pub loyalty_account_id: String,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub location_id: Nullable<String>,
    pub source: LoyaltyEventSource,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub expire_points: Nullable<LoyaltyEventExpirePoints>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub other_event: Nullable<LoyaltyEventOther>,
    #[builder(default, into)]
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub accumulate_promotion_points: Nullable<LoyaltyEventAccumulatePromotionPoints>,
}

impl LoyaltyEvent {
    /// Net change in the account's point balance caused by this event, if the event type
    /// carries one.
    #[must_use]
    pub fn points_delta(&self) -> Option<i32> {
        match self.event_type {
            LoyaltyEventType::AccumulatePoints => {
                self.accumulate_points.get().and_then(|d| d.points.get().copied())
            }
            LoyaltyEventType::CreateReward => self.create_reward.get().map(|d| d.points),
            LoyaltyEventType::DeleteReward => self.delete_reward.get().map(|d| d.points),
            LoyaltyEventType::AdjustPoints => self.adjust_points.get().map(|d| d.points),
            LoyaltyEventType::ExpirePoints => self.expire_points.get().map(|d| d.points),
            LoyaltyEventType::Other => self.other_event.get().map(|d| d.points),
            LoyaltyEventType::AccumulatePromotionPoints => {
                self.accumulate_promotion_points.get().map(|d| d.points)
            }
            LoyaltyEventType::RedeemReward | LoyaltyEventType::Unknown(_) => None,
        }
    }
}
