#![cfg(feature = "loyalty")]

use serde_json::json;
use square_models_sdk::loyalty::types::request::{
    LoyaltyEventFilter, LoyaltyEventQuery, LoyaltyEventTypeFilter, SearchLoyaltyEventsRequest,
};
use square_models_sdk::loyalty::types::response::SearchLoyaltyEventsResponse;
use square_models_sdk::loyalty::types::{LoyaltyEventSource, LoyaltyEventType};
use square_models_sdk::{FromJson as _, JsonSerialize as _};

#[test]
fn empty_search_is_empty_object() -> anyhow::Result<()> {
    let request = SearchLoyaltyEventsRequest::default();
    request.validate()?;

    assert_eq!(request.to_json_string()?, "{}");
    Ok(())
}

#[test]
fn type_filter_serializes_enum_names() -> anyhow::Result<()> {
    let filter = LoyaltyEventFilter::builder()
        .type_filter(
            LoyaltyEventTypeFilter::builder()
                .types(vec![
                    LoyaltyEventType::AccumulatePoints,
                    LoyaltyEventType::ExpirePoints,
                ])
                .build(),
        )
        .build();
    let request = SearchLoyaltyEventsRequest::builder()
        .query(LoyaltyEventQuery::builder().filter(filter).build())
        .cursor("next-page")
        .build();

    assert_eq!(
        request.json_serialize()?,
        json!({
            "query": {
                "filter": {
                    "type_filter": { "types": ["ACCUMULATE_POINTS", "EXPIRE_POINTS"] }
                }
            },
            "cursor": "next-page"
        })
    );
    Ok(())
}

#[test]
fn search_response_sums_points() -> anyhow::Result<()> {
    let json = json!({
        "events": [
            {
                "id": "c27c8465-806e-36f2-b4b3-71f5887b5ba8",
                "type": "ACCUMULATE_POINTS",
                "created_at": "2020-05-08T21:41:12Z",
                "accumulate_points": {
                    "loyalty_program_id": "d619f755-2d17-41f3-990d-c04ecedd64dd",
                    "points": 5,
                    "order_id": "PyATxhYLfsMqpVkcKJITPydgEYfZY"
                },
                "loyalty_account_id": "5adcb100-07f1-4ee7-b8c6-6bb9ebc474bd",
                "location_id": "P034NEENMD09F",
                "source": "LOYALTY_API"
            },
            {
                "id": "e4a5cbc3-a4d0-3779-98e9-e578885d9430",
                "type": "CREATE_REWARD",
                "created_at": "2020-05-08T22:00:44Z",
                "create_reward": {
                    "loyalty_program_id": "d619f755-2d17-41f3-990d-c04ecedd64dd",
                    "reward_id": "3b75e9d9-0e67-4ed0-9f2b-b2e2ae1e4c2b",
                    "points": -3
                },
                "loyalty_account_id": "5adcb100-07f1-4ee7-b8c6-6bb9ebc474bd",
                "source": "SQUARE"
            }
        ],
        "cursor": "abc"
    });

    let response = SearchLoyaltyEventsResponse::from_json(json.clone())?;
    let events = response.events.get().expect("events present");

    assert_eq!(events[0].source, LoyaltyEventSource::LoyaltyApi);
    let net: i32 = events.iter().filter_map(|event| event.points_delta()).sum();
    assert_eq!(net, 2);
    assert_eq!(response.json_serialize()?, json);
    Ok(())
}

#[test]
fn event_without_source_is_malformed() {
    let err = SearchLoyaltyEventsResponse::from_json(json!({
        "events": [{
            "id": "c27c8465",
            "type": "OTHER",
            "created_at": "2020-05-08T21:41:12Z",
            "loyalty_account_id": "5adcb100"
        }]
    }))
    .expect_err("source is required");

    assert!(
        err.to_string().contains("events[0]"),
        "path should point at the event: {err}"
    );
}
