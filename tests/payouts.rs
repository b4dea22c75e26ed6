#![cfg(feature = "payouts")]

use serde_json::json;
use square_models_sdk::payouts::types::request::ListPayoutsRequest;
use square_models_sdk::payouts::types::response::{
    GetPayoutResponse, ListPayoutEntriesResponse, ListPayoutsResponse,
};
use square_models_sdk::payouts::types::{ActivityType, DestinationType, PayoutStatus};
use square_models_sdk::types::{Currency, Money, SortOrder};
use square_models_sdk::{FromJson as _, JsonSerialize as _, ToQueryParams as _};

#[test]
fn list_payouts() -> anyhow::Result<()> {
    let request = ListPayoutsRequest::builder()
        .location_id("L88917AVBK2S5")
        .sort_order(SortOrder::Desc)
        .limit(20)?
        .build();
    assert_eq!(
        request.query_params(),
        "?location_id=L88917AVBK2S5&sort_order=DESC&limit=20"
    );

    let json = json!({
        "payouts": [{
            "id": "po_b345d2c7-90b3-4f0b-a2aa-df1def7f8afc",
            "status": "PAID",
            "location_id": "L88917AVBK2S5",
            "created_at": "2022-03-29T16:12:31Z",
            "updated_at": "2022-03-30T01:07:22Z",
            "amount_money": { "amount": 6259, "currency": "USD" },
            "destination": { "type": "BANK_ACCOUNT", "id": "ccof:ZPp3oedR3AeEUNd3z7" },
            "version": 2,
            "type": "BATCH",
            "arrival_date": "2022-03-30",
            "end_to_end_id": "L2100000005"
        }],
        "cursor": "EMPCyStibo64hS8wLayZPp3oedR3AeEUNd3z7u6gZ0WAE4SF4ckdfh4VEJ5RuTbUGTrd0xhXRZ2gaJ3NVnAzA"
    });
    let response = ListPayoutsResponse::from_json(json.clone())?;

    let payout = &response.payouts.get().expect("payouts present")[0];
    assert_eq!(payout.status.get(), Some(&PayoutStatus::Paid));
    assert_eq!(
        payout
            .destination
            .get()
            .and_then(|destination| destination.destination_type.get()),
        Some(&DestinationType::BankAccount)
    );
    assert_eq!(response.json_serialize()?, json);
    Ok(())
}

#[test]
fn get_payout_not_found() -> anyhow::Result<()> {
    let response = GetPayoutResponse::from_json(json!({
        "errors": [{ "category": "INVALID_REQUEST_ERROR", "code": "NOT_FOUND", "detail": "Payout not found." }]
    }))?;

    assert!(response.payout.is_absent(), "no payout on error");
    assert_eq!(response.errors.get().map(Vec::len), Some(1));
    Ok(())
}

#[test]
fn payout_entries() -> anyhow::Result<()> {
    let response = ListPayoutEntriesResponse::from_json(json!({
        "payout_entries": [
            {
                "id": "poe_ZQWcw41d0SGJS6IWd4cSi8mKHk",
                "payout_id": "po_4d28e6c4-7dd5-4de4-8ec9-a059277646a6",
                "effective_at": "2021-12-14T23:31:49Z",
                "type": "CHARGE",
                "gross_amount_money": { "amount": 100, "currency": "USD" },
                "fee_amount_money": { "amount": 3, "currency": "USD" },
                "net_amount_money": { "amount": 97, "currency": "USD" },
                "type_charge_details": { "payment_id": "YKTr7SXqkMddkh2eBhqWuPjYbIhZY" }
            },
            {
                "id": "poe_EibbY9Ob1d0SGJS6IWd4cSiSi6wkaPk",
                "payout_id": "po_4d28e6c4-7dd5-4de4-8ec9-a059277646a6",
                "type": "FREE_PROCESSING",
                "gross_amount_money": { "amount": 0, "currency": "USD" },
                "fee_amount_money": { "amount": -3, "currency": "USD" },
                "net_amount_money": { "amount": 3, "currency": "USD" }
            }
        ]
    }))?;

    let entries = response.payout_entries.get().expect("entries present");
    assert_eq!(entries[0].payment_id(), Some("YKTr7SXqkMddkh2eBhqWuPjYbIhZY"));
    assert_eq!(entries[1].entry_type.get(), Some(&ActivityType::FreeProcessing));
    assert_eq!(
        entries[1].net_amount_money.get(),
        Some(&Money::new(3, Currency::Usd))
    );
    Ok(())
}
