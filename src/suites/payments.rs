use super::{api, fixtures};
use crate::core::runner::CaseSuite;
use crate::domain::model::{JsonCheck, ProbeCase};
use serde_json::json;

pub fn suite() -> CaseSuite {
    let intent = api("/payments/create-payment-intent");
    let payout = api("/payments/payouts/request");

    CaseSuite::new(
        "payments",
        "payment intents and payout requests",
        vec![
            ProbeCase::post("create payment intent", &intent)
                .with_json(fixtures::payment_intent_payload(2500))
                .expect(&[200, 401])
                .check(JsonCheck::non_empty("/clientSecret")),
            ProbeCase::post("payment intent with invalid amount", &intent)
                .with_json(fixtures::payment_intent_payload(-100))
                .expect(&[400, 401]),
            ProbeCase::post("payment intent without token", &intent)
                .without_auth()
                .with_json(fixtures::payment_intent_payload(2500))
                .expect(&[401, 403]),
            ProbeCase::post("request payout", &payout)
                .with_json(fixtures::payout_payload(15000))
                .expect(&[200, 201, 401, 403])
                .check(JsonCheck::one_of(
                    "/status",
                    vec![json!("pending"), json!("processing"), json!("requested")],
                )),
            ProbeCase::post("payout with negative amount", &payout)
                .with_json(fixtures::payout_payload(-500))
                .expect(&[400, 401, 403]),
        ],
    )
}
