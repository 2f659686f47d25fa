use super::{api, fixtures};
use crate::core::runner::CaseSuite;
use crate::domain::model::{JsonCheck, ProbeCase};
use serde_json::json;

pub fn suite() -> CaseSuite {
    CaseSuite::new(
        "bookings",
        "booking list, creation, validation and conflicts",
        vec![
            ProbeCase::get("list bookings", &api("/bookings"))
                .expect(&[200, 401])
                .check(JsonCheck::any(vec![
                    JsonCheck::is_array(""),
                    JsonCheck::is_array("/bookings"),
                    JsonCheck::is_array("/data"),
                ])),
            ProbeCase::post("create booking", &api("/bookings"))
                .with_json(fixtures::booking_payload())
                .expect(&[200, 201, 401, 403])
                .check(JsonCheck::any(vec![
                    JsonCheck::has_key("/id"),
                    JsonCheck::has_key("/booking/id"),
                ])),
            ProbeCase::post("create booking with missing fields", &api("/bookings"))
                .with_json(json!({}))
                .expect(&[400, 401, 422]),
            ProbeCase::post(
                "cancel unknown booking",
                &api(&format!("/bookings/{}/cancel", fixtures::UNKNOWN_ID)),
            )
            .expect(&[404, 401]),
            // 與 "create booking" 相同的 payload，第二次應該衝突
            ProbeCase::post("duplicate booking", &api("/bookings"))
                .with_json(fixtures::booking_payload())
                .expect(&[409, 401, 403]),
        ],
    )
}
