use super::{api, fixtures};
use crate::core::runner::CaseSuite;
use crate::domain::model::{JsonCheck, ProbeCase};
use serde_json::json;

pub fn suite() -> CaseSuite {
    CaseSuite::new(
        "notifications",
        "notification inbox",
        vec![
            ProbeCase::get("list notifications", &api("/notifications"))
                .expect(&[200, 401])
                .check(JsonCheck::any(vec![
                    JsonCheck::is_array(""),
                    JsonCheck::is_array("/notifications"),
                ])),
            ProbeCase::post("mark notifications read", &api("/notifications/mark-read"))
                .with_json(json!({ "all": true }))
                .expect(&[200, 204, 401]),
            ProbeCase::post(
                "mark unknown notification read",
                &api(&format!("/notifications/{}/read", fixtures::UNKNOWN_ID)),
            )
            .expect(&[404, 401]),
        ],
    )
}
