use super::{api, fixtures};
use crate::core::runner::CaseSuite;
use crate::domain::model::{JsonCheck, ProbeCase};
use serde_json::json;

pub fn suite() -> CaseSuite {
    CaseSuite::new(
        "onboarding",
        "studio onboarding profile and progress",
        vec![
            ProbeCase::post("submit onboarding profile", &api("/onboarding/profile"))
                .with_json(fixtures::onboarding_profile())
                .expect(&[200, 201, 401]),
            ProbeCase::get("onboarding status", &api("/onboarding/status"))
                .expect(&[200, 401])
                .check(JsonCheck::any(vec![
                    JsonCheck::has_key("/completed"),
                    JsonCheck::has_key("/step"),
                    JsonCheck::has_key("/status"),
                ])),
            ProbeCase::post("incomplete onboarding profile", &api("/onboarding/profile"))
                .with_json(json!({ "studioName": "" }))
                .expect(&[400, 401, 422]),
        ],
    )
}
