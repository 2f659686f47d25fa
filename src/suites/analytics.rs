use super::api;
use crate::core::runner::CaseSuite;
use crate::domain::model::{JsonCheck, ProbeCase};

pub fn suite() -> CaseSuite {
    CaseSuite::new(
        "analytics",
        "studio analytics dashboards",
        vec![
            ProbeCase::get("analytics dashboard", &api("/analytics/dashboard"))
                .with_query("range", "30d")
                .expect(&[200, 401, 403])
                .check(JsonCheck::any(vec![
                    JsonCheck::has_key("/metrics"),
                    JsonCheck::has_key("/summary"),
                ])),
            ProbeCase::get("revenue with invalid range", &api("/analytics/revenue"))
                .with_query("range", "not-a-range")
                .expect(&[400, 401, 403]),
        ],
    )
}
