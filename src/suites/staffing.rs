use super::{api, fixtures};
use crate::core::runner::CaseSuite;
use crate::domain::model::{JsonCheck, ProbeCase};

pub fn suite() -> CaseSuite {
    CaseSuite::new(
        "staffing",
        "shift listing and swap requests",
        vec![
            // 測試用 shift 在 preview 環境不一定存在，404 也算合理
            ProbeCase::post("request shift swap", &api("/staffing/request-swap"))
                .with_json(fixtures::swap_request(Some(fixtures::SMOKE_SHIFT_ID)))
                .expect(&[200, 201, 401, 403, 404]),
            ProbeCase::post("swap without shift id", &api("/staffing/request-swap"))
                .with_json(fixtures::swap_request(None))
                .expect(&[400, 401, 403, 422]),
            ProbeCase::get("list shifts", &api("/staffing/shifts"))
                .expect(&[200, 401, 403])
                .check(JsonCheck::any(vec![
                    JsonCheck::is_array(""),
                    JsonCheck::is_array("/shifts"),
                ])),
        ],
    )
}
