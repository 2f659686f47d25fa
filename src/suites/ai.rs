use super::{api, fixtures};
use crate::core::runner::CaseSuite;
use crate::domain::model::{JsonCheck, ProbeCase};

pub fn suite() -> CaseSuite {
    CaseSuite::new(
        "ai",
        "AI wizard analysis and recommendations",
        vec![
            // 上游模型可能限流，429 不算失敗
            ProbeCase::post("ai wizard analyze", &api("/ai-wizard/analyze"))
                .with_json(fixtures::ai_analyze_payload(&["flexibility", "stress relief"]))
                .expect(&[200, 401, 429])
                .check(JsonCheck::any(vec![
                    JsonCheck::has_key("/recommendations"),
                    JsonCheck::has_key("/analysis"),
                ])),
            ProbeCase::get("ai recommendations", &api("/ai/recommendations"))
                .expect(&[200, 401])
                .check(JsonCheck::any(vec![
                    JsonCheck::is_array(""),
                    JsonCheck::is_array("/recommendations"),
                ])),
            ProbeCase::post("ai wizard analyze with empty goals", &api("/ai-wizard/analyze"))
                .with_json(fixtures::ai_analyze_payload(&[]))
                .expect(&[400, 401, 422]),
        ],
    )
}
