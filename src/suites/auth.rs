use super::api;
use crate::core::runner::CaseSuite;
use crate::domain::model::{AuthMode, ProbeCase};
use serde_json::json;

const MALFORMED_TOKEN: &str = "not-a-valid.jwt.token";

/// 受保護端點在沒有或錯誤 token 時必須拒絕
pub fn suite() -> CaseSuite {
    CaseSuite::new(
        "auth",
        "protected endpoints reject missing or malformed tokens",
        vec![
            ProbeCase::get("bookings without token", &api("/bookings"))
                .without_auth()
                .expect(&[401, 403]),
            ProbeCase::get("payouts without token", &api("/payments/payouts"))
                .without_auth()
                .expect(&[401, 403]),
            ProbeCase::post("ai analyze without token", &api("/ai-wizard/analyze"))
                .without_auth()
                .with_json(json!({ "goals": ["strength"] }))
                .expect(&[401, 403]),
            ProbeCase::get("shifts with malformed token", &api("/staffing/shifts"))
                .with_auth(AuthMode::Token(MALFORMED_TOKEN.to_string()))
                .expect(&[401, 403]),
        ],
    )
}
