use super::{api, fixtures};
use crate::core::runner::CaseSuite;
use crate::domain::model::{JsonCheck, ProbeCase};

pub fn suite() -> CaseSuite {
    CaseSuite::new(
        "classes",
        "class schedule listing and creation",
        vec![
            ProbeCase::get("list classes", &api("/classes"))
                .expect(&[200, 401])
                .check(JsonCheck::any(vec![
                    JsonCheck::is_array(""),
                    JsonCheck::is_array("/classes"),
                ])),
            ProbeCase::post("create class", &api("/classes"))
                .with_json(fixtures::class_payload())
                .expect(&[200, 201, 401, 403])
                .check(JsonCheck::any(vec![
                    JsonCheck::non_empty("/id"),
                    JsonCheck::non_empty("/class/id"),
                ])),
            ProbeCase::post("create class with negative capacity", &api("/classes"))
                .with_json(fixtures::invalid_class_payload())
                .expect(&[400, 401, 403, 422]),
        ],
    )
}
