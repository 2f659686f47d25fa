use super::{api, fixtures};
use crate::core::runner::CaseSuite;
use crate::domain::model::{JsonCheck, ProbeCase};
use serde_json::json;

pub fn suite() -> CaseSuite {
    CaseSuite::new(
        "upload",
        "multipart file upload",
        vec![
            ProbeCase::post("upload image", &api("/upload"))
                .with_upload(fixtures::image_upload())
                .expect(&[200, 201, 401])
                .check(JsonCheck::any(vec![
                    JsonCheck::non_empty("/url"),
                    JsonCheck::non_empty("/fileUrl"),
                ])),
            ProbeCase::post("upload disallowed file type", &api("/upload"))
                .with_upload(fixtures::executable_upload())
                .expect(&[400, 401, 415]),
            ProbeCase::post("upload without file", &api("/upload"))
                .with_json(json!({}))
                .expect(&[400, 401, 415]),
        ],
    )
}
