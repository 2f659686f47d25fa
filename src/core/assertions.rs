use crate::domain::model::{JsonCheck, ProbeCase, ProbeResponse};
use serde_json::Value;

const BODY_EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass(String),
    Fail(String),
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Pass(_))
    }

    pub fn details(&self) -> &str {
        match self {
            Verdict::Pass(d) | Verdict::Fail(d) => d,
        }
    }
}

/// 比對狀態碼與 JSON 欄位
pub fn check_response(case: &ProbeCase, response: &ProbeResponse) -> Verdict {
    if !case.accepts(response.status) {
        let mut details = format!(
            "expected status {}, got {}",
            format_codes(&case.expect),
            response.status
        );
        let excerpt = response.body_excerpt(BODY_EXCERPT_CHARS);
        if !excerpt.is_empty() {
            details.push_str(&format!(" | body: {}", excerpt));
        }
        return Verdict::Fail(details);
    }

    // 只有 2xx 才檢查欄位；被容忍的 401/403 通常沒有業務資料
    if response.is_success() && !case.checks.is_empty() {
        let Some(json) = response.json.as_ref() else {
            return Verdict::Fail(format!(
                "status {} but body is not JSON: {}",
                response.status,
                response.body_excerpt(BODY_EXCERPT_CHARS)
            ));
        };

        for check in &case.checks {
            if let Err(reason) = evaluate_check(check, json) {
                return Verdict::Fail(format!("status {} but {}", response.status, reason));
            }
        }
    }

    Verdict::Pass(format!(
        "status {} ({} ms)",
        response.status,
        response.elapsed.as_millis()
    ))
}

pub fn evaluate_check(check: &JsonCheck, json: &Value) -> Result<(), String> {
    match check {
        JsonCheck::HasKey { pointer } => lookup(json, pointer).map(|_| ()),
        JsonCheck::Equals { pointer, value } => {
            let actual = lookup(json, pointer)?;
            if actual == value {
                Ok(())
            } else {
                Err(format!("{} is {} (expected {})", display_pointer(pointer), actual, value))
            }
        }
        JsonCheck::IsArray { pointer } => match lookup(json, pointer)? {
            Value::Array(_) => Ok(()),
            other => Err(format!(
                "{} is {} (expected an array)",
                display_pointer(pointer),
                type_name(other)
            )),
        },
        JsonCheck::NonEmpty { pointer } => {
            let value = lookup(json, pointer)?;
            let empty = match value {
                Value::Null => true,
                Value::String(s) => s.is_empty(),
                Value::Array(a) => a.is_empty(),
                Value::Object(o) => o.is_empty(),
                Value::Bool(_) | Value::Number(_) => false,
            };
            if empty {
                Err(format!("{} is empty", display_pointer(pointer)))
            } else {
                Ok(())
            }
        }
        JsonCheck::OneOf { pointer, values } => {
            let actual = lookup(json, pointer)?;
            if values.contains(actual) {
                Ok(())
            } else {
                let allowed: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                Err(format!(
                    "{} is {} (expected one of {})",
                    display_pointer(pointer),
                    actual,
                    allowed.join(", ")
                ))
            }
        }
        JsonCheck::Any { checks } => {
            let mut reasons = Vec::with_capacity(checks.len());
            for inner in checks {
                match evaluate_check(inner, json) {
                    Ok(()) => return Ok(()),
                    Err(reason) => reasons.push(reason),
                }
            }
            Err(format!("none matched: {}", reasons.join("; ")))
        }
    }
}

fn lookup<'a>(json: &'a Value, pointer: &str) -> Result<&'a Value, String> {
    json.pointer(pointer)
        .ok_or_else(|| format!("{} is missing", display_pointer(pointer)))
}

fn display_pointer(pointer: &str) -> &str {
    if pointer.is_empty() {
        "<root>"
    } else {
        pointer
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn format_codes(codes: &[u16]) -> String {
    match codes {
        [single] => single.to_string(),
        many => {
            let parts: Vec<String> = many.iter().map(|c| c.to_string()).collect();
            format!("one of [{}]", parts.join(", "))
        }
    }
}
