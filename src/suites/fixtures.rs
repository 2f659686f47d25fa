//! 測試用的 JSON payload。內容只需要「形狀合理」，不代表真實資料。

use crate::domain::model::UploadFile;
use chrono::{Duration, Utc};
use serde_json::{json, Value};

pub const SMOKE_CLASS_ID: &str = "smoke-class-001";
pub const SMOKE_SHIFT_ID: &str = "smoke-shift-001";
pub const SMOKE_STAFF_ID: &str = "smoke-staff-002";
pub const UNKNOWN_ID: &str = "00000000-0000-0000-0000-000000000000";

fn days_from_now(days: i64) -> String {
    (Utc::now() + Duration::days(days)).to_rfc3339()
}

pub fn booking_payload() -> Value {
    json!({
        "classId": SMOKE_CLASS_ID,
        "startTime": days_from_now(7),
        "participants": 1,
        "notes": "smoke test booking"
    })
}

pub fn class_payload() -> Value {
    json!({
        "name": "Smoke Test Vinyasa",
        "description": "Created by the smoke runner",
        "instructorId": SMOKE_STAFF_ID,
        "startTime": days_from_now(10),
        "durationMinutes": 60,
        "capacity": 12,
        "price": { "amount": 2500, "currency": "usd" },
        "location": "Studio A"
    })
}

pub fn invalid_class_payload() -> Value {
    let mut payload = class_payload();
    payload["capacity"] = json!(-5);
    payload
}

pub fn payment_intent_payload(amount: i64) -> Value {
    json!({
        "amount": amount,
        "currency": "usd",
        "classId": SMOKE_CLASS_ID,
        "description": "Drop-in class"
    })
}

pub fn payout_payload(amount: i64) -> Value {
    json!({
        "amount": amount,
        "currency": "usd",
        "method": "bank_transfer",
        "note": "smoke test payout"
    })
}

pub fn onboarding_profile() -> Value {
    json!({
        "studioName": "Smoke Test Studio",
        "ownerName": "Smoke Runner",
        "email": "smoke@example.com",
        "timezone": "America/New_York",
        "disciplines": ["yoga", "pilates"],
        "address": {
            "line1": "1 Test Street",
            "city": "Brooklyn",
            "postalCode": "11201",
            "country": "US"
        },
        "businessHours": { "open": "06:00", "close": "21:00" }
    })
}

pub fn swap_request(shift_id: Option<&str>) -> Value {
    let mut payload = json!({
        "targetStaffId": SMOKE_STAFF_ID,
        "reason": "smoke test swap request"
    });
    if let Some(id) = shift_id {
        payload["shiftId"] = json!(id);
    }
    payload
}

pub fn ai_analyze_payload(goals: &[&str]) -> Value {
    json!({
        "goals": goals,
        "experienceLevel": "intermediate",
        "availability": ["monday_morning", "thursday_evening"],
        "preferences": { "intensity": "moderate" }
    })
}

pub fn image_upload() -> UploadFile {
    UploadFile {
        field_name: "file".to_string(),
        file_name: "smoke-avatar.png".to_string(),
        mime_type: "image/png".to_string(),
        // 最小的 PNG 檔頭加上 IHDR 長度欄位
        bytes: vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D],
    }
}

pub fn executable_upload() -> UploadFile {
    UploadFile {
        field_name: "file".to_string(),
        file_name: "smoke.exe".to_string(),
        mime_type: "application/x-msdownload".to_string(),
        bytes: b"MZ smoke".to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_class_payload_only_changes_capacity() {
        let valid = class_payload();
        let invalid = invalid_class_payload();
        assert_eq!(invalid["capacity"], -5);
        assert_eq!(invalid["name"], valid["name"]);
    }

    #[test]
    fn test_swap_request_without_shift() {
        assert!(swap_request(None).get("shiftId").is_none());
        assert_eq!(swap_request(Some(SMOKE_SHIFT_ID))["shiftId"], SMOKE_SHIFT_ID);
    }
}
