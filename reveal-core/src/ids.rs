use reveal_types::EntityId;
use uuid::Uuid;

/// Fresh random 128-bit identifier in simple hex form
pub fn new_id() -> EntityId {
    Uuid::new_v4().simple().to_string()
}

/// Wall-clock milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
