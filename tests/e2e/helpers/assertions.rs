use serde_json::Value;

pub fn assert_usage_response(usage: &Value, plan: &str, used: u64, limit: u64) {
    assert_eq!(usage.get("plan").and_then(|v| v.as_str()), Some(plan));
    assert_eq!(
        usage.pointer("/usage/downloads").and_then(|v| v.as_u64()),
        Some(used)
    );
    assert_eq!(
        usage.pointer("/limits/downloads").and_then(|v| v.as_u64()),
        Some(limit)
    );
    assert_eq!(
        usage.pointer("/usage/remaining").and_then(|v| v.as_u64()),
        Some(limit.saturating_sub(used))
    );
    assert_eq!(
        usage.get("can_download").and_then(|v| v.as_bool()),
        Some(used < limit)
    );
    assert!(usage.get("resets_at").is_some(), "Missing resets_at");
}

pub fn assert_item_status(session: &Value, index: usize, status: &str) {
    let item = session
        .get("items")
        .and_then(|items| items.get(index))
        .unwrap_or_else(|| panic!("Missing download item {}", index));
    assert_eq!(
        item.get("status").and_then(|v| v.as_str()),
        Some(status),
        "Unexpected status for item {}: {}",
        index,
        item
    );
}

pub fn assert_admin_session(session: &Value) {
    assert_eq!(
        session.get("email").and_then(|v| v.as_str()),
        Some(super::ADMIN_EMAIL)
    );
    assert_eq!(session.get("role").and_then(|v| v.as_str()), Some("admin"));
    assert!(
        session.get("token").and_then(|v| v.as_str()).is_some(),
        "Missing token field"
    );
    assert!(session.get("expiresAt").is_some(), "Missing expiresAt field");
}
