//! Merge request payloads shared by integration tests.

/// A merged merge request with every optional field present except
/// `closed_at`.
pub const MERGED_PAYLOAD: &str = r#"{
    "id": 1001,
    "iid": 7,
    "author": { "name": "Ann", "avatar_url": "a.png", "web_url": "u" },
    "title": "Fix bug",
    "description": "d",
    "state": "merged",
    "created_at": "2023-01-01T00:00:00Z",
    "updated_at": "2023-01-02T00:00:00Z",
    "closed_at": null,
    "merged_at": "2023-01-03T00:00:00Z",
    "web_url": "mr-url"
}"#;
