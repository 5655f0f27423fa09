//! Shared helpers for tests against a mocked remote store.

#![allow(dead_code)]

use folio_store::{RestClient, StoreConfig, TableStore};
use std::sync::Arc;
use wiremock::MockServer;

pub const ANON_KEY: &str = "anon-test-key";

pub fn test_config(server: &MockServer) -> StoreConfig {
    StoreConfig {
        url: server.uri(),
        anon_key: ANON_KEY.into(),
        request_timeout_secs: 5,
        github_api_url: server.uri(),
        github_username: Some("octo".into()),
        github_page_size: 6,
        user_agent: Some("folio-tests".into()),
    }
}

pub async fn setup(server: &MockServer) -> Arc<RestClient> {
    Arc::new(RestClient::new(test_config(server)).unwrap())
}

pub fn as_store(client: &Arc<RestClient>) -> Arc<dyn TableStore> {
    client.clone()
}

pub fn project_row(id: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": null,
        "technologies": ["Rust"],
        "is_featured": false,
        "status": "completed",
        "sort_order": id,
        "is_custom": true,
        "github_repo_id": null,
        "stars_count": 0,
        "forks_count": 0,
        "language": null,
        "created_at": "2025-03-01T10:00:00Z"
    })
}

pub fn profile_row(id: &str, is_admin: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": "owner@example.com",
        "name": "Owner",
        "title": "Engineer",
        "bio": "",
        "is_admin": is_admin
    })
}

pub fn token_response(user_id: &str) -> serde_json::Value {
    serde_json::json!({
        "access_token": "at-owner",
        "refresh_token": "rt-owner",
        "user": { "id": user_id, "email": "owner@example.com" }
    })
}
