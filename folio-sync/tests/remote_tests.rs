//! Views driven against a mocked remote store over HTTP.

use folio_store::{RestClient, SkillsApi, StoreConfig, TableStore};
use folio_sync::{LoadState, SkillsView};
use folio_types::{NewSkill, SkillCategory};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn skills_view(server: &MockServer) -> SkillsView {
    folio_store::init_logging();
    let config = StoreConfig {
        url: server.uri(),
        anon_key: "anon-test-key".into(),
        request_timeout_secs: 5,
        ..StoreConfig::default()
    };
    let store: Arc<dyn TableStore> = Arc::new(RestClient::new(config).unwrap());
    SkillsView::new(SkillsApi::new(store)).with_default_fallback()
}

#[tokio::test]
async fn server_error_shows_bundled_skills() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/skills"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "message": "internal error"
        })))
        .mount(&server)
        .await;

    let view = skills_view(&server).await;
    assert_eq!(view.load().await, LoadState::Failed);
    assert_eq!(view.len(), 20);
    assert_eq!(
        view.error().as_deref(),
        Some("remote store error (500): internal error")
    );
}

#[tokio::test]
async fn rejected_insert_keeps_loaded_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/skills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "name": "Rust", "category": "backend" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/skills"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "code": "42501",
            "message": "new row violates row-level security policy for table \"skills\""
        })))
        .mount(&server)
        .await;

    let view = skills_view(&server).await;
    assert_eq!(view.load().await, LoadState::Ready);

    let outcome = view
        .add(&NewSkill {
            name: "Zig".into(),
            category: SkillCategory::Other,
        })
        .await;
    assert!(!outcome.success);
    assert_eq!(outcome.kind, Some(folio_store::ErrorKind::Forbidden));
    let names: Vec<String> = view.items().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Rust"]);
    assert_eq!(view.state(), LoadState::Ready);
}
