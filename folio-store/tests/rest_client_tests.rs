mod support;

use folio_store::{ErrorKind, Query, RestClient, StoreConfig, StoreError, Table, TableStore};
use folio_types::{OrderBy, Project, ProjectPatch, RowId, Skill};
use pretty_assertions::assert_eq;
use support::{ANON_KEY, as_store, project_row, setup, token_response};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// --- Construction ---

#[test]
fn new_rejects_missing_credentials() {
    let err = RestClient::new(StoreConfig::default()).err().unwrap();
    assert!(matches!(err, StoreError::Config(_)));
}

// --- Select ---

#[tokio::test]
async fn select_sends_keys_and_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .and(query_param("select", "*"))
        .and(query_param("order", "sort_order.asc"))
        .and(header("apikey", ANON_KEY))
        .and(header("authorization", format!("Bearer {ANON_KEY}").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([project_row(1, "A"), project_row(2, "B")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let projects: Vec<Project> = Table::new(as_store(&client)).all().await.unwrap();
    let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
}

#[tokio::test]
async fn select_uses_compound_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/skills"))
        .and(query_param("order", "category.asc,name.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "name": "React", "category": "frontend" }
        ])))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let skills: Vec<Skill> = Table::new(as_store(&client)).all().await.unwrap();
    assert_eq!(skills.len(), 1);
}

#[tokio::test]
async fn select_with_filter_and_explicit_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/skills"))
        .and(query_param("category", "eq.backend"))
        .and(query_param("order", "name.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let rows = client
        .select(
            "skills",
            &Query::new()
                .eq("category", "backend")
                .order(&[OrderBy::asc("name")]),
        )
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn malformed_row_is_a_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "title": "no id" }])),
        )
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let err = Table::<Project>::new(as_store(&client)).all().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
}

// --- Writes ---

#[tokio::test]
async fn insert_asks_for_representation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/projects"))
        .and(header("prefer", "return=representation"))
        .and(body_json(serde_json::json!({ "title": "New" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!([project_row(9, "New")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let row = client
        .insert("projects", serde_json::json!({ "title": "New" }))
        .await
        .unwrap();
    assert_eq!(row["id"], 9);
}

#[tokio::test]
async fn update_targets_row_by_id() {
    let server = MockServer::start().await;
    let mut updated = project_row(3, "C");
    updated["is_featured"] = serde_json::json!(true);
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/projects"))
        .and(query_param("id", "eq.3"))
        .and(body_json(serde_json::json!({ "is_featured": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([updated])))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let table: Table<Project> = Table::new(as_store(&client));
    let patch = ProjectPatch {
        is_featured: Some(true),
        ..Default::default()
    };
    let project = table.update(&RowId::from(3_i64), &patch).await.unwrap();
    assert!(project.is_featured);
}

#[tokio::test]
async fn update_of_missing_row_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let err = client
        .update("projects", &RowId::from(404_i64), serde_json::json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn delete_returns_unit_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/experiences"))
        .and(query_param("id", "eq.abc-uuid"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "id": "abc-uuid" }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = setup(&server).await;
    client
        .delete("experiences", &RowId::from("abc-uuid"))
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_of_missing_row_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/experiences"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let err = client
        .delete("experiences", &RowId::from(1_i64))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn upsert_merges_duplicates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/profiles"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!([{ "id": "u1", "name": "Owner" }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let row = client
        .upsert("profiles", serde_json::json!({ "id": "u1", "name": "Owner" }))
        .await
        .unwrap();
    assert_eq!(row["name"], "Owner");

    let requests = server.received_requests().await.unwrap();
    let prefer = requests[0].headers.get("prefer").unwrap().to_str().unwrap();
    assert_eq!(prefer, "resolution=merge-duplicates,return=representation");
}

// --- Error mapping ---

#[tokio::test]
async fn policy_violation_is_forbidden() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/projects"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "code": "42501",
            "message": "new row violates row-level security policy for table \"projects\"",
            "details": null,
            "hint": null
        })))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let err = client
        .insert("projects", serde_json::json!({ "title": "x" }))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    assert!(err.to_string().contains("row-level security"));
}

#[tokio::test]
async fn constraint_violation_is_validation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/skills"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint",
            "details": "Key (name)=(Rust) already exists."
        })))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let err = client
        .insert("skills", serde_json::json!({ "name": "Rust" }))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(
        err.to_string(),
        "rejected by remote store: duplicate key value violates unique constraint \
         (Key (name)=(Rust) already exists.)"
    );
}

#[tokio::test]
async fn server_error_is_remote() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let err = client
        .select("projects", &Query::new())
        .await
        .unwrap_err();
    match err {
        StoreError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_store_is_transport() {
    let config = StoreConfig {
        url: "http://127.0.0.1:1".into(),
        anon_key: ANON_KEY.into(),
        request_timeout_secs: 2,
        ..StoreConfig::default()
    };
    let client = RestClient::new(config).unwrap();
    let err = client
        .select("projects", &Query::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

// --- Auth ---

#[tokio::test]
async fn sign_in_switches_bearer_to_session_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(body_json(
            serde_json::json!({ "email": "owner@example.com", "password": "pw" }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response("u1")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/contact_messages"))
        .and(header("authorization", "Bearer at-owner"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = setup(&server).await;
    assert!(!client.is_authenticated().await);

    let session = client
        .sign_in_with_password("owner@example.com", "pw")
        .await
        .unwrap();
    assert_eq!(session.user_id, RowId::from("u1"));
    assert_eq!(client.user_id().await, Some(RowId::from("u1")));

    client
        .select("contact_messages", &Query::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn bad_credentials_fail_sign_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let err = client
        .sign_in_with_password("owner@example.com", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::AuthFailed(_)));
    assert!(err.to_string().contains("Invalid login credentials"));
    assert!(!client.is_authenticated().await);
}

#[tokio::test]
async fn sign_out_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response("u1")))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    client.sign_in_with_password("owner@example.com", "pw").await.unwrap();
    client.sign_out().await;
    assert!(!client.is_authenticated().await);
    assert_eq!(client.user_id().await, None);
}

// --- Diagnostics ---

#[tokio::test]
async fn check_tables_reports_each_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .and(query_param("limit", "1"))
        .and(header("prefer", "count=exact"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-range", "0-0/12")
                .set_body_json(serde_json::json!([{ "id": 1 }])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/skills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "permission denied for table profiles"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/experiences"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "code": "42P01",
            "message": "relation \"public.experiences\" does not exist"
        })))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let report = client
        .check_tables(&["projects", "skills", "profiles", "experiences"])
        .await;

    let names: Vec<&str> = report.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(names, vec!["projects", "skills", "profiles", "experiences"]);
    assert_eq!(*report[0].1.as_ref().unwrap(), 12);
    assert_eq!(*report[1].1.as_ref().unwrap(), 0);
    let denied = report[2].1.as_ref().unwrap_err();
    assert_eq!(denied.kind(), ErrorKind::Forbidden);
    assert_eq!(
        denied.to_string(),
        "permission denied: permission denied for table profiles"
    );
    assert_eq!(report[3].1.as_ref().unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn portfolio_tables_cover_admin_panel() {
    assert_eq!(
        folio_store::PORTFOLIO_TABLES,
        &["projects", "experiences", "skills", "profiles"]
    );
}
