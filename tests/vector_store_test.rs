//! Vector-store operations against a mock hub: querying, creation (raw file
//! ids and external sources), retrieval and file attachment. All of these
//! fail fast on the first error.

use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use inferhub::prelude::*;

fn store_body(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "kb",
        "created_at": 1_700_000_000,
        "usage_bytes": 0,
        "status": status,
        "file_counts": {"in_progress": 0, "completed": 0, "failed": 0, "cancelled": 0, "total": 0}
    })
}

fn client_for(server: &MockServer) -> InferenceClient {
    let config = ClientConfig::new(server.uri()).with_api_key("test-token");
    InferenceClient::new(config).expect("client construction")
}

#[tokio::test]
async fn test_query_returns_similarity_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vector_stores/vs_1/search"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({"query": "how do I install?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"file_id": "file-1", "chunk_text": "Run the installer.", "distance": 0.12},
            {"file_id": "file-2", "chunk_text": "See the setup guide.", "distance": 0.34}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client
        .query_vector_store("vs_1", "how do I install?")
        .await
        .expect("should succeed");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].file_id, "file-1");
    assert!(results[0].distance < results[1].distance);
}

#[tokio::test]
async fn test_query_failure_embeds_upstream_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vector_stores/vs_1/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("index unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .query_vector_store("vs_1", "anything")
        .await
        .expect_err("should fail");

    assert!(matches!(err, HubError::VectorStore(_)));
    let rendered = err.to_string();
    assert!(rendered.contains("Error querying vector store"));
    assert!(rendered.contains("index unavailable"));
}

#[tokio::test]
async fn test_get_missing_store_raises_not_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vector_stores/abc"))
        .respond_with(ResponseTemplate::new(404).set_body_string("vector store not found"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get_vector_store("abc")
        .await
        .expect_err("404 must raise");
    match err {
        HubError::ApiError { code, message, .. } => {
            assert_eq!(code, 404);
            assert!(message.contains("not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_store_returns_representation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vector_stores/vs_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(store_body("vs_1", "completed")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = client.get_vector_store("vs_1").await.expect("should succeed");
    assert_eq!(store.id, "vs_1");
    assert_eq!(store.status.as_deref(), Some("completed"));
}

#[tokio::test]
async fn test_create_store_omits_unset_optional_fields() {
    let server = MockServer::start().await;
    // Exact body match proves unset optional fields are absent, not null.
    Mock::given(method("POST"))
        .and(path("/vector_stores"))
        .and(body_json(json!({"name": "kb", "file_ids": ["file-1", "file-2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(store_body("vs_new", "in_progress")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = client
        .create_vector_store(CreateVectorStoreRequest::new(
            "kb",
            vec!["file-1".into(), "file-2".into()],
        ))
        .await
        .expect("should succeed");
    assert_eq!(store.id, "vs_new");
}

#[tokio::test]
async fn test_create_store_sends_explicit_options() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vector_stores"))
        .and(body_partial_json(json!({
            "expires_after": {"anchor": "last_active_at", "days": 7},
            "chunking_strategy": {"type": "auto"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(store_body("vs_new", "in_progress")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .create_vector_store(
            CreateVectorStoreRequest::new("kb", vec![])
                .with_expires_after(ExpiresAfter::last_active(7))
                .with_chunking_strategy(ChunkingStrategy::Auto),
        )
        .await
        .expect("should succeed");
}

#[tokio::test]
async fn test_create_from_source_posts_tagged_source() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vector_stores/from_source"))
        .and(body_partial_json(json!({
            "name": "docs",
            "source": {"type": "github", "owner": "acme", "repo": "docs", "branch": "main"},
            "source_auth": "gh-token"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(store_body("vs_src", "in_progress")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let source = VectorStoreSource::GitHub {
        owner: "acme".into(),
        repo: "docs".into(),
        branch: Some("main".into()),
    };
    let store = client
        .create_vector_store_from_source(
            CreateVectorStoreFromSourceRequest::new("docs", source).with_source_auth("gh-token"),
        )
        .await
        .expect("should succeed");
    assert_eq!(store.id, "vs_src");
}

#[tokio::test]
async fn test_create_from_source_failure_is_wrapped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vector_stores/from_source"))
        .respond_with(ResponseTemplate::new(422).set_body_string("unsupported source"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let source = VectorStoreSource::GitLab {
        owner: "acme".into(),
        repo: "docs".into(),
        branch: None,
    };
    let err = client
        .create_vector_store_from_source(CreateVectorStoreFromSourceRequest::new("docs", source))
        .await
        .expect_err("should fail");

    let rendered = err.to_string();
    assert!(rendered.contains("Failed to create vector store"));
    assert!(rendered.contains("unsupported source"));
}

#[tokio::test]
async fn test_add_file_to_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vector_stores/vs_1/files"))
        .and(body_json(json!({"file_id": "file-9"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "file-9",
            "vector_store_id": "vs_1",
            "created_at": 1_700_000_000,
            "status": "in_progress"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let attached = client
        .add_file_to_vector_store("vs_1", "file-9")
        .await
        .expect("should succeed");
    assert_eq!(attached.vector_store_id, "vs_1");
}

#[tokio::test]
async fn test_upload_file_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/files"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "file-up",
            "bytes": 11,
            "created_at": 1_700_000_000,
            "filename": "notes.txt",
            "purpose": "assistants"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let file = client
        .upload_file("hello world", FilePurpose::Assistants, "notes.txt", "text/plain")
        .await
        .expect("should succeed");
    assert_eq!(file.id, "file-up");
    assert_eq!(file.purpose, Some(FilePurpose::Assistants));
}

#[tokio::test]
async fn test_upload_text_file_uses_plain_text_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/files"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "file-txt",
            "bytes": 5,
            "created_at": 1_700_000_000,
            "filename": "file.txt",
            "purpose": "assistants"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let file = client
        .upload_text_file("hello", FilePurpose::Assistants)
        .await
        .expect("should succeed");
    assert_eq!(file.id, "file-txt");
    assert_eq!(file.filename, "file.txt");
}

#[tokio::test]
async fn test_upload_rejects_bad_mime_type() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let err = client
        .upload_file("x", FilePurpose::Assistants, "x.bin", "not a mime")
        .await
        .expect_err("should fail locally");
    assert!(matches!(err, HubError::InvalidInput(_)));
}
