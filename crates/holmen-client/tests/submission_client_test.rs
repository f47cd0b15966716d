//! HTTP contract tests for `HttpSubmissionClient` against a mock receiver.

use holmen_client::{ClientError, HttpSubmissionClient, SubmissionConfig};
use holmen_core::{FormSubmission, SubmissionError, SubmissionService};
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer, token: Option<&str>) -> HttpSubmissionClient {
    let mut config = SubmissionConfig::for_endpoint(&format!("{}/contact", mock_server.uri()))
        .unwrap()
        .with_timeout_secs(5);
    if let Some(token) = token {
        config = config.with_token(token);
    }
    HttpSubmissionClient::new(config).unwrap()
}

fn ola() -> FormSubmission {
    FormSubmission::from_named_fields([
        ("name", "Ola"),
        ("phone", "99887766"),
        ("email", ""),
        ("project-type", "kitchen"),
        ("message", "hei"),
        ("website", ""),
    ])
}

// ── 2xx ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn posts_submission_as_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contact"))
        .and(body_json(serde_json::json!({
            "name": "Ola",
            "phone": "99887766",
            "email": "",
            "project-type": "kitchen",
            "message": "hei"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "reference": "HH-2026-0042"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, None);
    let ack = client.submit(&ola()).await.unwrap();
    assert_eq!(ack.reference.as_deref(), Some("HH-2026-0042"));
}

#[tokio::test]
async fn sends_bearer_token_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contact"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, Some("test-token"));
    let ack = client.submit(&ola()).await.unwrap();
    assert_eq!(ack.reference, None);
}

#[tokio::test]
async fn omits_authorization_without_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, None);
    assert!(client.submit(&ola()).await.is_ok());
}

#[tokio::test]
async fn honeypot_field_is_never_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, None);
    client.submit(&ola()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("website").is_none());
    assert_eq!(body["name"], "Ola");
}

// ── non-2xx ──────────────────────────────────────────────────────────

#[tokio::test]
async fn non_success_status_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, None);
    match client.post(&ola()).await.unwrap_err() {
        ClientError::ApiError { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected ApiError, got: {other:?}"),
    }

    let err = client.submit(&ola()).await.unwrap_err();
    assert_eq!(
        err,
        SubmissionError::Rejected {
            status: 503,
            body: "maintenance".into()
        }
    );
}

#[tokio::test]
async fn rejected_submission_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, None);
    assert!(client.submit(&ola()).await.is_err());
}

// ── transport ────────────────────────────────────────────────────────

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let config = SubmissionConfig::for_endpoint(&format!("{uri}/contact"))
        .unwrap()
        .with_timeout_secs(2);
    let client = HttpSubmissionClient::new(config).unwrap();

    let err = client.submit(&ola()).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn long_rejection_body_is_cut_to_an_excerpt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("e".repeat(10_000)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, None);
    match client.submit(&ola()).await.unwrap_err() {
        SubmissionError::Rejected { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body.len(), holmen_client::BODY_EXCERPT_CHARS + "...".len());
        }
        other => panic!("expected Rejected, got: {other:?}"),
    }
}
