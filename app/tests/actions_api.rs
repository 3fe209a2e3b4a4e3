//! HTTP tests for the vote action endpoints.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`; the
//! RPC blockhash lookup is replaced by a fixed value.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature};
use tower::ServiceExt;

use votingdapp::blockhash::BlockhashSource;
use votingdapp::config::ActionsConfig;
use votingdapp::error::ActionError;
use votingdapp::state::AppStateInner;
use votingdapp::app_router;
use votingdapp::transaction::{decode_transaction, vote_instruction};

struct FixedBlockhash(Hash);

#[async_trait]
impl BlockhashSource for FixedBlockhash {
    async fn latest_blockhash(&self) -> Result<Hash, ActionError> {
        Ok(self.0)
    }
}

struct UnreachableRpc;

#[async_trait]
impl BlockhashSource for UnreachableRpc {
    async fn latest_blockhash(&self) -> Result<Hash, ActionError> {
        Err(ActionError::Blockhash("connection refused".to_string()))
    }
}

fn router_with(config: ActionsConfig, blockhash: Arc<dyn BlockhashSource>) -> Router {
    let program_id = config.program_id().expect("valid program id");
    let state = Arc::new(AppStateInner::new(config, program_id, blockhash));
    app_router(state).expect("router")
}

fn test_router(blockhash: Hash) -> Router {
    router_with(ActionsConfig::default(), Arc::new(FixedBlockhash(blockhash)))
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn assert_cors(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://dial.to");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, POST, OPTIONS");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
}

#[tokio::test]
async fn test_get_returns_action_metadata() {
    let response = test_router(Hash::new_unique())
        .oneshot(Request::get("/api/vote").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["type"], "action");
    assert_eq!(body["title"], "Vote for your favorite candidate");
    assert_eq!(body["description"], "Trump or Biden.");
    assert_eq!(body["label"], "Vote");

    let actions = body["links"]["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0]["label"], "Vote for Trump");
    assert_eq!(actions[0]["href"], "/api/vote?candidate=Trump");
    assert_eq!(actions[1]["label"], "Vote for Biden");
    assert_eq!(actions[1]["href"], "/api/vote?candidate=Biden");
}

#[tokio::test]
async fn test_get_links_follow_configured_candidates() {
    let config = ActionsConfig {
        candidates: vec!["Ada Lovelace".to_string()],
        ..ActionsConfig::default()
    };
    let response = router_with(config, Arc::new(FixedBlockhash(Hash::default())))
        .oneshot(Request::get("/api/vote").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    let actions = body["links"]["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0]["href"], "/api/vote?candidate=Ada%20Lovelace");
}

#[tokio::test]
async fn test_post_returns_unsigned_vote_transaction() {
    let blockhash = Hash::new_unique();
    let voter = Pubkey::new_unique();
    let response = test_router(blockhash)
        .oneshot(post(
            "/api/vote?candidate=Trump",
            &format!(r#"{{"account":"{}"}}"#, voter),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["type"], "transaction");
    assert_eq!(body["message"], "Vote for Trump");

    let tx = decode_transaction(body["transaction"].as_str().unwrap()).expect("decodable transaction");
    assert_eq!(tx.message.account_keys[0], voter);
    assert_eq!(tx.message.recent_blockhash, blockhash);
    assert_eq!(tx.message.header.num_required_signatures, 1);
    assert!(tx.signatures.iter().all(|s| *s == Signature::default()));

    let expected = vote_instruction(&voting::ID, voter, 1, "Trump").unwrap();
    assert_eq!(tx.message.instructions.len(), 1);
    let ix = &tx.message.instructions[0];
    assert_eq!(tx.message.account_keys[ix.program_id_index as usize], voting::ID);
    assert_eq!(ix.data, expected.data);
}

#[tokio::test]
async fn test_post_rejects_unknown_candidate() {
    let voter = Pubkey::new_unique();
    let body = format!(r#"{{"account":"{}"}}"#, voter);

    for uri in ["/api/vote?candidate=Obama", "/api/vote?candidate=trump", "/api/vote"] {
        let response = test_router(Hash::default()).oneshot(post(uri, &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        assert_cors(&response);
        assert_eq!(body_string(response).await, "Invalid candidate");
    }
}

#[tokio::test]
async fn test_post_rejects_repeated_candidate_param() {
    let body = format!(r#"{{"account":"{}"}}"#, Pubkey::new_unique());
    let response = test_router(Hash::default())
        .oneshot(post("/api/vote?candidate=Trump&candidate=Biden", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors(&response);
    assert_eq!(body_string(response).await, "Invalid candidate");
}

#[tokio::test]
async fn test_candidate_is_checked_before_account() {
    let response = test_router(Hash::default())
        .oneshot(post("/api/vote?candidate=Nobody", r#"{"account":"garbage"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Invalid candidate");
}

#[tokio::test]
async fn test_post_rejects_invalid_account() {
    for account in ["not-a-key", "", "0OIl"] {
        let response = test_router(Hash::default())
            .oneshot(post(
                "/api/vote?candidate=Biden",
                &format!(r#"{{"account":"{}"}}"#, account),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{:?}", account);
        assert_cors(&response);
        assert_eq!(body_string(response).await, "Invalid account");
    }
}

#[tokio::test]
async fn test_post_rejects_malformed_body() {
    let response = test_router(Hash::default())
        .oneshot(post("/api/vote?candidate=Biden", "{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Invalid request body");
}

#[tokio::test]
async fn test_post_reports_rpc_failure() {
    let router = router_with(ActionsConfig::default(), Arc::new(UnreachableRpc));
    let response = router
        .oneshot(post(
            "/api/vote?candidate=Biden",
            &format!(r#"{{"account":"{}"}}"#, Pubkey::new_unique()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_cors(&response);
    assert!(body_string(response).await.contains("connection refused"));
}

#[tokio::test]
async fn test_options_preflight() {
    let response = test_router(Hash::default())
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/vote")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_cors(&response);
}

#[tokio::test]
async fn test_custom_origin_and_poll() {
    let config = ActionsConfig {
        allowed_origin: "https://example.com".to_string(),
        poll_id: 42,
        ..ActionsConfig::default()
    };
    let voter = Pubkey::new_unique();
    let response = router_with(config, Arc::new(FixedBlockhash(Hash::new_unique())))
        .oneshot(post(
            "/api/vote?candidate=Biden",
            &format!(r#"{{"account":"{}"}}"#, voter),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://example.com"
    );

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    let tx = decode_transaction(body["transaction"].as_str().unwrap()).unwrap();
    let expected = vote_instruction(&voting::ID, voter, 42, "Biden").unwrap();
    assert_eq!(tx.message.instructions[0].data, expected.data);
    assert!(tx
        .message
        .account_keys
        .contains(&voting::pda::candidate_address(42, "Biden").unwrap()));
}

#[tokio::test]
async fn test_actions_json_and_health() {
    let router = test_router(Hash::default());

    let response = router
        .clone()
        .oneshot(Request::get("/actions.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["rules"][0]["pathPattern"], "/api/vote**");
    assert_eq!(body["rules"][0]["apiPath"], "/api/vote**");

    let response = router
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["server"], "votingdapp");
}
