use std::str::FromStr;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;

use super::types::{ActionGetResponse, ActionLinks, ActionPostRequest, ActionPostResponse, LinkedAction};
use super::ACTION_PATH;
use crate::error::ActionError;
use crate::state::AppState;
use crate::transaction::{encode_transaction, unsigned_transaction, vote_instruction};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_vote).post(post_vote).options(options_vote))
}

#[derive(Debug, Deserialize)]
struct VoteQuery {
    candidate: Option<String>,
}

/// Describes the action: one link per candidate on the configured poll.
async fn get_vote(State(state): State<AppState>) -> Json<ActionGetResponse> {
    let config = &state.config;
    let actions = config
        .candidates
        .iter()
        .map(|name| LinkedAction {
            label: format!("Vote for {}", name),
            href: format!("{}?candidate={}", ACTION_PATH, urlencoding::encode(name)),
        })
        .collect();

    Json(ActionGetResponse {
        kind: "action".to_string(),
        icon: config.icon.clone(),
        title: config.title.clone(),
        description: config.description.clone(),
        label: config.label.clone(),
        links: ActionLinks { actions },
    })
}

/// Returns an unsigned `vote` transaction for the caller's wallet to sign.
async fn post_vote(
    State(state): State<AppState>,
    query: Result<Query<VoteQuery>, QueryRejection>,
    body: Result<Json<ActionPostRequest>, JsonRejection>,
) -> Result<Json<ActionPostResponse>, ActionError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!("Rejected action query: {}", e);
        ActionError::InvalidCandidate
    })?;
    let candidate = query
        .candidate
        .filter(|name| state.config.is_candidate(name))
        .ok_or(ActionError::InvalidCandidate)?;

    let Json(body) = body.map_err(|e| {
        tracing::debug!("Rejected action body: {}", e);
        ActionError::InvalidBody
    })?;
    let voter = Pubkey::from_str(&body.account).map_err(|_| ActionError::InvalidAccount)?;

    let instruction = vote_instruction(&state.program_id, voter, state.config.poll_id, &candidate)
        .map_err(|_| ActionError::InvalidCandidate)?;
    let blockhash = state.blockhash.latest_blockhash().await?;
    let transaction = unsigned_transaction(&[instruction], &voter, blockhash);
    let encoded =
        encode_transaction(&transaction).map_err(|e| ActionError::Serialize(e.to_string()))?;

    tracing::info!(
        voter = %voter,
        candidate = %candidate,
        poll_id = state.config.poll_id,
        "Built vote transaction"
    );

    Ok(Json(ActionPostResponse {
        kind: "transaction".to_string(),
        transaction: encoded,
        message: Some(format!("Vote for {}", candidate)),
    }))
}

/// CORS preflight; the headers themselves come from the router layers.
async fn options_vote() -> StatusCode {
    StatusCode::NO_CONTENT
}
