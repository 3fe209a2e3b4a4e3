use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, hash::Hash};

use crate::error::ActionError;

/// Supplies the recent blockhash stamped on unsigned action transactions.
#[async_trait]
pub trait BlockhashSource: Send + Sync {
    async fn latest_blockhash(&self) -> Result<Hash, ActionError>;
}

pub struct RpcBlockhashSource {
    rpc: RpcClient,
}

impl RpcBlockhashSource {
    pub fn new(rpc_url: String, commitment: CommitmentConfig) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(rpc_url, commitment),
        }
    }
}

#[async_trait]
impl BlockhashSource for RpcBlockhashSource {
    async fn latest_blockhash(&self) -> Result<Hash, ActionError> {
        self.rpc
            .get_latest_blockhash()
            .await
            .map_err(|e| ActionError::Blockhash(e.to_string()))
    }
}
