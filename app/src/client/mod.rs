//! Data-access client for the `voting` program.
//!
//! Queries read Poll and Candidate accounts through the Anchor client and
//! are cached per cluster. Each mutation sends one transaction signed by the
//! payer, logs an explorer link on success and refetches the query it
//! affects. Failures surface as [`ClientError`] with a user-facing message.
//! A candidate name with no possible address fails before any RPC call.

pub mod cache;
pub mod explorer;

use std::sync::Arc;

use anchor_client::{Client, Cluster, Program};
use solana_sdk::{
    commitment_config::CommitmentConfig, instruction::Instruction, pubkey::Pubkey,
    signature::{Keypair, Signature},
};
use voting::{pda, Candidate, Poll};

use crate::error::ClientError;
use crate::transaction::{
    candidate_address, initialize_candidate_instruction, initialize_poll_instruction,
    vote_instruction, InitializePollParams,
};
use cache::{QueryCache, QueryKey};

pub struct VotingClient {
    program: Program<Arc<Keypair>>,
    cluster: Cluster,
    polls: QueryCache<Vec<(Pubkey, Poll)>>,
    candidates: QueryCache<Vec<(Pubkey, Candidate)>>,
}

impl VotingClient {
    pub fn new(cluster: Cluster, payer: Arc<Keypair>, program_id: Pubkey) -> Result<Self, ClientError> {
        let client = Client::new_with_options(cluster.clone(), payer, CommitmentConfig::confirmed());
        let program = client.program(program_id).map_err(ClientError::Setup)?;
        let name = explorer::cluster_name(&cluster);

        Ok(Self {
            program,
            polls: QueryCache::new(QueryKey::all("Poll", name.clone())),
            candidates: QueryCache::new(QueryKey::all("Candidate", name)),
            cluster,
        })
    }

    pub fn program_id(&self) -> Pubkey {
        self.program.id()
    }

    pub fn payer(&self) -> Pubkey {
        self.program.payer()
    }

    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// All Poll accounts owned by the program.
    pub async fn polls(&self) -> Result<Vec<(Pubkey, Poll)>, ClientError> {
        self.polls.get_or_fetch(|| self.fetch_polls()).await
    }

    /// All Candidate accounts owned by the program, across every poll.
    pub async fn candidates(&self) -> Result<Vec<(Pubkey, Candidate)>, ClientError> {
        self.candidates.get_or_fetch(|| self.fetch_candidates()).await
    }

    pub async fn poll(&self, poll_id: u64) -> Result<Poll, ClientError> {
        let address = pda::poll_address_with_program(&self.program_id(), poll_id);
        self.program
            .account::<Poll>(address)
            .await
            .map_err(|source| ClientError::Fetch { kind: "Poll", source })
    }

    pub async fn candidate(&self, poll_id: u64, candidate_name: &str) -> Result<Candidate, ClientError> {
        let address = candidate_address(&self.program_id(), poll_id, candidate_name)?;
        self.program
            .account::<Candidate>(address)
            .await
            .map_err(|source| ClientError::Fetch {
                kind: "Candidate",
                source,
            })
    }

    async fn fetch_polls(&self) -> Result<Vec<(Pubkey, Poll)>, ClientError> {
        self.program
            .accounts::<Poll>(Vec::new())
            .await
            .map_err(|source| ClientError::Fetch { kind: "Poll", source })
    }

    async fn fetch_candidates(&self) -> Result<Vec<(Pubkey, Candidate)>, ClientError> {
        self.program
            .accounts::<Candidate>(Vec::new())
            .await
            .map_err(|source| ClientError::Fetch {
                kind: "Candidate",
                source,
            })
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    pub async fn initialize_poll(&self, params: InitializePollParams) -> Result<Signature, ClientError> {
        let ix = initialize_poll_instruction(&self.program_id(), self.payer(), &params);
        let signature = self.send(ix).await.map_err(|e| {
            tracing::error!(poll_id = params.poll_id, "Failed to initialize poll: {}", e);
            ClientError::InitializePoll(e)
        })?;

        self.notify(&signature);
        if let Err(e) = self.polls.refetch(|| self.fetch_polls()).await {
            tracing::warn!(query = %self.polls.key(), "{}", e);
        }
        Ok(signature)
    }

    pub async fn initialize_candidate(
        &self,
        poll_id: u64,
        candidate_name: &str,
    ) -> Result<Signature, ClientError> {
        let ix = initialize_candidate_instruction(&self.program_id(), self.payer(), poll_id, candidate_name)?;
        let signature = self.send(ix).await.map_err(|e| {
            tracing::error!(poll_id, candidate = candidate_name, "Failed to initialize candidate: {}", e);
            ClientError::InitializeCandidate(e)
        })?;

        self.notify(&signature);
        self.refetch_candidates().await;
        Ok(signature)
    }

    pub async fn vote(&self, poll_id: u64, candidate_name: &str) -> Result<Signature, ClientError> {
        let ix = vote_instruction(&self.program_id(), self.payer(), poll_id, candidate_name)?;
        let signature = self.send(ix).await.map_err(|e| {
            tracing::error!(poll_id, candidate = candidate_name, "Failed to cast vote: {}", e);
            ClientError::Vote(e)
        })?;

        self.notify(&signature);
        self.refetch_candidates().await;
        Ok(signature)
    }

    async fn send(&self, ix: Instruction) -> Result<Signature, anchor_client::ClientError> {
        self.program.request().instruction(ix).send().await
    }

    async fn refetch_candidates(&self) {
        if let Err(e) = self.candidates.refetch(|| self.fetch_candidates()).await {
            tracing::warn!(query = %self.candidates.key(), "{}", e);
        }
    }

    fn notify(&self, signature: &Signature) {
        tracing::info!(
            signature = %signature,
            url = %explorer::transaction_url(&self.cluster, &signature.to_string()),
            "Transaction sent"
        );
    }
}
