//! Configuration for the action server and the data-access client.
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to change. CLI flags are applied on top by the binary.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};

use crate::error::ConfigError;

const DEFAULT_ICON: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcT-57yiXRWKvpfpV_iGOt88doZ1r_rNAtaWSQ&s";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsConfig {
    pub host: String,
    pub port: u16,
    /// JSON-RPC endpoint used to fetch recent blockhashes
    pub rpc_url: String,
    pub commitment: String,
    /// Value of `Access-Control-Allow-Origin` on every action response
    pub allowed_origin: String,
    /// Poll the action endpoint casts votes on
    pub poll_id: u64,
    pub candidates: Vec<String>,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub label: String,
    /// Overrides the program id compiled into the `voting` crate
    pub program_id: Option<String>,
    /// Program id per cluster name (`localnet`, `devnet`, `testnet`,
    /// `mainnet-beta` or a custom RPC URL); takes precedence over `program_id`
    pub program_ids: BTreeMap<String, String>,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            rpc_url: "http://127.0.0.1:8899".to_string(),
            commitment: "confirmed".to_string(),
            allowed_origin: "https://dial.to".to_string(),
            poll_id: 1,
            candidates: vec!["Trump".to_string(), "Biden".to_string()],
            icon: DEFAULT_ICON.to_string(),
            title: "Vote for your favorite candidate".to_string(),
            description: "Trump or Biden.".to_string(),
            label: "Vote".to_string(),
            program_id: None,
            program_ids: BTreeMap::new(),
        }
    }
}

impl ActionsConfig {
    /// Reads a TOML config file and validates it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.candidates.is_empty() {
            return Err(ConfigError::Invalid("at least one candidate is required".into()));
        }
        for name in &self.candidates {
            if name.is_empty() || name.len() > voting::constants::MAX_CANDIDATE_NAME_LEN {
                return Err(ConfigError::Invalid(format!(
                    "candidate name {:?} must be 1 to {} bytes",
                    name,
                    voting::constants::MAX_CANDIDATE_NAME_LEN
                )));
            }
        }
        if axum::http::HeaderValue::from_str(&self.allowed_origin).is_err() {
            return Err(ConfigError::Invalid(format!(
                "allowed_origin {:?} is not a valid header value",
                self.allowed_origin
            )));
        }
        self.commitment_config()?;
        self.program_id()?;
        for cluster in self.program_ids.keys() {
            self.program_id_for(cluster)?;
        }
        Ok(())
    }

    pub fn program_id(&self) -> Result<Pubkey, ConfigError> {
        match &self.program_id {
            Some(id) => parse_program_id(id),
            None => Ok(voting::ID),
        }
    }

    /// Program id deployed on `cluster`, falling back to [`Self::program_id`].
    pub fn program_id_for(&self, cluster: &str) -> Result<Pubkey, ConfigError> {
        match self.program_ids.get(cluster) {
            Some(id) => parse_program_id(id),
            None => self.program_id(),
        }
    }

    pub fn commitment_config(&self) -> Result<CommitmentConfig, ConfigError> {
        CommitmentConfig::from_str(&self.commitment)
            .map_err(|_| ConfigError::Invalid(format!("invalid commitment {:?}", self.commitment)))
    }

    pub fn is_candidate(&self, name: &str) -> bool {
        self.candidates.iter().any(|c| c == name)
    }
}

fn parse_program_id(id: &str) -> Result<Pubkey, ConfigError> {
    Pubkey::from_str(id).map_err(|_| ConfigError::Invalid(format!("invalid program id {:?}", id)))
}
