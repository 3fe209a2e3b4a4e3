pub mod program;
pub mod server;

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use anchor_client::Cluster;
use anyhow::{anyhow, Context};
use solana_sdk::signature::read_keypair_file;
use votingdapp::client::explorer::cluster_name;
use votingdapp::config::ActionsConfig;
use votingdapp::VotingClient;

pub fn load_config(path: Option<&Path>) -> anyhow::Result<ActionsConfig> {
    match path {
        Some(path) => Ok(ActionsConfig::load(path)?),
        None => Ok(ActionsConfig::default()),
    }
}

fn default_keypair_path() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".config").join("solana").join("id.json"))
}

/// Build a client for `cluster` paying with the keypair at `keypair`.
pub fn connect(
    cluster: &str,
    keypair: Option<PathBuf>,
    config: &ActionsConfig,
) -> anyhow::Result<VotingClient> {
    let cluster = Cluster::from_str(cluster).map_err(|e| anyhow!("Invalid cluster {:?}: {}", cluster, e))?;
    let path = match keypair {
        Some(path) => path,
        None => default_keypair_path()?,
    };
    let payer = read_keypair_file(&path)
        .map_err(|e| anyhow!("Failed to read keypair {}: {}", path.display(), e))?;

    let program_id = config.program_id_for(&cluster_name(&cluster))?;
    VotingClient::new(cluster, Arc::new(payer), program_id)
        .context("Failed to create program client")
}
