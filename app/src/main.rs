//! Votingdapp CLI: serve the vote action and drive the `voting` program.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "votingdapp", version, about = "Solana voting dapp: action server and program client")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "VOTINGDAPP_CONFIG")]
    config: Option<PathBuf>,

    /// Cluster moniker (localnet, devnet, testnet, mainnet) or RPC URL
    #[arg(long, env = "VOTINGDAPP_CLUSTER", default_value = "localnet")]
    cluster: String,

    /// Payer keypair file [default: ~/.config/solana/id.json]
    #[arg(long, env = "VOTINGDAPP_KEYPAIR")]
    keypair: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Solana Actions HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
        /// RPC endpoint used for recent blockhashes
        #[arg(long)]
        rpc_url: Option<String>,
    },

    /// List all polls
    Polls,

    /// List all candidates
    Candidates,

    /// Create a poll
    InitPoll {
        #[arg(long)]
        poll_id: u64,
        #[arg(long)]
        description: String,
        /// Unix timestamp at which voting opens
        #[arg(long, default_value_t = 0)]
        start: u64,
        /// Unix timestamp after which votes are rejected
        #[arg(long)]
        end: u64,
    },

    /// Register a candidate on a poll
    AddCandidate {
        #[arg(long)]
        poll_id: u64,
        #[arg(long)]
        name: String,
    },

    /// Cast a vote
    Vote {
        #[arg(long)]
        poll_id: u64,
        #[arg(long)]
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    votingdapp::init_tracing();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    let connect = || commands::connect(&cli.cluster, cli.keypair.clone(), &config);

    match &cli.command {
        Commands::Serve { host, port, rpc_url } => {
            commands::server::run(config.clone(), host.clone(), *port, rpc_url.clone()).await
        }
        Commands::Polls => commands::program::list_polls(&connect()?).await,
        Commands::Candidates => commands::program::list_candidates(&connect()?).await,
        Commands::InitPoll {
            poll_id,
            description,
            start,
            end,
        } => {
            commands::program::init_poll(&connect()?, *poll_id, description.clone(), *start, *end)
                .await
        }
        Commands::AddCandidate { poll_id, name } => {
            commands::program::add_candidate(&connect()?, *poll_id, name).await
        }
        Commands::Vote { poll_id, name } => commands::program::vote(&connect()?, *poll_id, name).await,
    }
}
