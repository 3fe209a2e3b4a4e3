//! `votingdapp serve`: start the Solana Actions server.

use votingdapp::config::ActionsConfig;

pub async fn run(
    mut config: ActionsConfig,
    host: Option<String>,
    port: Option<u16>,
    rpc_url: Option<String>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(rpc_url) = rpc_url {
        config.rpc_url = rpc_url;
    }

    let addr = votingdapp::start_server(config).await?;
    println!("Vote action available at http://{}{}", addr, votingdapp::api::ACTION_PATH);

    tokio::signal::ctrl_c().await?;

    println!("\nShutting down...");
    Ok(())
}
