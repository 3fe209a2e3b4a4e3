//! Links to transactions on the Solana explorer.

use anchor_client::Cluster;

pub fn cluster_name(cluster: &Cluster) -> String {
    match cluster {
        Cluster::Mainnet => "mainnet-beta".to_string(),
        Cluster::Devnet => "devnet".to_string(),
        Cluster::Testnet => "testnet".to_string(),
        Cluster::Localnet => "localnet".to_string(),
        other => other.url().to_string(),
    }
}

fn cluster_param(cluster: &Cluster) -> String {
    match cluster {
        Cluster::Mainnet => String::new(),
        Cluster::Devnet => "?cluster=devnet".to_string(),
        Cluster::Testnet => "?cluster=testnet".to_string(),
        other => format!(
            "?cluster=custom&customUrl={}",
            urlencoding::encode(other.url())
        ),
    }
}

/// Explorer URL for `path` (e.g. `tx/<signature>`) on `cluster`.
pub fn explorer_url(cluster: &Cluster, path: &str) -> String {
    format!("https://explorer.solana.com/{}{}", path, cluster_param(cluster))
}

pub fn transaction_url(cluster: &Cluster, signature: &str) -> String {
    explorer_url(cluster, &format!("tx/{}", signature))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_clusters() {
        assert_eq!(
            transaction_url(&Cluster::Mainnet, "abc"),
            "https://explorer.solana.com/tx/abc"
        );
        assert_eq!(
            transaction_url(&Cluster::Devnet, "abc"),
            "https://explorer.solana.com/tx/abc?cluster=devnet"
        );
        assert_eq!(
            explorer_url(&Cluster::Testnet, "address/xyz"),
            "https://explorer.solana.com/address/xyz?cluster=testnet"
        );
    }

    #[test]
    fn local_cluster_uses_custom_url() {
        assert_eq!(
            transaction_url(&Cluster::Localnet, "abc"),
            "https://explorer.solana.com/tx/abc?cluster=custom&customUrl=http%3A%2F%2F127.0.0.1%3A8899"
        );
        assert_eq!(cluster_name(&Cluster::Localnet), "localnet");
    }
}
