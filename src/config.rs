use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use solana_program::pubkey::Pubkey;
use url::form_urlencoded::byte_serialize;

// Movie review program deployed on devnet
pub const DEFAULT_PROGRAM_ID: &str = "FnHUUiX2jLSaGdt6GpgoJYKnUxzbPG5VmRPEDr1NEekm";

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cluster {
    Devnet,
    Testnet,
    Localnet,
    Custom(String),
}

impl Cluster {
    pub fn url(&self) -> &str {
        match self {
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
            Self::Localnet => "http://127.0.0.1:8899",
            Self::Custom(url) => url,
        }
    }

    pub fn explorer_tx_url(&self, signature: impl fmt::Display) -> String {
        let base = format!("https://explorer.solana.com/tx/{signature}");
        match self {
            Self::Devnet => format!("{base}?cluster=devnet"),
            Self::Testnet => format!("{base}?cluster=testnet"),
            Self::Localnet | Self::Custom(_) => {
                let custom_url: String = byte_serialize(self.url().as_bytes()).collect();
                format!("{base}?cluster=custom&customUrl={custom_url}")
            }
        }
    }
}

// Monikers map to the public endpoints, anything else is taken as a URL
impl FromStr for Cluster {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "devnet" | "d" => Self::Devnet,
            "testnet" | "t" => Self::Testnet,
            "localnet" | "localhost" | "l" => Self::Localnet,
            url => Self::Custom(url.to_string()),
        })
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url())
    }
}

/// Everything the client needs to talk to a cluster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub cluster: Cluster,
    /// Airdrop when the signer's balance is below this many lamports.
    pub funding_threshold: u64,
    pub airdrop_lamports: u64,
    pub program_id: Pubkey,
}

impl ClientConfig {
    pub fn new(cluster: Cluster, program_id: Pubkey) -> Self {
        Self {
            cluster,
            funding_threshold: LAMPORTS_PER_SOL,
            airdrop_lamports: LAMPORTS_PER_SOL,
            program_id,
        }
    }

    pub fn with_funding(mut self, funding_threshold: u64, airdrop_lamports: u64) -> Self {
        self.funding_threshold = funding_threshold;
        self.airdrop_lamports = airdrop_lamports;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_monikers_and_urls() {
        assert_eq!("devnet".parse::<Cluster>().unwrap(), Cluster::Devnet);
        assert_eq!("t".parse::<Cluster>().unwrap(), Cluster::Testnet);
        assert_eq!("localhost".parse::<Cluster>().unwrap(), Cluster::Localnet);
        assert_eq!(
            "http://10.0.0.2:8899".parse::<Cluster>().unwrap(),
            Cluster::Custom("http://10.0.0.2:8899".to_string())
        );
    }

    #[test]
    fn explorer_links() {
        assert_eq!(
            Cluster::Devnet.explorer_tx_url("sig"),
            "https://explorer.solana.com/tx/sig?cluster=devnet"
        );
        assert_eq!(
            Cluster::Localnet.explorer_tx_url("sig"),
            "https://explorer.solana.com/tx/sig?cluster=custom\
             &customUrl=http%3A%2F%2F127.0.0.1%3A8899"
        );
    }

    #[test]
    fn custom_url_query_is_escaped() {
        let cluster = Cluster::Custom("https://rpc.example.com/?api-key=a&b=c".to_string());
        let link = cluster.explorer_tx_url("sig");
        assert_eq!(
            link,
            "https://explorer.solana.com/tx/sig?cluster=custom\
             &customUrl=https%3A%2F%2Frpc.example.com%2F%3Fapi-key%3Da%26b%3Dc"
        );
        // Only the explorer's own parameters remain as separators
        assert_eq!(link.matches('&').count(), 1);
        assert_eq!(link.matches('?').count(), 1);
    }

    #[test]
    fn default_funding_is_one_sol() {
        let program_id = DEFAULT_PROGRAM_ID.parse().unwrap();
        let config = ClientConfig::new(Cluster::Devnet, program_id);
        assert_eq!(config.funding_threshold, LAMPORTS_PER_SOL);
        assert_eq!(config.airdrop_lamports, LAMPORTS_PER_SOL);

        let config = config.with_funding(5, 10);
        assert_eq!((config.funding_threshold, config.airdrop_lamports), (5, 10));
    }
}
