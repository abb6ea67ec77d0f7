//! RPC side of the client: funding the signer, submitting review
//! transactions and reading review accounts back.

use std::thread::sleep;
use std::time::Duration;

use anyhow::Context;
use solana_client::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_program::instruction::Instruction;
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;

use crate::config::ClientConfig;
use crate::request::ReviewRequest;
use crate::state::MovieAccountState;

const AIRDROP_POLLS: usize = 10;
const AIRDROP_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub struct ReviewClient {
    rpc: RpcClient,
    config: ClientConfig,
    poll_interval: Duration,
}

/// A review that made it on-chain.
#[derive(Debug)]
pub struct SubmittedReview {
    pub address: Pubkey,
    pub signature: Signature,
}

/// Outcome of [`ReviewClient::airdrop_if_needed`].
#[derive(Debug, PartialEq, Eq)]
pub enum Funding {
    /// Balance was already at or above the funding threshold.
    Sufficient { balance: u64 },
    /// An airdrop was requested; `confirmed` is false when polling gave up.
    Airdropped {
        balance: u64,
        signature: Signature,
        confirmed: bool,
    },
}

impl ReviewClient {
    pub fn new(config: ClientConfig) -> Self {
        let rpc = RpcClient::new_with_commitment(
            config.cluster.url().to_string(),
            CommitmentConfig::confirmed(),
        );
        Self::with_rpc(rpc, config)
    }

    /// Uses an existing RPC client, e.g. a mock one, instead of connecting
    /// to the configured cluster.
    pub fn with_rpc(rpc: RpcClient, config: ClientConfig) -> Self {
        Self {
            rpc,
            config,
            poll_interval: AIRDROP_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Requests an airdrop when the balance is below the funding threshold,
    /// then polls for confirmation at most ten times.
    pub fn airdrop_if_needed(&self, account: &Pubkey) -> anyhow::Result<Funding> {
        let balance = self
            .rpc
            .get_balance(account)
            .context("Failed to fetch balance")?;
        log::info!("Current balance is {balance}");

        if balance >= self.config.funding_threshold {
            return Ok(Funding::Sufficient { balance });
        }

        log::info!("Airdropping {} lamports...", self.config.airdrop_lamports);
        let signature = self
            .rpc
            .request_airdrop(account, self.config.airdrop_lamports)
            .context("Failed to request airdrop")?;

        // Wait for airdrop confirmation.
        let mut polls = 0;
        let confirmed = loop {
            polls += 1;
            if self
                .rpc
                .confirm_transaction(&signature)
                .context("Couldn't confirm airdrop")?
            {
                break true;
            }
            if polls >= AIRDROP_POLLS {
                log::warn!("Airdrop {signature} not confirmed yet, continuing");
                break false;
            }
            sleep(self.poll_interval);
        };

        Ok(Funding::Airdropped {
            balance,
            signature,
            confirmed,
        })
    }

    pub fn submit(&self, instruction: Instruction, signer: &Keypair) -> anyhow::Result<Signature> {
        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .context("Failed to fetch latest blockhash")?;
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&signer.pubkey()),
            &[signer],
            blockhash,
        );
        self.rpc
            .send_and_confirm_transaction(&transaction)
            .context("Failed transaction submission")
    }

    pub fn send_review(
        &self,
        signer: &Keypair,
        request: &ReviewRequest,
    ) -> anyhow::Result<SubmittedReview> {
        let program_id = self.config.program_id;
        let (address, bump) = request
            .address(&signer.pubkey(), &program_id)
            .with_context(|| format!("Failed to derive review address for {:?}", request.title))?;
        log::info!("PDA is: {address} (bump {bump})");

        let instruction = request
            .build_at(&signer.pubkey(), &address, &program_id)
            .with_context(|| format!("Failed to build review {:?}", request.title))?;
        let signature = self.submit(instruction, signer)?;
        log::info!("{}", self.config.cluster.explorer_tx_url(signature));

        Ok(SubmittedReview { address, signature })
    }

    pub fn fetch_review(&self, address: &Pubkey) -> anyhow::Result<MovieAccountState> {
        let data = self
            .rpc
            .get_account_data(address)
            .with_context(|| format!("Failed to fetch review account {address}"))?;
        MovieAccountState::from_account_data(&data)
            .with_context(|| format!("Account {address} does not hold a review"))
    }
}
