//! Submits a movie review to the movie review program.

use std::path::PathBuf;
use std::time::SystemTime;

use anyhow::Result;
use clap::Parser;
use movie_review::client::ReviewClient;
use movie_review::config::{ClientConfig, Cluster, DEFAULT_PROGRAM_ID, LAMPORTS_PER_SOL};
use movie_review::keypair;
use movie_review::request::{ReviewRequest, suffixed_title};
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::Signer;

#[derive(Parser, Debug)]
#[command(name = "movie-review")]
#[command(about = "Submit a movie review to a Solana cluster")]
struct Args {
    /// Cluster moniker (devnet, testnet, localnet) or RPC URL
    #[arg(short, long, default_value = "devnet")]
    url: Cluster,
    #[arg(short, long, default_value = "review-keypair.json")]
    keypair: PathBuf,
    #[arg(long, default_value = DEFAULT_PROGRAM_ID)]
    program_id: Pubkey,
    /// Airdrop when the balance is below this many lamports
    #[arg(long, default_value_t = LAMPORTS_PER_SOL)]
    funding_threshold: u64,
    #[arg(long, default_value_t = LAMPORTS_PER_SOL)]
    airdrop_lamports: u64,
    #[arg(short, long, default_value = "Braveheart")]
    title: String,
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=5))]
    rating: u8,
    #[arg(short, long, default_value = "A great movie")]
    description: String,
    /// Append a time-derived number to the title so reruns create new reviews
    #[arg(long)]
    unique: bool,
    /// Update an existing review instead of adding one
    #[arg(long)]
    update: bool,
}

fn main() -> Result<()> {
    solana_logger::setup_with_default("info");
    let args = Args::parse();

    let config = ClientConfig::new(args.url, args.program_id)
        .with_funding(args.funding_threshold, args.airdrop_lamports);
    let client = ReviewClient::new(config);

    let signer = keypair::load_or_create(&args.keypair)?;
    log::info!("Signer is {}", signer.pubkey());
    client.airdrop_if_needed(&signer.pubkey())?;

    let title = if args.unique {
        suffixed_title(&args.title, SystemTime::now())
    } else {
        args.title
    };
    let request = if args.update {
        ReviewRequest::update(title, args.rating, args.description)
    } else {
        ReviewRequest::add(title, args.rating, args.description)
    };

    let submitted = client.send_review(&signer, &request)?;
    let review = client.fetch_review(&submitted.address)?;
    log::info!(
        "Stored review: {} ({}/5) {}",
        review.title,
        review.rating,
        review.description
    );

    log::info!("Finished successfully");
    Ok(())
}
