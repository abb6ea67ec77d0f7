//! Loads the signing keypair, creating and saving one on first use.
//!
//! Keypair files hold the 64 secret key bytes as a JSON array, the same
//! format the solana CLI writes.

use std::fs;
use std::path::Path;

use anyhow::Context;
use solana_sdk::signature::{Keypair, Signer};

pub fn load_or_create(path: &Path) -> anyhow::Result<Keypair> {
    if path.exists() {
        return read_keypair(path);
    }

    log::info!("Creating keypair file {}", path.display());
    let keypair = Keypair::new();
    write_keypair(&keypair, path)?;
    Ok(keypair)
}

pub fn read_keypair(path: &Path) -> anyhow::Result<Keypair> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read keypair file {}", path.display()))?;
    let bytes: Vec<u8> = serde_json::from_str(&contents)
        .with_context(|| format!("Keypair file {} is not a JSON byte array", path.display()))?;
    let keypair = Keypair::try_from(bytes.as_slice())
        .map_err(|err| anyhow::anyhow!("Invalid keypair in {}: {err}", path.display()))?;
    log::debug!("Loaded signer {}", keypair.pubkey());
    Ok(keypair)
}

pub fn write_keypair(keypair: &Keypair, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string(&keypair.to_bytes().to_vec())?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
