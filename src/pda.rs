//! Program derived address helpers for the movie review program.

use solana_program::pubkey::{MAX_SEED_LEN, MAX_SEEDS, Pubkey, PubkeyError};

use crate::error::DerivationError;

/// Seed limits enforced by the network when deriving program addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedLimits {
    /// Longest single seed, in bytes.
    pub max_seed_len: usize,
    /// Most seeds per derivation, counting the trailing bump seed.
    pub max_seeds: usize,
}

impl Default for SeedLimits {
    fn default() -> Self {
        Self {
            max_seed_len: MAX_SEED_LEN,
            max_seeds: MAX_SEEDS,
        }
    }
}

impl SeedLimits {
    pub fn check(&self, seeds: &[&[u8]]) -> Result<(), DerivationError> {
        // One slot is reserved for the bump seed
        if seeds.len() + 1 > self.max_seeds {
            return Err(DerivationError::TooManySeeds {
                count: seeds.len(),
                max: self.max_seeds,
            });
        }
        if let Some((index, seed)) = seeds
            .iter()
            .enumerate()
            .find(|(_, seed)| seed.len() > self.max_seed_len)
        {
            return Err(DerivationError::SeedTooLong {
                index,
                len: seed.len(),
                max: self.max_seed_len,
            });
        }
        Ok(())
    }
}

/// Finds the first bump seed, scanning from 255 down to 0, whose address is
/// off the ed25519 curve, and returns that address with its bump.
pub fn derive_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), DerivationError> {
    derive_address_with_limits(seeds, program_id, SeedLimits::default())
}

pub fn derive_address_with_limits(
    seeds: &[&[u8]],
    program_id: &Pubkey,
    limits: SeedLimits,
) -> Result<(Pubkey, u8), DerivationError> {
    limits.check(seeds)?;

    for bump in (0..=u8::MAX).rev() {
        let bump_seed = [bump];
        let seeds_with_bump: Vec<&[u8]> = seeds
            .iter()
            .copied()
            .chain(core::iter::once(bump_seed.as_slice()))
            .collect();

        match Pubkey::create_program_address(&seeds_with_bump, program_id) {
            Ok(address) => return Ok((address, bump)),
            // On curve, try the next bump
            Err(PubkeyError::InvalidSeeds) => continue,
            Err(err) => return Err(DerivationError::Rejected(format!("{err:?}"))),
        }
    }

    Err(DerivationError::NoValidAddress {
        seeds: seeds.iter().map(|seed| seed.to_vec()).collect(),
        program_id: *program_id,
    })
}

// Seeds: [reviewer pubkey, movie title]
// Each reviewer gets one review account per title
pub fn find_review_address(
    owner: &Pubkey,
    title: &str,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), DerivationError> {
    derive_address(&[owner.as_ref(), title.as_bytes()], program_id)
}
