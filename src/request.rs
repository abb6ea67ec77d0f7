//! Assembles the movie review instruction: payload, review address and the
//! accounts the program expects.

use std::time::{SystemTime, UNIX_EPOCH};

use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;

use crate::error::{DerivationError, EncodingError, ReviewError};
use crate::instruction::{ReviewPayload, ReviewVariant};
use crate::pda::find_review_address;

/// A review to submit. The review address is not stored, it is derived from
/// the owner, the title and the program on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRequest {
    pub variant: u8,
    pub title: String,
    pub rating: u8,
    pub description: String,
}

impl ReviewRequest {
    pub fn add(title: impl Into<String>, rating: u8, description: impl Into<String>) -> Self {
        Self::new(ReviewVariant::AddReview, title, rating, description)
    }

    pub fn update(title: impl Into<String>, rating: u8, description: impl Into<String>) -> Self {
        Self::new(ReviewVariant::UpdateReview, title, rating, description)
    }

    pub fn new(
        variant: ReviewVariant,
        title: impl Into<String>,
        rating: u8,
        description: impl Into<String>,
    ) -> Self {
        Self {
            variant: variant.into(),
            title: title.into(),
            rating,
            description: description.into(),
        }
    }

    pub fn payload(&self) -> ReviewPayload {
        ReviewPayload::new(
            self.variant,
            self.title.clone(),
            self.rating,
            self.description.clone(),
        )
    }

    pub fn encode(&self) -> Result<Vec<u8>, EncodingError> {
        self.payload().pack()
    }

    pub fn address(
        &self,
        owner: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<(Pubkey, u8), DerivationError> {
        find_review_address(owner, &self.title, program_id)
    }

    /// Encodes the payload, derives the review address and wraps both into
    /// an instruction signed by `owner`.
    pub fn build(&self, owner: &Pubkey, program_id: &Pubkey) -> Result<Instruction, ReviewError> {
        let (review, _bump) = self.address(owner, program_id)?;
        Ok(self.build_at(owner, &review, program_id)?)
    }

    /// Like [`ReviewRequest::build`] for a review address the caller already derived.
    pub fn build_at(
        &self,
        owner: &Pubkey,
        review: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<Instruction, EncodingError> {
        let data = self.encode()?;
        let accounts = build_account_refs(owner, review, &solana_system_interface::program::ID);
        Ok(assemble_request(program_id, data, accounts))
    }
}

// Expected accounts in order:
// 1. reviewer (signer, read-only)
// 2. review PDA (writable, created or updated by the program)
// 3. system program (read-only, used to create the PDA)
pub fn build_account_refs(
    owner: &Pubkey,
    review: &Pubkey,
    system_program: &Pubkey,
) -> [AccountMeta; 3] {
    [
        AccountMeta::new_readonly(*owner, true),
        AccountMeta::new(*review, false),
        AccountMeta::new_readonly(*system_program, false),
    ]
}

pub fn assemble_request(
    program_id: &Pubkey,
    data: Vec<u8>,
    accounts: [AccountMeta; 3],
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: accounts.to_vec(),
        data,
    }
}

/// Appends a time-derived number to `base` so repeated runs target fresh
/// review accounts. Two calls within the same microsecond, or a million
/// microseconds apart, produce the same title.
pub fn suffixed_title(base: &str, now: SystemTime) -> String {
    let micros = now
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_micros())
        .unwrap_or_default();
    format!("{base}{}", micros % 1_000_000)
}
