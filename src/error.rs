use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;
use thiserror::Error; // For creating custom error types with descriptions

// Errors raised while writing or reading the review instruction payload
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("{field} is {len} bytes, the length prefix allows at most {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("payload ended while reading {field}: needed {needed} bytes, {remaining} left")]
    UnexpectedEnd {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    #[error("{0} trailing bytes after the description")]
    TrailingBytes(usize),
}

// Errors raised while deriving a program address
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DerivationError {
    #[error("seed {index} is {len} bytes, the maximum seed length is {max}")]
    SeedTooLong { index: usize, len: usize, max: usize },

    #[error("{count} seeds plus the bump seed exceed the maximum of {max} seeds")]
    TooManySeeds { count: usize, max: usize },

    #[error(
        "no bump seed yields an off-curve address for seeds {seeds:?} under program {program_id}"
    )]
    NoValidAddress {
        seeds: Vec<Vec<u8>>,
        program_id: Pubkey,
    },

    #[error("address derivation rejected the seeds: {0}")]
    Rejected(String),
}

// Everything that can go wrong while building a review request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Derivation(#[from] DerivationError),
}

// A program receiving a malformed payload rejects it as invalid instruction data
impl From<EncodingError> for ProgramError {
    fn from(_: EncodingError) -> Self {
        ProgramError::InvalidInstructionData
    }
}
