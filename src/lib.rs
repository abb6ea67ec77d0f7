//! Client for the movie review program.
//!
//! Encodes review instructions, derives review addresses and submits them to
//! a Solana cluster.

// Module declarations - organize code into separate files
pub mod client; // RPC submission, funding and read-back
pub mod codec; // Length-prefixed binary writer and reader
pub mod config; // Cluster selection and client settings
pub mod error; // Encoding and derivation errors
pub mod instruction; // Review instruction payload
pub mod keypair; // Signer keypair file handling
pub mod pda; // Review address derivation
pub mod request; // Instruction assembly
pub mod state; // Review account state

pub use error::{DerivationError, EncodingError, ReviewError};
pub use instruction::{ReviewPayload, ReviewVariant, encode_payload};
pub use pda::{SeedLimits, derive_address, find_review_address};
pub use request::{ReviewRequest, assemble_request, build_account_refs};
