// Import Borsh traits for serializing/deserializing data stored on-chain
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::program_pack::{IsInitialized, Sealed};

// The account state the movie review program stores in each review PDA
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MovieAccountState {
    pub is_initialized: bool,
    pub rating: u8,
    pub title: String,
    pub description: String,
}

impl MovieAccountState {
    // Bytes needed to store this state: flag, rating, and two length-prefixed strings
    pub fn space(title: &str, description: &str) -> usize {
        1 + 1 + (4 + title.len()) + (4 + description.len())
    }

    // Decode from account data that may be larger than the serialized state
    pub fn from_account_data(data: &[u8]) -> std::io::Result<Self> {
        Self::deserialize(&mut &data[..])
    }
}

impl Sealed for MovieAccountState {}

impl IsInitialized for MovieAccountState {
    fn is_initialized(&self) -> bool {
        self.is_initialized
    }
}
