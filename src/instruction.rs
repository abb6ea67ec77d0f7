use crate::codec::{LEN_PREFIX_SIZE, PayloadReader, PayloadWriter};
use crate::error::EncodingError;

// Operations the movie review program can perform
// The discriminant is the first byte of the instruction data
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ReviewVariant {
    // Create a new review account
    AddReview = 0,
    // Replace the rating and description of an existing review
    UpdateReview = 1,
}

impl From<ReviewVariant> for u8 {
    fn from(variant: ReviewVariant) -> Self {
        variant as u8
    }
}

impl TryFrom<u8> for ReviewVariant {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::AddReview),
            1 => Ok(Self::UpdateReview),
            unknown => Err(unknown),
        }
    }
}

// Instruction data sent to the movie review program
// Wire format: [variant: u8][title: u32 len + utf8][rating: u8][description: u32 len + utf8]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewPayload {
    pub variant: u8,
    pub title: String,
    pub rating: u8,
    pub description: String,
}

impl ReviewPayload {
    pub fn new(
        variant: impl Into<u8>,
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

    /// Exact number of bytes [`ReviewPayload::pack`] produces.
    pub fn encoded_len(&self) -> usize {
        1 + LEN_PREFIX_SIZE + self.title.len() + 1 + LEN_PREFIX_SIZE + self.description.len()
    }

    pub fn pack(&self) -> Result<Vec<u8>, EncodingError> {
        self.pack_with(PayloadWriter::with_capacity(self.encoded_len()))
    }

    /// Packs with a caller supplied writer, e.g. one with a reduced field limit.
    pub fn pack_with(&self, mut writer: PayloadWriter) -> Result<Vec<u8>, EncodingError> {
        writer.write_u8(self.variant);
        writer.write_str("title", &self.title)?;
        writer.write_u8(self.rating);
        writer.write_str("description", &self.description)?;
        Ok(writer.finish())
    }

    // Deserialize instruction data back into its fields
    // The whole input must be consumed, trailing bytes are an error
    pub fn unpack(input: &[u8]) -> Result<Self, EncodingError> {
        let mut reader = PayloadReader::new(input);
        let payload = Self {
            variant: reader.read_u8("variant")?,
            title: reader.read_str("title")?,
            rating: reader.read_u8("rating")?,
            description: reader.read_str("description")?,
        };
        reader.finish()?;
        Ok(payload)
    }

    pub fn review_variant(&self) -> Option<ReviewVariant> {
        ReviewVariant::try_from(self.variant).ok()
    }
}

/// Encodes a review instruction into its minimal wire form.
pub fn encode_payload(
    variant: u8,
    title: &str,
    rating: u8,
    description: &str,
) -> Result<Vec<u8>, EncodingError> {
    ReviewPayload::new(variant, title, rating, description).pack()
}
