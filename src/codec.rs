//! Little-endian binary writer and reader for instruction payloads.
//!
//! Strings are written as a 4-byte little-endian length prefix followed by
//! their UTF-8 bytes, bytes are written as-is. The writer grows its buffer
//! only by what it writes, so the finished payload never carries padding.

use crate::error::EncodingError;

// Largest string the 4-byte length prefix can describe
pub const MAX_FIELD_LEN: usize = u32::MAX as usize;

// Size of the length prefix in front of every string field
pub const LEN_PREFIX_SIZE: usize = 4;

#[derive(Debug)]
pub struct PayloadWriter {
    buf: Vec<u8>,
    max_field_len: usize,
}

impl PayloadWriter {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            max_field_len: MAX_FIELD_LEN,
        }
    }

    /// Lowers the string length limit below the prefix's range.
    ///
    /// Limits above [`MAX_FIELD_LEN`] are clamped, the prefix cannot describe them.
    pub fn with_max_field_len(mut self, max_field_len: usize) -> Self {
        self.max_field_len = max_field_len.min(MAX_FIELD_LEN);
        self
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn write_str(
        &mut self,
        field: &'static str,
        value: &str,
    ) -> Result<&mut Self, EncodingError> {
        let len = value.len();
        if len > self.max_field_len {
            return Err(EncodingError::FieldTooLong {
                field,
                len,
                max: self.max_field_len,
            });
        }
        let prefix = u32::try_from(len).map_err(|_| EncodingError::FieldTooLong {
            field,
            len,
            max: MAX_FIELD_LEN,
        })?;

        self.buf.extend_from_slice(&prefix.to_le_bytes());
        self.buf.extend_from_slice(value.as_bytes());
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for PayloadWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct PayloadReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> PayloadReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn take(&mut self, field: &'static str, needed: usize) -> Result<&'a [u8], EncodingError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(EncodingError::UnexpectedEnd {
                field,
                needed,
                remaining,
            });
        }
        let bytes = &self.data[self.offset..self.offset + needed];
        self.offset += needed;
        Ok(bytes)
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8, EncodingError> {
        Ok(self.take(field, 1)?[0])
    }

    pub fn read_str(&mut self, field: &'static str) -> Result<String, EncodingError> {
        let prefix = self.take(field, LEN_PREFIX_SIZE)?;
        let len = u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;
        let bytes = self.take(field, len)?;
        core::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| EncodingError::InvalidUtf8 { field })
    }

    /// Consumes the reader, failing if any bytes were left unread.
    pub fn finish(self) -> Result<(), EncodingError> {
        match self.remaining() {
            0 => Ok(()),
            extra => Err(EncodingError::TrailingBytes(extra)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_length_prefixed_strings() {
        let mut writer = PayloadWriter::new();
        writer.write_u8(7).write_str("title", "abc").unwrap();
        assert_eq!(writer.finish(), vec![7, 3, 0, 0, 0, b'a', b'b', b'c']);
    }

    #[test]
    fn empty_string_is_just_a_prefix() {
        let mut writer = PayloadWriter::new();
        writer.write_str("description", "").unwrap();
        assert_eq!(writer.finish(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn reduced_limit_rejects_long_fields() {
        let mut writer = PayloadWriter::new().with_max_field_len(4);
        writer.write_str("title", "four").unwrap();
        let err = writer.write_str("description", "fives").unwrap_err();
        assert_eq!(
            err,
            EncodingError::FieldTooLong {
                field: "description",
                len: 5,
                max: 4
            }
        );
        // A rejected field leaves nothing behind
        assert_eq!(writer.len(), LEN_PREFIX_SIZE + 4);
    }

    #[test]
    fn rejected_field_reports_the_writer_state() {
        let mut writer = PayloadWriter::new().with_max_field_len(1);
        let err = writer.write_str("title", "ab").unwrap_err();
        assert!(matches!(err, EncodingError::FieldTooLong { field: "title", .. }));
        assert!(format!("{writer:?}").contains("max_field_len: 1"));
    }

    #[test]
    fn limit_is_clamped_to_prefix_range() {
        let writer = PayloadWriter::new().with_max_field_len(usize::MAX);
        assert_eq!(writer.max_field_len, MAX_FIELD_LEN);
    }

    #[test]
    fn reader_reports_truncation() {
        // Prefix claims 10 bytes but only 2 follow
        let data = [10, 0, 0, 0, b'h', b'i'];
        let mut reader = PayloadReader::new(&data);
        assert_eq!(
            reader.read_str("title").unwrap_err(),
            EncodingError::UnexpectedEnd {
                field: "title",
                needed: 10,
                remaining: 2
            }
        );
    }

    #[test]
    fn reader_rejects_invalid_utf8() {
        let data = [2, 0, 0, 0, 0xc3, 0x28];
        let mut reader = PayloadReader::new(&data);
        assert_eq!(
            reader.read_str("description").unwrap_err(),
            EncodingError::InvalidUtf8 {
                field: "description"
            }
        );
    }

    #[test]
    fn reader_rejects_trailing_bytes() {
        let data = [1, 2, 3];
        let mut reader = PayloadReader::new(&data);
        assert_eq!(reader.read_u8("variant").unwrap(), 1);
        assert_eq!(reader.finish().unwrap_err(), EncodingError::TrailingBytes(2));
    }
}
