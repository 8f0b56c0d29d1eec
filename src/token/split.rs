use memchr::memchr_iter;

use crate::error::SplitError;

/// Zero-copy segmentation of a compact `header.payload.signature` byte string.
///
/// Only structural segmentation happens here: exactly two dots are located and
/// the three segments are exposed as subslices. Empty segments are accepted;
/// whether an empty signature is meaningful is a provider decision.
#[derive(Debug)]
pub(crate) struct SplitToken<'a> {
    data: &'a [u8],
    first_dot: usize,
    second_dot: usize,
}

impl<'a> TryFrom<&'a [u8]> for SplitToken<'a> {
    type Error = SplitError;

    fn try_from(data: &'a [u8]) -> Result<Self, Self::Error> {
        let mut dots = memchr_iter(b'.', data);
        let first_dot = dots.next().ok_or(SplitError::Undersized)?;
        let second_dot = dots.next().ok_or(SplitError::Undersized)?;
        if dots.next().is_some() {
            return Err(SplitError::Oversized);
        }
        Ok(Self {
            data,
            first_dot,
            second_dot,
        })
    }
}

impl SplitToken<'_> {
    /// Byte offset of the second dot; everything before it is the signing
    /// input per RFC 7515 section 5.1.
    pub(crate) fn signing_input_len(&self) -> usize {
        self.second_dot
    }

    pub(crate) fn header_segment(&self) -> &[u8] {
        &self.data[..self.first_dot]
    }

    pub(crate) fn payload_segment(&self) -> &[u8] {
        &self.data[self.first_dot + 1..self.second_dot]
    }

    pub(crate) fn signature_segment(&self) -> &[u8] {
        &self.data[self.second_dot + 1..]
    }
}
