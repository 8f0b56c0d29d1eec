//! Compact signed-token representation
//!
//! [`SignedToken`] wraps one `header.payload.signature` compact string and
//! exposes its segments raw and decoded. No claim semantics live here: the
//! payload is carried as opaque bytes and only the JOSE header's `alg`, `kid`,
//! and `typ` fields are surfaced, because providers need them to decide
//! applicability.

mod split;

pub(crate) use split::SplitToken;

use base64_simd::URL_SAFE_NO_PAD as b64;

use crate::{
    AlgorithmId,
    error::VerifyError,
};

/// An immutable, structurally validated compact signed token.
///
/// Construction segments the compact form and base64url-decodes all three
/// segments up front; accessors are then infallible slices. Header JSON is
/// parsed on demand via [`SignedToken::header`].
#[derive(Debug, Clone)]
pub struct SignedToken {
    compact: String,
    signing_input_len: usize,
    header_segment_len: usize,
    /// Decoded header, payload, and signature in one buffer.
    decoded: Vec<u8>,
    header_len: usize,
    payload_end: usize,
}

impl SignedToken {
    /// Parses a compact `header.payload.signature` string.
    ///
    /// # Errors
    ///
    /// - [`VerifyError::InvalidSegmentCount`] when the input does not contain
    ///   exactly three dot-delimited segments
    /// - [`VerifyError::InvalidEncoding`] when any segment is not valid base64
    ///   url-safe encoded
    pub fn parse(compact: impl Into<String>) -> Result<Self, VerifyError> {
        let compact = compact.into();
        let split = SplitToken::try_from(compact.as_bytes())?;

        let mut decoded = Vec::with_capacity(
            b64.estimated_decoded_length(split.header_segment().len())
                + b64.estimated_decoded_length(split.payload_segment().len())
                + b64.estimated_decoded_length(split.signature_segment().len()),
        );
        b64.decode_append(split.header_segment(), &mut decoded)
            .map_err(|_| VerifyError::InvalidEncoding)?;
        let header_len = decoded.len();
        b64.decode_append(split.payload_segment(), &mut decoded)
            .map_err(|_| VerifyError::InvalidEncoding)?;
        let payload_end = decoded.len();
        b64.decode_append(split.signature_segment(), &mut decoded)
            .map_err(|_| VerifyError::InvalidEncoding)?;

        let signing_input_len = split.signing_input_len();
        let header_segment_len = split.header_segment().len();
        Ok(Self {
            compact,
            signing_input_len,
            header_segment_len,
            decoded,
            header_len,
            payload_end,
        })
    }

    /// Returns the full compact form.
    #[must_use]
    pub fn compact(&self) -> &str {
        &self.compact
    }

    /// Returns the raw (still encoded) header segment.
    #[must_use]
    pub fn header_segment(&self) -> &[u8] {
        &self.compact.as_bytes()[..self.header_segment_len]
    }

    /// Returns the raw (still encoded) payload segment.
    #[must_use]
    pub fn payload_segment(&self) -> &[u8] {
        &self.compact.as_bytes()[self.header_segment_len + 1..self.signing_input_len]
    }

    /// Returns the raw (still encoded) signature segment.
    #[must_use]
    pub fn signature_segment(&self) -> &[u8] {
        &self.compact.as_bytes()[self.signing_input_len + 1..]
    }

    /// Returns the signing input: the encoded `header.payload` bytes the
    /// signature was computed over, per RFC 7515 section 5.1.
    #[must_use]
    pub fn signing_input(&self) -> &[u8] {
        &self.compact.as_bytes()[..self.signing_input_len]
    }

    /// Returns the decoded header bytes.
    #[must_use]
    pub fn header_bytes(&self) -> &[u8] {
        &self.decoded[..self.header_len]
    }

    /// Returns the decoded payload bytes.
    #[must_use]
    pub fn payload_bytes(&self) -> &[u8] {
        &self.decoded[self.header_len..self.payload_end]
    }

    /// Returns the decoded signature bytes.
    #[must_use]
    pub fn signature_bytes(&self) -> &[u8] {
        &self.decoded[self.payload_end..]
    }

    /// Parses the JOSE header fields providers consult.
    ///
    /// # Errors
    ///
    /// - [`VerifyError::HeaderMalformed`] when the decoded header is not a
    ///   JSON object carrying an `alg` string
    pub fn header(&self) -> Result<TokenHeader, VerifyError> {
        serde_json::from_slice(self.header_bytes()).map_err(|_| VerifyError::HeaderMalformed)
    }
}

/// The JOSE header fields consulted during trust resolution.
///
/// Unknown header fields are ignored; claim-level parsing is a collaborator's
/// concern, not this crate's.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct TokenHeader {
    /// `alg` (Algorithm) header parameter, RFC 7515 section 4.1.1
    pub alg: AlgorithmId,

    /// `kid` (Key ID) header parameter, RFC 7515 section 4.1.4
    #[serde(default)]
    pub kid: Option<String>,

    /// `typ` (Type) header parameter, RFC 7515 section 4.1.9
    #[serde(default)]
    pub typ: Option<String>,
}
