use thiserror::Error;

use crate::AlgorithmId;

/// Errors raised while resolving and executing token or response verification
///
/// Every variant is terminal: failures propagate to the caller unmodified and
/// must be treated as "do not trust this token/response". There is no retry or
/// fallback at this layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// Error raised by [`VerifierRegistry`] when no registered provider
    /// recognizes the token
    ///
    /// [`VerifierRegistry`]: crate::VerifierRegistry
    #[error("no registered provider recognizes this token")]
    NoApplicableProvider,

    /// Error raised by a [`SignatureVerifier`] when the signature check
    /// mathematically failed
    ///
    /// [`SignatureVerifier`]: crate::verify::SignatureVerifier
    #[error("invalid signature")]
    InvalidSignature,

    /// Error raised during verifier construction when key material cannot be
    /// parsed or assembled, before any verification is attempted
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(&'static str),

    /// Error raised when the algorithm is recognized but carries no
    /// implementation yet
    #[error("algorithm {0} is recognized but not implemented")]
    UnimplementedAlgorithm(AlgorithmId),

    /// Error raised when a verifier is constructed with an algorithm outside
    /// its family
    #[error("algorithm {0} is not supported by this verifier")]
    UnsupportedAlgorithm(AlgorithmId),

    /// Error raised when the token `alg` header does not match the algorithm
    /// the bound verifier was constructed for
    #[error("token 'alg' header does not match the verifier algorithm")]
    WrongAlgorithm,

    /// Error raised when a token segment is not valid base64 url-safe encoded
    #[error("token must use base64 url-safe encoding")]
    InvalidEncoding,

    /// Error raised when the compact form does not contain exactly three
    /// dot-delimited segments
    #[error("token contained wrong number of dot-delimited segments")]
    InvalidSegmentCount(#[from] SplitError),

    /// Error raised when the token header is not a JSON object carrying an
    /// `alg` field
    #[error("token header could not be deserialized")]
    HeaderMalformed,

    /// Error raised by a response check when the transport layer reported a
    /// failure
    #[error("transport failure: {0}")]
    TransportFailure(String),

    /// Error raised by a response check when the response status code is
    /// outside the accepted range
    #[error("unexpected response status code {0}")]
    UnexpectedStatus(u16),

    /// Generic rejection raised by an arbitrary response check
    #[error("response rejected: {0}")]
    ResponseRejected(&'static str),
}

/// Errors raised while segmenting the compact token form
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SplitError {
    /// Error raised when the compact form contains fewer than three segments
    #[error("token contained fewer than three segments")]
    Undersized,

    /// Error raised when the compact form contains more than three segments
    #[error("token contained more than three segments")]
    Oversized,
}
