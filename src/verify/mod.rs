//! Signature verification capabilities
//!
//! [`SignatureVerifier`] checks a signature over raw bytes with key material
//! fixed at construction; [`TokenVerifier`] lifts that to a whole
//! [`SignedToken`]. Each algorithm family is a standalone verifier so adding
//! an algorithm never touches an existing one.

mod ecdsa;
mod hmac;
mod keys;
mod rsa;

pub use ecdsa::EcdsaVerifier;
pub use hmac::MacVerifier;
pub use rsa::{
    RsaKeySize,
    RsaVerifier,
};

use std::sync::Arc;

use crate::{
    AlgorithmId,
    error::VerifyError,
    token::SignedToken,
};

/// Checks a signature over raw input bytes with key material fixed at
/// construction.
///
/// Implementations are stateless per call: concurrent `verify` calls against
/// one verifier are safe.
pub trait SignatureVerifier {
    /// Returns the algorithm this verifier was constructed for.
    fn algorithm(&self) -> AlgorithmId;

    /// Verify `signature` over `message`.
    ///
    /// # Parameters
    ///
    /// - `message` is the raw byte sequence the signature was computed over.
    ///   For compact tokens this is the encoded `header.payload` signing
    ///   input, see [`SignedToken::signing_input`].
    /// - `signature` is the decoded signature bytes.
    ///
    /// # Errors
    ///
    /// This method MUST return an error when the signature is invalid or
    /// cannot be checked:
    ///
    /// - [`VerifyError::InvalidSignature`] when the check mathematically
    ///   failed
    /// - [`VerifyError::UnimplementedAlgorithm`] when the algorithm is
    ///   recognized but carries no implementation
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), VerifyError>;
}

/// Verifies a whole [`SignedToken`].
///
/// Implementations inspect the token header to confirm the declared algorithm
/// and delegate the byte-level check to a [`SignatureVerifier`].
pub trait TokenVerifier {
    /// Verify the token's signature.
    ///
    /// # Errors
    ///
    /// - [`VerifyError::HeaderMalformed`] when the token header cannot be
    ///   read
    /// - [`VerifyError::WrongAlgorithm`] when the header `alg` does not match
    ///   the algorithm verification would be attempted with
    /// - Any error raised by the underlying [`SignatureVerifier`]
    fn verify_token(&self, token: &SignedToken) -> Result<(), VerifyError>;
}

/// Standard [`TokenVerifier`] binding one [`SignatureVerifier`].
///
/// The header `alg` check is non-negotiable: a token declaring a different
/// algorithm than the bound verifier is rejected before any cryptographic
/// work, closing the algorithm-confusion hole.
pub struct AlgBoundVerifier {
    verifier: Arc<dyn SignatureVerifier + Send + Sync>,
}

impl AlgBoundVerifier {
    /// Binds an already-shared verifier.
    #[must_use]
    pub fn new(verifier: Arc<dyn SignatureVerifier + Send + Sync>) -> Self {
        Self { verifier }
    }

    /// Binds an owned verifier.
    pub fn from_verifier(verifier: impl SignatureVerifier + Send + Sync + 'static) -> Self {
        Self {
            verifier: Arc::new(verifier),
        }
    }
}

impl TokenVerifier for AlgBoundVerifier {
    fn verify_token(&self, token: &SignedToken) -> Result<(), VerifyError> {
        let header = token.header()?;
        if header.alg != self.verifier.algorithm() {
            return Err(VerifyError::WrongAlgorithm);
        }
        self.verifier
            .verify(token.signing_input(), token.signature_bytes())
    }
}
