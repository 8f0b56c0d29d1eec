use crate::{
    AlgorithmId,
    error::VerifyError,
    verify::SignatureVerifier,
};

/// Declared-but-unimplemented verifier for the ECDSA family (`ES256`,
/// `ES384`, `ES512`).
///
/// Construction succeeds for the recognized identifiers so that registries
/// and providers can be wired up ahead of the implementation, but every
/// verification attempt returns [`VerifyError::UnimplementedAlgorithm`].
/// Callers can therefore distinguish "signature rejected" from "algorithm not
/// supported yet", and the process never aborts on an ES-family token.
#[derive(Debug)]
pub struct EcdsaVerifier {
    alg: AlgorithmId,
}

impl EcdsaVerifier {
    /// Declares a verifier for `alg`.
    ///
    /// # Errors
    ///
    /// - [`VerifyError::UnsupportedAlgorithm`] when `alg` is not one of
    ///   `ES256`, `ES384`, `ES512`
    pub fn new(alg: AlgorithmId) -> Result<Self, VerifyError> {
        match alg.as_str() {
            "ES256" | "ES384" | "ES512" => Ok(Self { alg }),
            _ => Err(VerifyError::UnsupportedAlgorithm(alg)),
        }
    }
}

impl SignatureVerifier for EcdsaVerifier {
    fn algorithm(&self) -> AlgorithmId {
        self.alg.clone()
    }

    fn verify(&self, _message: &[u8], _signature: &[u8]) -> Result<(), VerifyError> {
        Err(VerifyError::UnimplementedAlgorithm(self.alg.clone()))
    }
}
