use aws_lc_rs::hmac::{
    Algorithm as HmacAlgorithm,
    HMAC_SHA256,
    HMAC_SHA384,
    HMAC_SHA512,
    Key as HmacKey,
    verify as verify_hmac,
};

use crate::{
    AlgorithmId,
    error::VerifyError,
    verify::SignatureVerifier,
};

/// Shared-secret verifier for the HMAC family (`HS256`, `HS384`, `HS512`).
///
/// The comparison against the presented signature happens inside
/// [`aws_lc_rs::hmac::verify`], which is constant-time; no byte-wise equality
/// on MAC output exists in this crate.
#[derive(Debug)]
pub struct MacVerifier {
    alg: AlgorithmId,
    key: HmacKey,
}

impl MacVerifier {
    /// Builds a verifier for `alg` over `secret`.
    ///
    /// # Errors
    ///
    /// - [`VerifyError::UnsupportedAlgorithm`] when `alg` is not one of
    ///   `HS256`, `HS384`, `HS512`
    pub fn new(alg: AlgorithmId, secret: impl AsRef<[u8]>) -> Result<Self, VerifyError> {
        let hmac_alg =
            Self::digest(&alg).ok_or_else(|| VerifyError::UnsupportedAlgorithm(alg.clone()))?;
        Ok(Self {
            alg,
            key: HmacKey::new(hmac_alg, secret.as_ref()),
        })
    }

    /// Builds an `HS256` verifier over `secret`.
    #[must_use]
    pub fn sha256(secret: impl AsRef<[u8]>) -> Self {
        Self {
            alg: AlgorithmId::HS256,
            key: HmacKey::new(HMAC_SHA256, secret.as_ref()),
        }
    }

    fn digest(alg: &AlgorithmId) -> Option<HmacAlgorithm> {
        match alg.as_str() {
            "HS256" => Some(HMAC_SHA256),
            "HS384" => Some(HMAC_SHA384),
            "HS512" => Some(HMAC_SHA512),
            _ => None,
        }
    }
}

impl SignatureVerifier for MacVerifier {
    fn algorithm(&self) -> AlgorithmId {
        self.alg.clone()
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), VerifyError> {
        verify_hmac(&self.key, message, signature).map_err(|_| VerifyError::InvalidSignature)
    }
}
