use aws_lc_rs::signature::{
    ParsedPublicKey,
    RSA_PKCS1_2048_8192_SHA256,
    RSA_PKCS1_2048_8192_SHA384,
    RSA_PKCS1_2048_8192_SHA512,
    VerificationAlgorithm,
};

use crate::{
    AlgorithmId,
    error::VerifyError,
    verify::{
        SignatureVerifier,
        keys,
    },
};

/// Declared RSA key size for the component construction path.
///
/// The modulus handed to [`RsaVerifier::from_components`] must match the
/// declared size exactly; a mismatch is invalid key material, not a smaller
/// key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsaKeySize {
    /// 2048-bit modulus
    Rsa2048,
    /// 3072-bit modulus
    Rsa3072,
    /// 4096-bit modulus
    Rsa4096,
}

impl RsaKeySize {
    const fn modulus_len(self) -> usize {
        match self {
            Self::Rsa2048 => 256,
            Self::Rsa3072 => 384,
            Self::Rsa4096 => 512,
        }
    }
}

/// Public-key verifier for the RSASSA-PKCS1-v1_5 family (`RS256`, `RS384`,
/// `RS512`).
///
/// All three construction paths normalize to one parsed public key, so a
/// verifier built from raw components and one built from a certificate
/// carrying the same key behave identically.
#[derive(Debug)]
pub struct RsaVerifier {
    alg: AlgorithmId,
    key: ParsedPublicKey,
}

impl RsaVerifier {
    /// Builds a verifier from a pre-built DER `SubjectPublicKeyInfo` blob.
    ///
    /// # Errors
    ///
    /// - [`VerifyError::UnsupportedAlgorithm`] when `alg` is not one of
    ///   `RS256`, `RS384`, `RS512`
    /// - [`VerifyError::InvalidKeyMaterial`] when the blob is not an RSA
    ///   public key the crypto backend accepts
    pub fn from_spki_der(alg: AlgorithmId, spki_der: &[u8]) -> Result<Self, VerifyError> {
        let params = Self::params(&alg)?;
        let key = ParsedPublicKey::new(params, spki_der).map_err(|_| {
            VerifyError::InvalidKeyMaterial("public key rejected by crypto backend")
        })?;
        Ok(Self { alg, key })
    }

    /// Builds a verifier from raw big-endian modulus and exponent bytes plus
    /// the declared key size.
    ///
    /// # Errors
    ///
    /// - [`VerifyError::UnsupportedAlgorithm`] when `alg` is not one of
    ///   `RS256`, `RS384`, `RS512`
    /// - [`VerifyError::InvalidKeyMaterial`] when the components do not
    ///   assemble into a key of the declared size
    pub fn from_components(
        alg: AlgorithmId,
        n: &[u8],
        e: &[u8],
        size: RsaKeySize,
    ) -> Result<Self, VerifyError> {
        let spki_der = keys::rsa_spki_from_components(n, e)?;
        // sign-padding zeros do not count toward the canonical modulus length
        let modulus_len = n.iter().position(|&b| b != 0).map_or(0, |i| n.len() - i);
        if modulus_len != size.modulus_len() {
            return Err(VerifyError::InvalidKeyMaterial(
                "modulus length does not match the declared key size",
            ));
        }
        Self::from_spki_der(alg, &spki_der)
    }

    /// Builds a verifier from a DER X.509 certificate, extracting its subject
    /// public key.
    ///
    /// The certificate is a key container here: no chain building, expiry, or
    /// name checking happens. Trust in the certificate itself is the caller's
    /// problem.
    ///
    /// # Errors
    ///
    /// - [`VerifyError::UnsupportedAlgorithm`] when `alg` is not one of
    ///   `RS256`, `RS384`, `RS512`
    /// - [`VerifyError::InvalidKeyMaterial`] when the blob is not a valid
    ///   certificate or its subject key is not RSA
    pub fn from_certificate_der(alg: AlgorithmId, cert_der: &[u8]) -> Result<Self, VerifyError> {
        let spki_der = keys::spki_from_certificate(cert_der)?;
        Self::from_spki_der(alg, &spki_der)
    }

    fn params(alg: &AlgorithmId) -> Result<&'static dyn VerificationAlgorithm, VerifyError> {
        match alg.as_str() {
            "RS256" => Ok(&RSA_PKCS1_2048_8192_SHA256),
            "RS384" => Ok(&RSA_PKCS1_2048_8192_SHA384),
            "RS512" => Ok(&RSA_PKCS1_2048_8192_SHA512),
            _ => Err(VerifyError::UnsupportedAlgorithm(alg.clone())),
        }
    }
}

impl SignatureVerifier for RsaVerifier {
    fn algorithm(&self) -> AlgorithmId {
        self.alg.clone()
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), VerifyError> {
        self.key
            .verify_sig(message, signature)
            .map_err(|_| VerifyError::InvalidSignature)
    }
}
