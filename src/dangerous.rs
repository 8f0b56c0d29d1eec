//! Provides dangerous (i.e. non-signature-verifying) token acceptance.

use crate::{
    AlgorithmId,
    error::VerifyError,
    registry::VerifierProvider,
    token::SignedToken,
    verify::TokenVerifier,
};

/// Provider servicing unsigned tokens (`alg: "none"`, empty signature).
///
/// DANGER: accepting an unsigned token means trusting its contents with no
/// cryptographic backing whatsoever. This provider exists for closed test
/// environments and for protocols that carry their integrity elsewhere; it is
/// never registered by default, and registering it in a registry that also
/// serves real traffic defeats every other provider's purpose.
///
/// Applicability is deliberately narrow: the header must declare exactly
/// `none` and the signature segment must be empty. A token declaring `none`
/// while carrying signature bytes is malformed-by-intent and is not serviced.
pub struct AcceptUnsigned;

impl VerifierProvider for AcceptUnsigned {
    fn provide(&self, token: &SignedToken) -> Option<Box<dyn TokenVerifier + Send + Sync>> {
        let header = token.header().ok()?;
        if header.alg != AlgorithmId::NONE || !token.signature_bytes().is_empty() {
            return None;
        }
        Some(Box::new(UnsignedVerifier))
    }
}

struct UnsignedVerifier;

impl TokenVerifier for UnsignedVerifier {
    fn verify_token(&self, token: &SignedToken) -> Result<(), VerifyError> {
        let header = token.header()?;
        if header.alg != AlgorithmId::NONE {
            return Err(VerifyError::WrongAlgorithm);
        }
        if token.signature_bytes().is_empty() {
            Ok(())
        } else {
            Err(VerifyError::InvalidSignature)
        }
    }
}
