//! Reference [`VerifierProvider`] implementations

use std::{
    collections::BTreeMap,
    sync::Arc,
};

use crate::{
    AlgorithmId,
    registry::VerifierProvider,
    token::SignedToken,
    verify::{
        AlgBoundVerifier,
        MacVerifier,
        SignatureVerifier,
        TokenVerifier,
    },
};

/// Services HMAC-family tokens with one shared secret.
///
/// Applicability is decided by the token's `alg` header: only identifiers in
/// the accepted set are serviced. The default constructor accepts `HS256`
/// alone; widening to `HS384`/`HS512` is an explicit choice.
pub struct SharedSecretProvider {
    secret: Vec<u8>,
    accepted: Vec<AlgorithmId>,
}

impl SharedSecretProvider {
    /// Instantiates a provider servicing `HS256` tokens only.
    pub fn hs256(secret: impl AsRef<[u8]>) -> Self {
        Self::new(secret, [AlgorithmId::HS256])
    }

    /// Instantiates a provider servicing the given HMAC identifiers.
    ///
    /// Identifiers outside the HMAC family are ignored at resolution time:
    /// [`MacVerifier`] construction fails for them and the provider answers
    /// "not applicable".
    pub fn new(
        secret: impl AsRef<[u8]>,
        accepted: impl IntoIterator<Item = AlgorithmId>,
    ) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            accepted: accepted.into_iter().collect(),
        }
    }
}

impl VerifierProvider for SharedSecretProvider {
    fn provide(&self, token: &SignedToken) -> Option<Box<dyn TokenVerifier + Send + Sync>> {
        let header = token.header().ok()?;
        if !self.accepted.contains(&header.alg) {
            return None;
        }
        let mac = MacVerifier::new(header.alg, &self.secret).ok()?;
        Some(Box::new(AlgBoundVerifier::from_verifier(mac)))
    }
}

/// Services tokens whose `kid` header names a known key.
///
/// Holds pre-built verifiers keyed by key id; the bound verifier still
/// enforces that the token's `alg` matches the stored verifier's algorithm,
/// so a token naming the right key with the wrong algorithm is rejected with
/// [`WrongAlgorithm`], not silently serviced.
///
/// [`WrongAlgorithm`]: crate::VerifyError::WrongAlgorithm
#[derive(Default)]
pub struct KeyIdProvider {
    keys: BTreeMap<String, Arc<dyn SignatureVerifier + Send + Sync>>,
}

impl KeyIdProvider {
    /// Instantiates a provider with no keys.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            keys: BTreeMap::new(),
        }
    }

    /// Adds a verifier under `key_id`, replacing any previous entry.
    pub fn add_key(
        &mut self,
        key_id: impl Into<String>,
        verifier: impl SignatureVerifier + Send + Sync + 'static,
    ) {
        self.keys.insert(key_id.into(), Arc::new(verifier));
    }

    /// Removes the verifier under `key_id`.
    pub fn remove_key(&mut self, key_id: impl AsRef<str>) {
        self.keys.remove(key_id.as_ref());
    }
}

impl VerifierProvider for KeyIdProvider {
    fn provide(&self, token: &SignedToken) -> Option<Box<dyn TokenVerifier + Send + Sync>> {
        let header = token.header().ok()?;
        let verifier = self.keys.get(header.kid.as_deref()?)?;
        Some(Box::new(AlgBoundVerifier::new(Arc::clone(verifier))))
    }
}

/// Unconditionally offers one bound verifier.
///
/// Useful as the sole entry of a single-issuer registry or as a terminal
/// catch-all; the bound verifier's algorithm check still applies.
pub struct StaticVerifierProvider {
    verifier: Arc<dyn SignatureVerifier + Send + Sync>,
}

impl StaticVerifierProvider {
    /// Instantiates the provider around `verifier`.
    pub fn new(verifier: impl SignatureVerifier + Send + Sync + 'static) -> Self {
        Self {
            verifier: Arc::new(verifier),
        }
    }
}

impl VerifierProvider for StaticVerifierProvider {
    fn provide(&self, _: &SignedToken) -> Option<Box<dyn TokenVerifier + Send + Sync>> {
        Some(Box::new(AlgBoundVerifier::new(Arc::clone(&self.verifier))))
    }
}
