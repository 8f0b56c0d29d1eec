//! Provider registry: resolves which verifier applies to a token
//!
//! A [`VerifierProvider`] either recognizes a token and returns a bound
//! [`TokenVerifier`] or signals "not applicable". The [`VerifierRegistry`]
//! consults its providers in registration order and the first match wins.
//! Registration order is the sole priority signal; there is no scoring.

pub mod providers;

use std::sync::Arc;

use crate::{
    error::VerifyError,
    token::SignedToken,
    verify::TokenVerifier,
};

/// Resolves whether this provider can service a token.
///
/// Providers inspect the token (typically the header `alg` or `kid` fields)
/// and, when applicable, return a verifier already bound to the key material
/// the token needs. Providers must not mutate shared state during resolution;
/// key lookups against material the provider owns are fine.
pub trait VerifierProvider {
    /// Returns a bound verifier when this provider recognizes `token`, or
    /// [`None`] to signal "try the next provider".
    fn provide(&self, token: &SignedToken) -> Option<Box<dyn TokenVerifier + Send + Sync>>;
}

/// Adapts a closure into a [`VerifierProvider`].
///
/// Keeps registration declarative when a one-off resolution rule is not worth
/// a named type:
///
/// ```rust
/// use oxiverify::{
///     AlgorithmId,
///     SignedToken,
///     VerifierRegistry,
///     registry::provider_fn,
///     verify::{
///         AlgBoundVerifier,
///         MacVerifier,
///         TokenVerifier,
///     },
/// };
///
/// let mut registry = VerifierRegistry::new();
/// registry.register(provider_fn(|token: &SignedToken| {
///     let header = token.header().ok()?;
///     if header.alg != AlgorithmId::HS256 {
///         return None;
///     }
///     let mac = MacVerifier::sha256(b"topsecret");
///     Some(Box::new(AlgBoundVerifier::from_verifier(mac)) as Box<dyn TokenVerifier + Send + Sync>)
/// }));
/// ```
pub fn provider_fn<F>(resolve: F) -> FnProvider<F>
where
    F: Fn(&SignedToken) -> Option<Box<dyn TokenVerifier + Send + Sync>>,
{
    FnProvider { resolve }
}

/// See [`provider_fn`].
pub struct FnProvider<F> {
    resolve: F,
}

impl<F> VerifierProvider for FnProvider<F>
where
    F: Fn(&SignedToken) -> Option<Box<dyn TokenVerifier + Send + Sync>>,
{
    fn provide(&self, token: &SignedToken) -> Option<Box<dyn TokenVerifier + Send + Sync>> {
        (self.resolve)(token)
    }
}

/// Ordered collection of [`VerifierProvider`]s with first-match resolution.
///
/// # Lifecycle
///
/// Populate during startup, then treat as immutable: [`register`] takes
/// `&mut self`, so the borrow checker already forbids registration racing a
/// [`verify`] call. Share the populated registry with [`into_shared`]; there
/// is deliberately no process-wide default instance.
///
/// [`register`]: VerifierRegistry::register
/// [`verify`]: VerifierRegistry::verify
/// [`into_shared`]: VerifierRegistry::into_shared
#[derive(Default)]
pub struct VerifierRegistry {
    providers: Vec<Box<dyn VerifierProvider + Send + Sync>>,
}

impl VerifierRegistry {
    /// Instantiates an empty registry; every `verify` call fails with
    /// [`VerifyError::NoApplicableProvider`] until a provider is registered.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Appends a provider; later registrations have lower priority.
    pub fn register(&mut self, provider: impl VerifierProvider + Send + Sync + 'static) {
        self.providers.push(Box::new(provider));
    }

    /// Returns the number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns whether no provider has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Wraps the populated registry for shared, read-only use.
    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Resolves the verifier for `token`: the first provider (in registration
    /// order) that returns one wins, regardless of what later providers would
    /// have returned.
    pub fn resolve(&self, token: &SignedToken) -> Option<Box<dyn TokenVerifier + Send + Sync>> {
        for (index, provider) in self.providers.iter().enumerate() {
            if let Some(verifier) = provider.provide(token) {
                tracing::trace!(provider = index, "provider recognized token");
                return Some(verifier);
            }
        }
        tracing::debug!(
            providers = self.providers.len(),
            "no provider recognized token"
        );
        None
    }

    /// Resolves and runs the verifier for `token`.
    ///
    /// # Errors
    ///
    /// - [`VerifyError::NoApplicableProvider`] when the registry is exhausted
    ///   without a match
    /// - Any error raised by the chosen verifier, propagated unchanged
    pub fn verify(&self, token: &SignedToken) -> Result<(), VerifyError> {
        self.resolve(token)
            .ok_or(VerifyError::NoApplicableProvider)?
            .verify_token(token)
    }
}
