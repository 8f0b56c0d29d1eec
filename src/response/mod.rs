//! Response verification composition
//!
//! Independent checks over a network response, composable into a sequential
//! chain that short-circuits on first failure. Each check sees the same three
//! inputs: the response body (if any), the response metadata (if any), and the
//! transport error (if any). The chain's result on failure IS the failing
//! check's error. Nothing is wrapped, so callers can match on the exact
//! variant a check raised.

pub mod checks;

use thiserror::Error;

use crate::error::VerifyError;

/// Transport-level metadata of a network response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseMetadata {
    /// Final URL the response was served from
    pub url: Option<String>,

    /// HTTP status code
    pub status: u16,

    /// `Content-Type` header value, if present
    pub content_type: Option<String>,
}

/// A transport-layer failure reported alongside (or instead of) a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Wraps a transport-layer failure description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One independent check over a network response.
pub trait ResponseVerifier {
    /// Checks the response.
    ///
    /// # Errors
    ///
    /// This method MUST return a [`VerifyError`] when the response fails the
    /// check; the consuming flow treats any error as "do not trust this
    /// response".
    fn verify(
        &self,
        data: Option<&[u8]>,
        metadata: Option<&ResponseMetadata>,
        error: Option<&TransportError>,
    ) -> Result<(), VerifyError>;
}

/// Adapts a closure into a [`ResponseVerifier`].
pub fn from_fn<F>(check: F) -> FnResponseVerifier<F>
where
    F: Fn(
        Option<&[u8]>,
        Option<&ResponseMetadata>,
        Option<&TransportError>,
    ) -> Result<(), VerifyError>,
{
    FnResponseVerifier { check }
}

/// See [`from_fn`].
pub struct FnResponseVerifier<F> {
    check: F,
}

impl<F> ResponseVerifier for FnResponseVerifier<F>
where
    F: Fn(
        Option<&[u8]>,
        Option<&ResponseMetadata>,
        Option<&TransportError>,
    ) -> Result<(), VerifyError>,
{
    fn verify(
        &self,
        data: Option<&[u8]>,
        metadata: Option<&ResponseMetadata>,
        error: Option<&TransportError>,
    ) -> Result<(), VerifyError> {
        (self.check)(data, metadata, error)
    }
}

/// Ordered sequence of [`ResponseVerifier`]s with short-circuit semantics.
///
/// Checks run in insertion order; the first failure aborts the sequence and
/// later checks are never invoked. An empty chain succeeds vacuously.
#[derive(Default)]
pub struct ResponseChain {
    checks: Vec<Box<dyn ResponseVerifier + Send + Sync>>,
}

impl ResponseChain {
    /// Instantiates an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Builds a chain of one check.
    pub fn single(check: impl ResponseVerifier + Send + Sync + 'static) -> Self {
        Self::new().with(check)
    }

    /// Builds a chain from an ordered list of checks.
    #[must_use]
    pub fn sequence(checks: Vec<Box<dyn ResponseVerifier + Send + Sync>>) -> Self {
        Self { checks }
    }

    /// Appends a check; may be chained to append several.
    #[must_use]
    pub fn with(mut self, check: impl ResponseVerifier + Send + Sync + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Appends a check to an existing chain.
    pub fn push(&mut self, check: impl ResponseVerifier + Send + Sync + 'static) {
        self.checks.push(Box::new(check));
    }

    /// Returns the number of checks in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns whether the chain holds no checks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl ResponseVerifier for ResponseChain {
    fn verify(
        &self,
        data: Option<&[u8]>,
        metadata: Option<&ResponseMetadata>,
        error: Option<&TransportError>,
    ) -> Result<(), VerifyError> {
        for check in &self.checks {
            if let Err(err) = check.verify(data, metadata, error) {
                tracing::debug!(%err, "response rejected");
                return Err(err);
            }
        }
        Ok(())
    }
}

impl FromIterator<Box<dyn ResponseVerifier + Send + Sync>> for ResponseChain {
    fn from_iter<I: IntoIterator<Item = Box<dyn ResponseVerifier + Send + Sync>>>(
        iter: I,
    ) -> Self {
        Self {
            checks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::atomic::{
        AtomicUsize,
        Ordering,
    };

    use super::{
        ResponseChain,
        ResponseMetadata,
        ResponseVerifier,
        TransportError,
        from_fn,
    };
    use crate::error::VerifyError;

    struct FixedOutcome(Result<(), VerifyError>);
    impl ResponseVerifier for FixedOutcome {
        fn verify(
            &self,
            _: Option<&[u8]>,
            _: Option<&ResponseMetadata>,
            _: Option<&TransportError>,
        ) -> Result<(), VerifyError> {
            self.0.clone()
        }
    }

    struct CountingCheck<'a>(&'a AtomicUsize);
    impl ResponseVerifier for CountingCheck<'_> {
        fn verify(
            &self,
            _: Option<&[u8]>,
            _: Option<&ResponseMetadata>,
            _: Option<&TransportError>,
        ) -> Result<(), VerifyError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn empty_chain_succeeds() {
        let chain = ResponseChain::new();
        assert!(chain.is_empty());
        chain.verify(None, None, None).unwrap();
    }

    #[test]
    fn all_passing_chain_succeeds() {
        let chain = ResponseChain::new()
            .with(FixedOutcome(Ok(())))
            .with(FixedOutcome(Ok(())))
            .with(FixedOutcome(Ok(())));
        assert_eq!(chain.len(), 3);
        chain.verify(None, None, None).unwrap();
    }

    #[test]
    fn second_failure_stops_third_and_is_reported_exactly() {
        static THIRD_RAN: AtomicUsize = AtomicUsize::new(0);

        let chain = ResponseChain::new()
            .with(FixedOutcome(Ok(())))
            .with(FixedOutcome(Err(VerifyError::UnexpectedStatus(503))))
            .with(CountingCheck(&THIRD_RAN));

        let err = chain.verify(None, None, None).unwrap_err();
        assert_eq!(err, VerifyError::UnexpectedStatus(503));
        assert_eq!(THIRD_RAN.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn closure_check_composes() {
        let chain = ResponseChain::single(from_fn(
            |data: Option<&[u8]>, _: Option<&ResponseMetadata>, _: Option<&TransportError>| {
                if data.is_some_and(|d| d.starts_with(b"{")) {
                    Ok(())
                } else {
                    Err(VerifyError::ResponseRejected("body is not a json object"))
                }
            },
        ));

        chain.verify(Some(b"{}".as_slice()), None, None).unwrap();
        let err = chain.verify(Some(b"nope".as_slice()), None, None).unwrap_err();
        assert_eq!(
            err,
            VerifyError::ResponseRejected("body is not a json object")
        );
    }

    #[test]
    fn sequence_constructor_preserves_order() {
        let checks: Vec<Box<dyn ResponseVerifier + Send + Sync>> = vec![
            Box::new(FixedOutcome(Err(VerifyError::ResponseRejected("first")))),
            Box::new(FixedOutcome(Err(VerifyError::ResponseRejected("second")))),
        ];
        let chain = ResponseChain::sequence(checks);

        let err = chain.verify(None, None, None).unwrap_err();
        assert_eq!(err, VerifyError::ResponseRejected("first"));
    }
}
