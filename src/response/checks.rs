//! Built-in response checks
//!
//! Each check is one small, stateless struct so chains read as a list of
//! named policies. Absent inputs fail closed: a check that needs metadata
//! rejects a response that carries none.

use crate::{
    error::VerifyError,
    response::{
        ResponseMetadata,
        ResponseVerifier,
        TransportError,
    },
};

/// Rejects responses accompanied by a transport-layer failure.
pub struct TransportSucceeded;

impl TransportSucceeded {
    /// Instantiates the check.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Default for TransportSucceeded {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseVerifier for TransportSucceeded {
    fn verify(
        &self,
        _: Option<&[u8]>,
        _: Option<&ResponseMetadata>,
        error: Option<&TransportError>,
    ) -> Result<(), VerifyError> {
        match error {
            Some(err) => Err(VerifyError::TransportFailure(err.to_string())),
            None => Ok(()),
        }
    }
}

/// Rejects responses whose status code is outside `200..300`.
pub struct SuccessStatus;

impl SuccessStatus {
    /// Instantiates the check.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Default for SuccessStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseVerifier for SuccessStatus {
    fn verify(
        &self,
        _: Option<&[u8]>,
        metadata: Option<&ResponseMetadata>,
        _: Option<&TransportError>,
    ) -> Result<(), VerifyError> {
        let metadata = metadata.ok_or(VerifyError::ResponseRejected("response metadata missing"))?;
        if (200..300).contains(&metadata.status) {
            Ok(())
        } else {
            Err(VerifyError::UnexpectedStatus(metadata.status))
        }
    }
}

/// Rejects responses whose `Content-Type` does not start with the expected
/// value.
///
/// Prefix matching tolerates charset parameters (`application/json;
/// charset=utf-8`).
pub struct ContentTypeIs {
    expected: &'static str,
}

impl ContentTypeIs {
    /// Instantiates the check for `expected`.
    #[must_use]
    pub const fn new(expected: &'static str) -> Self {
        Self { expected }
    }

    /// Instantiates the check for `application/json`.
    #[must_use]
    pub const fn json() -> Self {
        Self::new("application/json")
    }
}

impl ResponseVerifier for ContentTypeIs {
    fn verify(
        &self,
        _: Option<&[u8]>,
        metadata: Option<&ResponseMetadata>,
        _: Option<&TransportError>,
    ) -> Result<(), VerifyError> {
        let content_type = metadata
            .and_then(|m| m.content_type.as_deref())
            .ok_or(VerifyError::ResponseRejected("content type missing"))?;
        if content_type.starts_with(self.expected) {
            Ok(())
        } else {
            Err(VerifyError::ResponseRejected("unexpected content type"))
        }
    }
}

/// Rejects responses carrying no body bytes.
pub struct NonEmptyBody;

impl NonEmptyBody {
    /// Instantiates the check.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Default for NonEmptyBody {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseVerifier for NonEmptyBody {
    fn verify(
        &self,
        data: Option<&[u8]>,
        _: Option<&ResponseMetadata>,
        _: Option<&TransportError>,
    ) -> Result<(), VerifyError> {
        if data.is_some_and(|d| !d.is_empty()) {
            Ok(())
        } else {
            Err(VerifyError::ResponseRejected("empty response body"))
        }
    }
}
