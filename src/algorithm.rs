use std::{
    borrow::Cow,
    fmt::Display,
};

/// JWS Signature Algorithm identifier
///
/// Backed by the raw `alg` string rather than an enumeration so that callers
/// can name algorithms this crate has no built-in support for without editing
/// this type. Equality and hashing follow the raw string.
///
/// The identifiers registered by RFC 7518 are available as associated
/// constants:
///
/// ```rust
/// use oxiverify::AlgorithmId;
///
/// assert_eq!(AlgorithmId::HS256.as_str(), "HS256");
/// assert_eq!(AlgorithmId::from("HS256"), AlgorithmId::HS256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AlgorithmId(Cow<'static, str>);

impl AlgorithmId {
    /// `HMAC` using `SHA-256`
    pub const HS256: Self = Self::from_static("HS256");

    /// `HMAC` using `SHA-384`
    pub const HS384: Self = Self::from_static("HS384");

    /// `HMAC` using `SHA-512`
    pub const HS512: Self = Self::from_static("HS512");

    /// `RSASSA-PKCS1-v1_5` using `SHA-256`
    pub const RS256: Self = Self::from_static("RS256");

    /// `RSASSA-PKCS1-v1_5` using `SHA-384`
    pub const RS384: Self = Self::from_static("RS384");

    /// `RSASSA-PKCS1-v1_5` using `SHA-512`
    pub const RS512: Self = Self::from_static("RS512");

    /// `ECDSA` using `P-256` curve and `SHA-256` digest
    pub const ES256: Self = Self::from_static("ES256");

    /// `ECDSA` using `P-384` curve and `SHA-384` digest
    pub const ES384: Self = Self::from_static("ES384");

    /// `ECDSA` using `P-521` curve and `SHA-512` digest
    pub const ES512: Self = Self::from_static("ES512");

    /// `RSASSA-PSS` using `SHA-256` and MGF1 with SHA-256
    pub const PS256: Self = Self::from_static("PS256");

    /// `RSASSA-PSS` using `SHA-384` and MGF1 with SHA-384
    pub const PS384: Self = Self::from_static("PS384");

    /// `RSASSA-PSS` using `SHA-512` and MGF1 with SHA-512
    pub const PS512: Self = Self::from_static("PS512");

    /// No digital signature or MAC
    ///
    /// WARNING: tokens declaring `none` are never serviced unless the
    /// [`dangerous::AcceptUnsigned`] provider is registered explicitly.
    ///
    /// [`dangerous::AcceptUnsigned`]: crate::dangerous::AcceptUnsigned
    pub const NONE: Self = Self::from_static("none");

    /// Wraps a static identifier string without allocating.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Wraps an identifier string taken from token data.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AlgorithmId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AlgorithmId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AlgorithmId {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl PartialEq<str> for AlgorithmId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AlgorithmId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
