#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![doc = include_str!("../README.md")]

/// Error enums
pub mod error;

/// Provider registry resolving which verifier applies to a token
pub mod registry;

/// Response verification composition
pub mod response;

/// Identity-store boundary contract and in-process backend
pub mod store;

/// Compact signed-token representation
pub mod token;

/// Signature verification capabilities and algorithm implementations
pub mod verify;

/// Opt-in acceptance of unsigned (`alg: "none"`) tokens.
///
/// DANGER: nothing in here performs cryptographic verification.
pub mod dangerous;

pub use algorithm::AlgorithmId;
pub use error::VerifyError;
pub use registry::VerifierRegistry;
pub use token::SignedToken;

mod algorithm;
