//! Key-material assembly
//!
//! Everything here normalizes foreign key representations into a DER
//! `SubjectPublicKeyInfo` blob, the one format the crypto backend is handed.
//! Failures surface as [`VerifyError::InvalidKeyMaterial`] before any
//! verification is attempted.

use der::{
    Decode,
    Encode,
    Sequence,
    asn1::{
        BitString,
        UintRef,
    },
};
use spki::{
    AlgorithmIdentifierOwned,
    ObjectIdentifier,
    SubjectPublicKeyInfoOwned,
};
use x509_cert::Certificate;

use crate::error::VerifyError;

/// rsaEncryption, RFC 8017 appendix C
const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// Upper bound on accepted modulus length; 4096-bit keys are the largest the
/// verifier constructors admit.
const MAX_MODULUS_LEN: usize = 512;

/// RSAPublicKey, RFC 8017 appendix A.1.1
#[derive(Sequence)]
struct RsaPublicKeyDer<'a> {
    modulus: UintRef<'a>,
    public_exponent: UintRef<'a>,
}

/// Strips the big-endian sign-padding zeros a modulus or exponent may carry.
fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Assembles a DER `SubjectPublicKeyInfo` from raw big-endian RSA modulus and
/// exponent bytes.
pub(crate) fn rsa_spki_from_components(n: &[u8], e: &[u8]) -> Result<Vec<u8>, VerifyError> {
    let n = strip_leading_zeros(n);
    let e = strip_leading_zeros(e);
    if n.is_empty() || e.is_empty() {
        return Err(VerifyError::InvalidKeyMaterial(
            "rsa modulus and exponent must be non-empty",
        ));
    }
    if n.len() > MAX_MODULUS_LEN {
        return Err(VerifyError::InvalidKeyMaterial(
            "rsa modulus exceeds the largest accepted key size",
        ));
    }

    let key = RsaPublicKeyDer {
        modulus: UintRef::new(n)
            .map_err(|_| VerifyError::InvalidKeyMaterial("rsa modulus is not a valid integer"))?,
        public_exponent: UintRef::new(e)
            .map_err(|_| VerifyError::InvalidKeyMaterial("rsa exponent is not a valid integer"))?,
    };
    let key_der = key
        .to_der()
        .map_err(|_| VerifyError::InvalidKeyMaterial("rsa public key could not be encoded"))?;

    let spki = SubjectPublicKeyInfoOwned {
        algorithm: AlgorithmIdentifierOwned {
            oid: RSA_ENCRYPTION_OID,
            parameters: Some(der::asn1::AnyRef::NULL.into()),
        },
        subject_public_key: BitString::new(0, key_der)
            .map_err(|_| VerifyError::InvalidKeyMaterial("rsa public key could not be encoded"))?,
    };
    spki.to_der()
        .map_err(|_| VerifyError::InvalidKeyMaterial("subject public key info could not be encoded"))
}

/// Extracts the DER `SubjectPublicKeyInfo` from a DER X.509 certificate.
pub(crate) fn spki_from_certificate(cert_der: &[u8]) -> Result<Vec<u8>, VerifyError> {
    let cert = Certificate::from_der(cert_der)
        .map_err(|_| VerifyError::InvalidKeyMaterial("certificate is not valid der"))?;
    cert.tbs_certificate
        .subject_public_key_info
        .to_der()
        .map_err(|_| VerifyError::InvalidKeyMaterial("subject public key info could not be encoded"))
}
