#![allow(clippy::unwrap_used)]
use aws_lc_rs::hmac::{
    HMAC_SHA256,
    Key as HmacKey,
    sign,
};
use base64_simd::URL_SAFE_NO_PAD as b64;
use oxiverify::{
    AlgorithmId,
    SignedToken,
    VerifierRegistry,
    VerifyError,
    dangerous::AcceptUnsigned,
    registry::providers::{
        KeyIdProvider,
        SharedSecretProvider,
        StaticVerifierProvider,
    },
    verify::{
        EcdsaVerifier,
        MacVerifier,
    },
};

/// Builds a compact HS256 token over the given JSON strings.
fn hs256_token(secret: &[u8], header: &str, payload: &str) -> String {
    let mut compact = b64.encode_to_string(header);
    compact.push('.');
    compact.push_str(&b64.encode_to_string(payload));
    let tag = sign(&HmacKey::new(HMAC_SHA256, secret), compact.as_bytes());
    compact.push('.');
    compact.push_str(&b64.encode_to_string(tag.as_ref()));
    compact
}

#[test]
fn hs256_round_trip_through_registry() {
    let compact = hs256_token(
        b"topsecret",
        r#"{"alg":"HS256","typ":"JWT"}"#,
        r#"{"sub":"demo"}"#,
    );

    let mut registry = VerifierRegistry::new();
    registry.register(SharedSecretProvider::hs256("topsecret"));
    let registry = registry.into_shared();

    let token = SignedToken::parse(compact).unwrap();
    registry.verify(&token).unwrap();
}

#[test]
fn payload_bit_flip_rejected() {
    let compact = hs256_token(
        b"topsecret",
        r#"{"alg":"HS256","typ":"JWT"}"#,
        r#"{"sub":"demo"}"#,
    );

    // re-encode the payload with one bit flipped, signature untouched
    let flipped = {
        let mut payload = br#"{"sub":"demo"}"#.to_vec();
        payload[7] ^= 0x01;
        let mut parts = compact.split('.');
        let header = parts.next().unwrap();
        let _ = parts.next();
        let signature = parts.next().unwrap();
        format!("{header}.{}.{signature}", b64.encode_to_string(&payload))
    };

    let mut registry = VerifierRegistry::new();
    registry.register(SharedSecretProvider::hs256("topsecret"));

    let token = SignedToken::parse(flipped).unwrap();
    let err = registry.verify(&token).unwrap_err();
    assert_eq!(err, VerifyError::InvalidSignature);
}

#[test]
fn signature_bit_flip_rejected() {
    let compact = hs256_token(
        b"topsecret",
        r#"{"alg":"HS256","typ":"JWT"}"#,
        r#"{"sub":"demo"}"#,
    );

    // swap the first base64 character of the signature segment
    let tampered = {
        let mut parts = compact.split('.');
        let header = parts.next().unwrap();
        let payload = parts.next().unwrap();
        let signature = parts.next().unwrap();
        let replacement = if signature.starts_with('A') { "B" } else { "A" };
        format!("{header}.{payload}.{replacement}{}", &signature[1..])
    };

    let mut registry = VerifierRegistry::new();
    registry.register(SharedSecretProvider::hs256("topsecret"));

    let token = SignedToken::parse(tampered).unwrap();
    let err = registry.verify(&token).unwrap_err();
    assert_eq!(err, VerifyError::InvalidSignature);
}

#[test]
fn empty_registry_never_trusts() {
    let registry = VerifierRegistry::new();
    let token = SignedToken::parse(hs256_token(
        b"topsecret",
        r#"{"alg":"HS256","typ":"JWT"}"#,
        r#"{"sub":"demo"}"#,
    ))
    .unwrap();

    let err = registry.verify(&token).unwrap_err();
    assert_eq!(err, VerifyError::NoApplicableProvider);
}

#[test]
fn registration_order_is_the_priority() {
    // A never matches, B and C would both match; B wins by order
    let token = SignedToken::parse(hs256_token(
        b"topsecret",
        r#"{"alg":"HS256","typ":"JWT"}"#,
        r#"{"sub":"demo"}"#,
    ))
    .unwrap();

    let mut registry = VerifierRegistry::new();
    registry.register(KeyIdProvider::empty());
    registry.register(SharedSecretProvider::hs256("topsecret"));
    registry.register(StaticVerifierProvider::new(MacVerifier::sha256(
        "a-different-secret",
    )));
    registry.verify(&token).unwrap();

    // with C promoted above B, its wrong-secret verifier is the one chosen
    // and the same token is now rejected
    let mut registry = VerifierRegistry::new();
    registry.register(KeyIdProvider::empty());
    registry.register(StaticVerifierProvider::new(MacVerifier::sha256(
        "a-different-secret",
    )));
    registry.register(SharedSecretProvider::hs256("topsecret"));
    let err = registry.verify(&token).unwrap_err();
    assert_eq!(err, VerifyError::InvalidSignature);
}

#[test]
fn jsonwebtoken_issued_hs256_verifies() {
    #[derive(serde::Serialize)]
    struct Claims {
        sub: String,
        exp: i64,
    }

    let compact = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &Claims {
            sub: "cross-validation".into(),
            exp: 4_102_444_800,
        },
        &jsonwebtoken::EncodingKey::from_secret(b"topsecret"),
    )
    .unwrap();

    let mut registry = VerifierRegistry::new();
    registry.register(SharedSecretProvider::hs256("topsecret"));

    let token = SignedToken::parse(compact).unwrap();
    registry.verify(&token).unwrap();
}

#[test]
fn ecdsa_token_fails_closed_as_unimplemented() {
    // header: {"alg":"ES256"}, signature decodes to `sig`
    let token = SignedToken::parse("eyJhbGciOiJFUzI1NiJ9.eyJzdWIiOiJkZW1vIn0.c2ln").unwrap();

    let mut registry = VerifierRegistry::new();
    registry.register(StaticVerifierProvider::new(
        EcdsaVerifier::new(AlgorithmId::ES256).unwrap(),
    ));

    let err = registry.verify(&token).unwrap_err();
    assert_eq!(err, VerifyError::UnimplementedAlgorithm(AlgorithmId::ES256));
}

#[test]
fn unsigned_tokens_require_explicit_opt_in() {
    // header: {"alg":"none"}
    let token = SignedToken::parse("eyJhbGciOiJub25lIn0.eyJzdWIiOiJkZW1vIn0.").unwrap();

    let mut registry = VerifierRegistry::new();
    registry.register(SharedSecretProvider::hs256("topsecret"));
    let err = registry.verify(&token).unwrap_err();
    assert_eq!(err, VerifyError::NoApplicableProvider);

    let mut registry = VerifierRegistry::new();
    registry.register(SharedSecretProvider::hs256("topsecret"));
    registry.register(AcceptUnsigned);
    registry.verify(&token).unwrap();
}

#[test]
fn hmac_family_breadth() {
    use aws_lc_rs::hmac::{
        HMAC_SHA384,
        HMAC_SHA512,
    };

    for (alg, hmac_alg, header) in [
        (
            AlgorithmId::HS384,
            HMAC_SHA384,
            r#"{"alg":"HS384","typ":"JWT"}"#,
        ),
        (
            AlgorithmId::HS512,
            HMAC_SHA512,
            r#"{"alg":"HS512","typ":"JWT"}"#,
        ),
    ] {
        let mut compact = b64.encode_to_string(header);
        compact.push('.');
        compact.push_str(&b64.encode_to_string(r#"{"sub":"demo"}"#));
        let tag = sign(&HmacKey::new(hmac_alg, b"topsecret"), compact.as_bytes());
        compact.push('.');
        compact.push_str(&b64.encode_to_string(tag.as_ref()));

        let mut registry = VerifierRegistry::new();
        registry.register(SharedSecretProvider::new(
            "topsecret",
            [AlgorithmId::HS256, AlgorithmId::HS384, AlgorithmId::HS512],
        ));

        let token = SignedToken::parse(compact).unwrap();
        registry.verify(&token).unwrap();
        assert_eq!(token.header().unwrap().alg, alg);
    }
}

#[test]
fn concurrent_verification_against_shared_registry() {
    let compact = hs256_token(
        b"topsecret",
        r#"{"alg":"HS256","typ":"JWT"}"#,
        r#"{"sub":"demo"}"#,
    );

    let mut registry = VerifierRegistry::new();
    registry.register(SharedSecretProvider::hs256("topsecret"));
    let registry = registry.into_shared();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let registry = std::sync::Arc::clone(&registry);
            let compact = compact.clone();
            scope.spawn(move || {
                for _ in 0..50 {
                    let token = SignedToken::parse(compact.clone()).unwrap();
                    registry.verify(&token).unwrap();
                }
            });
        }
    });
}
