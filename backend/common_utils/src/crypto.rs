//! Keyed-hash algorithms used for gateway message signing.

use crate::errors::{CryptoError, CustomResult};

/// Sign a message with a shared secret.
pub trait SignMessage {
    fn sign_message(
        &self,
        secret: &[u8],
        msg: &[u8],
    ) -> CustomResult<Vec<u8>, CryptoError>;
}

/// Verify a signature produced by [`SignMessage`].
pub trait VerifySignature {
    fn verify_signature(
        &self,
        secret: &[u8],
        signature: &[u8],
        msg: &[u8],
    ) -> CustomResult<bool, CryptoError>;
}

/// HMAC with a 512-bit SHA-2 digest.
#[derive(Debug, Clone, Copy)]
pub struct HmacSha512;

impl SignMessage for HmacSha512 {
    fn sign_message(
        &self,
        secret: &[u8],
        msg: &[u8],
    ) -> CustomResult<Vec<u8>, CryptoError> {
        let key = ring::hmac::Key::new(ring::hmac::HMAC_SHA512, secret);
        Ok(ring::hmac::sign(&key, msg).as_ref().to_vec())
    }
}

impl VerifySignature for HmacSha512 {
    fn verify_signature(
        &self,
        secret: &[u8],
        signature: &[u8],
        msg: &[u8],
    ) -> CustomResult<bool, CryptoError> {
        let key = ring::hmac::Key::new(ring::hmac::HMAC_SHA512, secret);
        Ok(ring::hmac::verify(&key, msg, signature).is_ok())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn hmac_sha512_matches_rfc_4231_vector() {
        // RFC 4231, test case 2.
        let digest = HmacSha512
            .sign_message(b"Jefe", b"what do ya want for nothing?")
            .unwrap();
        assert_eq!(
            hex::encode(digest),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn hmac_sha512_of_empty_key_and_message_is_fixed() {
        let digest = HmacSha512.sign_message(b"", b"").unwrap();
        assert_eq!(
            hex::encode(digest),
            "b936cee86c9f87aa5d3c6f2e84cb5a4239a5fe50480a6ec66b70ab5b1f4ac673\
             0c6c515421b327ec1d69402e53dfb49ad7381eb067b338fd7b0cb22247225d47"
        );
    }

    #[test]
    fn verify_accepts_own_signature_and_rejects_tampering() {
        let secret = b"S3CRET";
        let msg = b"vnp_Amount=1000000&vnp_TxnRef=12345678";
        let signature = HmacSha512.sign_message(secret, msg).unwrap();

        assert!(HmacSha512
            .verify_signature(secret, &signature, msg)
            .unwrap());
        assert!(!HmacSha512
            .verify_signature(secret, &signature, b"vnp_Amount=1000001&vnp_TxnRef=12345678")
            .unwrap());
        assert!(!HmacSha512
            .verify_signature(b"OTHER", &signature, msg)
            .unwrap());
    }
}
