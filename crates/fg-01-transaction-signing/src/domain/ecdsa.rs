//! # ECDSA Signing (secp256k1 / SHA-256)
//!
//! Pure domain logic for producing account signatures.
//!
//! ## Pipeline
//!
//! 1. hex-decode the signable message
//! 2. SHA-256 the raw bytes
//! 3. RFC 6979 deterministic ECDSA over the digest (low-S normalized by k256)
//! 4. `r || s`, each as a 32-byte big-endian block, hex-encoded
//!
//! The same key and message always produce the same signature.

use super::errors::SigningError;
use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{Signature, SigningKey};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Width of one signature scalar in bytes.
pub const SCALAR_LENGTH: usize = 32;

/// Length of a hex-encoded `r || s` signature.
pub const SIGNATURE_HEX_LENGTH: usize = SCALAR_LENGTH * 4;

fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Parse a hex private key into a secp256k1 signing key.
///
/// The decoded bytes are wiped once the key has been parsed.
pub fn decode_private_key(private_key_hex: &str) -> Result<SigningKey, SigningError> {
    let bytes = Zeroizing::new(
        hex::decode(strip_hex_prefix(private_key_hex.trim()))
            .map_err(|e| SigningError::InvalidKey(e.to_string()))?,
    );

    if bytes.is_empty() || bytes.len() > SCALAR_LENGTH {
        return Err(SigningError::InvalidKey(format!(
            "expected at most {} bytes, got {}",
            SCALAR_LENGTH,
            bytes.len()
        )));
    }

    // Left-pad short keys so that leading zero bytes may be omitted.
    let mut padded = Zeroizing::new([0u8; SCALAR_LENGTH]);
    padded[SCALAR_LENGTH - bytes.len()..].copy_from_slice(&bytes);

    SigningKey::from_slice(padded.as_slice())
        .map_err(|_| SigningError::InvalidKey("scalar out of range".to_string()))
}

/// Decode a hex signable message into raw bytes.
pub fn decode_message(message_hex: &str) -> Result<Vec<u8>, SigningError> {
    hex::decode(strip_hex_prefix(message_hex))
        .map_err(|e| SigningError::InvalidMessage(e.to_string()))
}

/// SHA-256 of the message bytes.
pub fn hash_message(message: &[u8]) -> [u8; 32] {
    Sha256::digest(message).into()
}

/// Sign a hex message: decode, hash, sign, encode.
pub fn sign_message_hex(key: &SigningKey, message_hex: &str) -> Result<String, SigningError> {
    let message = decode_message(message_hex)?;
    let digest = hash_message(&message);

    let signature: Signature = key
        .sign_prehash(&digest)
        .map_err(|e| SigningError::SigningFailed(e.to_string()))?;

    let (r, s) = signature.split_bytes();
    encode_signature(r.as_slice(), s.as_slice())
}

/// Encode `r` and `s` as fixed-width big-endian blocks and hex the result.
///
/// Scalars shorter than 32 bytes are left-padded with zeros. Scalars wider
/// than 32 bytes are rejected unless the excess is leading zeros.
pub fn encode_signature(r: &[u8], s: &[u8]) -> Result<String, SigningError> {
    let mut out = [0u8; SCALAR_LENGTH * 2];
    out[..SCALAR_LENGTH].copy_from_slice(&fixed_width(r)?);
    out[SCALAR_LENGTH..].copy_from_slice(&fixed_width(s)?);
    Ok(hex::encode(out))
}

fn fixed_width(scalar: &[u8]) -> Result<[u8; SCALAR_LENGTH], SigningError> {
    let significant = match scalar.iter().position(|&b| b != 0) {
        Some(first) => &scalar[first..],
        None => &[],
    };
    if significant.len() > SCALAR_LENGTH {
        return Err(SigningError::SigningFailed(format!(
            "scalar is {} bytes wide",
            significant.len()
        )));
    }

    let mut block = [0u8; SCALAR_LENGTH];
    block[SCALAR_LENGTH - significant.len()..].copy_from_slice(significant);
    Ok(block)
}

/// Uncompressed public key as registered on an account: 64 bytes `x || y`
/// (no SEC1 tag), hex-encoded.
pub fn public_key_hex(key: &SigningKey) -> String {
    let point = key.verifying_key().to_encoded_point(false);
    hex::encode(&point.as_bytes()[1..])
}

// =============================================================================
// TEST HELPERS
// =============================================================================
