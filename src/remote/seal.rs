//! Sealed-box encryption of secret values.
//!
//! The API only accepts secret values encrypted to the target's Actions
//! public key with a libsodium sealed box, base64 on both sides.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use crypto_box::PublicKey;
use rand::rngs::OsRng;

use crate::error::{Error, Result};

/// Seal a plaintext value against a base64-encoded X25519 public key.
///
/// Returns the base64-encoded ciphertext ready for the `encrypted_value`
/// field of a secret-creation request.
pub fn seal(public_key_b64: &str, plaintext: &str) -> Result<String> {
    let key_bytes = BASE64
        .decode(public_key_b64)
        .map_err(|e| Error::Seal(format!("invalid public key encoding: {e}")))?;
    let key_bytes: [u8; 32] = key_bytes
        .as_slice()
        .try_into()
        .map_err(|_| Error::Seal("public key must be 32 bytes".to_string()))?;

    let public_key = PublicKey::from(key_bytes);
    let sealed = public_key
        .seal(&mut OsRng, plaintext.as_bytes())
        .map_err(|_| Error::Seal("sealed box encryption failed".to_string()))?;

    Ok(BASE64.encode(sealed))
}
