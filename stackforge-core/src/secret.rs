//! JWT secret generation.
//!
//! Secrets are 32 bytes drawn from the operating system's CSPRNG and
//! hex-encoded, giving 64 lowercase hex characters. The entropy source
//! and encoding are fixed; seeded generators are not acceptable here.

use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes in a generated secret.
pub const SECRET_BYTES: usize = 32;

/// Generate a fresh JWT signing secret (64 lowercase hex chars).
pub fn generate_jwt_secret() -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_is_64_lowercase_hex_chars() {
        let secret = generate_jwt_secret();
        assert_eq!(secret.len(), SECRET_BYTES * 2);
        assert!(secret.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn secrets_are_distinct() {
        // 256 bits of entropy; a collision here means the RNG is broken.
        let a = generate_jwt_secret();
        let b = generate_jwt_secret();
        assert_ne!(a, b);
    }
}
