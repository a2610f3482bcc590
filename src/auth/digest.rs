//! Password Pre-Hash
//!
//! Passwords are digested before transmission; only the digest crosses the
//! network. This is a transform, not a security boundary: the server must
//! still salt and stretch the received digest, or the digest itself becomes
//! the de-facto password.

use sha2::{Digest, Sha256};

/// SHA-256 of the plaintext as lowercase hex. Deterministic, unsalted.
pub fn password_digest(plaintext: &str) -> String {
    hex::encode(Sha256::digest(plaintext.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_sha256_vectors() {
        assert_eq!(
            password_digest("password1"),
            "0b14d501a594442a01c6859541bcb3e8164d183d32937b851835442f69d5c94e"
        );
        assert_eq!(
            password_digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            password_digest("correct horse battery staple"),
            "c4bbcb1fbec99d65bf59d85c8cb62ee2db963f0fe106f483d9afa73bd4e39a8a"
        );
    }

    #[test]
    fn deterministic_across_calls() {
        assert_eq!(password_digest("hunter2hunter2"), password_digest("hunter2hunter2"));
    }

    #[test]
    fn fixed_length_hex() {
        let digest = password_digest("любой пароль");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
