/**
 * Password Hashing
 *
 * Deterministic salted hashing for stored credentials. The server-wide salt
 * is prepended to the password and the result digested with SHA-256.
 *
 * Determinism is load-bearing: authentication re-hashes the presented
 * password and matches the digest against the stored column in SQL, so the
 * same input must always produce the same output. There is no per-user
 * salt.
 */

use sha2::{Digest, Sha256};

/// Deterministic salted SHA-256 hasher
///
/// The salt comes from configuration and is fixed for the lifetime of the
/// process.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    salt: String,
}

impl PasswordHasher {
    /// Create a hasher with the given server-wide salt
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }

    /// Hash a password
    ///
    /// Digests salt bytes followed by password bytes and returns the 32-byte
    /// SHA-256 output.
    pub fn hash(&self, password: &str) -> Vec<u8> {
        let mut digest = Sha256::new();
        digest.update(self.salt.as_bytes());
        digest.update(password.as_bytes());
        digest.finalize().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hash_is_deterministic() {
        let hasher = PasswordHasher::new("pepper");
        assert_eq!(hasher.hash("password123"), hasher.hash("password123"));
    }

    #[test]
    fn test_hash_is_32_bytes() {
        let hasher = PasswordHasher::new("pepper");
        assert_eq!(hasher.hash("password123").len(), 32);
    }

    #[test]
    fn test_different_salts_produce_different_hashes() {
        let first = PasswordHasher::new("salt-one");
        let second = PasswordHasher::new("salt-two");
        assert_ne!(first.hash("password123"), second.hash("password123"));
    }

    #[test]
    fn test_different_passwords_produce_different_hashes() {
        let hasher = PasswordHasher::new("pepper");
        assert_ne!(hasher.hash("password123"), hasher.hash("password124"));
    }

    #[test]
    fn test_salt_is_prepended_not_appended() {
        // SHA-256("abc") split as salt "a" + password "bc"
        let hasher = PasswordHasher::new("a");
        assert_eq!(
            hex::encode(hasher.hash("bc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_empty_salt_hashes_password_alone() {
        let hasher = PasswordHasher::new("");
        assert_eq!(
            hex::encode(hasher.hash("abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
