//! Salted adaptive password hashing.

use anyhow::{Context, Result};

/// Work factor for every hash written by signup.
pub const HASH_COST: u32 = 10;

/// bcrypt only reads this many bytes of input; longer passwords are refused
/// instead of being cut short.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Whether `plaintext` is short enough to be hashed without truncation.
#[must_use]
pub const fn fits(plaintext: &str) -> bool {
    plaintext.len() <= MAX_PASSWORD_BYTES
}

pub trait PasswordHasher: Send + Sync {
    /// Hash `plaintext` with a fresh random salt.
    ///
    /// # Errors
    /// Returns an error if the underlying primitive fails or `plaintext` is
    /// longer than [`MAX_PASSWORD_BYTES`].
    fn hash(&self, plaintext: &str) -> Result<String>;

    /// Compare `plaintext` against a hash produced by [`PasswordHasher::hash`].
    /// A `plaintext` longer than [`MAX_PASSWORD_BYTES`] never matches.
    ///
    /// # Errors
    /// Returns an error if `hash` is not a valid digest.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool>;
}

#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    #[must_use]
    pub const fn new() -> Self {
        Self { cost: HASH_COST }
    }

    /// Only tests should lower the cost.
    #[must_use]
    pub const fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        bcrypt::non_truncating_hash(plaintext, self.cost).context("failed to hash password")
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool> {
        if !fits(plaintext) {
            return Ok(false);
        }

        bcrypt::non_truncating_verify(plaintext, hash).context("failed to verify password")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::{Rng, distributions::Alphanumeric, thread_rng};

    fn random_plaintext(len: usize) -> String {
        thread_rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    #[test]
    fn default_cost_is_ten() {
        assert_eq!(BcryptHasher::default().cost(), 10);
    }

    #[test]
    fn hash_embeds_cost_and_never_echoes_plaintext() {
        let hasher = BcryptHasher::new();
        let hash = hasher.hash("secret1").unwrap();

        assert!(hash.starts_with("$2b$10$"), "unexpected hash prefix: {hash}");
        assert_ne!(hash, "secret1");
        assert!(!hash.contains("secret1"));
    }

    #[test]
    fn same_plaintext_gets_different_salts() {
        let hasher = BcryptHasher::with_cost(4);
        let first = hasher.hash("secret1").unwrap();
        let second = hasher.hash("secret1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("secret1", &first).unwrap());
        assert!(hasher.verify("secret1", &second).unwrap());
    }

    #[test]
    fn round_trip_across_random_pairs() {
        let hasher = BcryptHasher::with_cost(4);
        let mut rng = thread_rng();

        for _ in 0..16 {
            let len = rng.gen_range(1..=48);
            let original = random_plaintext(len);
            let mut other = random_plaintext(rng.gen_range(1..=48));
            while other == original {
                other = random_plaintext(len);
            }

            let hash = hasher.hash(&original).unwrap();
            assert_ne!(hash, original);
            assert!(hasher.verify(&original, &hash).unwrap());
            assert!(!hasher.verify(&other, &hash).unwrap());
        }
    }

    #[test]
    fn long_passwords_are_not_truncated() {
        let hasher = BcryptHasher::with_cost(4);
        let limit = "a".repeat(MAX_PASSWORD_BYTES);
        let hash = hasher.hash(&limit).unwrap();

        assert!(hasher.verify(&limit, &hash).unwrap());
        assert!(!hasher.verify(&format!("{limit}x"), &hash).unwrap());
        assert!(!hasher.verify(&format!("{limit}y"), &hash).unwrap());
        assert!(hasher.hash(&format!("{limit}x")).is_err());
    }

    #[test]
    fn fits_counts_bytes() {
        assert!(fits(&"a".repeat(MAX_PASSWORD_BYTES)));
        assert!(!fits(&"a".repeat(MAX_PASSWORD_BYTES + 1)));
        // 36 two-byte chars fill the limit exactly
        assert!(fits(&"é".repeat(36)));
        assert!(!fits(&"é".repeat(37)));
    }

    #[test]
    fn verify_rejects_malformed_hash() {
        let hasher = BcryptHasher::new();
        assert!(hasher.verify("secret1", "not-a-bcrypt-hash").is_err());
    }
}
