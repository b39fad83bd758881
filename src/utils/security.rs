//! Security Utilities
//!
//! One-way credential hashing for user passwords.

use bcrypt::{hash, verify};

/// bcrypt work factor used for every stored password hash
pub const BCRYPT_COST: u32 = 10;

/// Hash a password using bcrypt with the service-wide cost
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash_password_with_cost(password, BCRYPT_COST)
}

/// Hash a password with custom bcrypt cost
///
/// Every call draws a fresh salt, so hashing the same plaintext twice yields
/// two different strings that both verify.
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password, cost)
}

/// Verify a password against its hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_password_hashing() {
        let password = "salainen";
        let hash = hash_password_with_cost(password, TEST_COST).unwrap();

        assert_ne!(hash, password);
        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted_per_call() {
        let first = hash_password_with_cost("sekret", TEST_COST).unwrap();
        let second = hash_password_with_cost("sekret", TEST_COST).unwrap();

        assert_ne!(first, second);
        assert!(verify_password("sekret", &first).unwrap());
        assert!(verify_password("sekret", &second).unwrap());
    }

    #[test]
    fn test_default_cost_is_embedded_in_hash() {
        let hash = hash_password("sekret").unwrap();
        assert!(hash.starts_with("$2b$10$"));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(verify_password("sekret", "not-a-bcrypt-hash").is_err());
    }
}
