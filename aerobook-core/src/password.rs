use aerobook_shared::Masked;

use crate::{CoreError, CoreResult};

/// bcrypt with a fixed work factor. Hashing is CPU-bound, so both operations
/// run on tokio's blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, password: Masked<String>) -> CoreResult<String> {
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password.expose(), cost))
            .await
            .map_err(CoreError::internal)?
            .map_err(CoreError::internal)
    }

    pub async fn verify(&self, password: Masked<String>, hash: &str) -> CoreResult<bool> {
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(password.expose(), &hash))
            .await
            .map_err(CoreError::internal)?
            .map_err(CoreError::internal)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hasher = PasswordHasher::new(4 /* bcrypt minimum cost */);
        let hash = hasher.hash(Masked::from("correct horse")).await.unwrap();

        assert_ne!(hash, "correct horse");
        assert!(hasher.verify(Masked::from("correct horse"), &hash).await.unwrap());
        assert!(!hasher.verify(Masked::from("battery staple"), &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hash_is_salted() {
        let hasher = PasswordHasher::new(4 /* bcrypt minimum cost */);
        let first = hasher.hash(Masked::from("same")).await.unwrap();
        let second = hasher.hash(Masked::from("same")).await.unwrap();
        assert_ne!(first, second);
    }
}
