//! Bcrypt password hashing

use crate::domain::gateways::PasswordHasher;
use crate::shared::errors::ServiceError;

pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    #[must_use]
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, ServiceError> {
        bcrypt::hash(password, self.cost).map_err(|e| ServiceError::Hashing(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, ServiceError> {
        bcrypt::verify(password, hash).map_err(|e| ServiceError::Hashing(e.to_string()))
    }
}
