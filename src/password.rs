use crate::error::AppError;
use bcrypt::hash;

/// Hashes user passwords with a fixed bcrypt cost.
///
/// The cost comes from `Config::bcrypt_cost`; tests use the bcrypt minimum of 4 to
/// stay fast.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        Ok(hash(password, self.cost)?)
    }
}
