use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sqlx::FromRow;

/// A credential row. Provisioned once at bootstrap, never mutated at
/// runtime; `password` holds the hex digest, not the cleartext.
#[derive(Debug, Default, Deserialize, Serialize, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: String,
}

/// Hex SHA-256 of a password.
///
/// This is deliberately the legacy unsalted scheme the seeded credential
/// rows were provisioned with. It is a known-weak bootstrap convention,
/// not a security boundary; switching to a salted hash would orphan every
/// existing row, so it must not be "fixed" here without a migration.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
