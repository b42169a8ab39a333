use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to hash or verify a password with argon2.
    ///
    /// Also raised when a stored hash is not a valid PHC string.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Cached leaderboard payload could not be (de)serialized.
    #[error("Leaderboard cache payload is invalid: {0}")]
    CachePayload(#[from] serde_json::Error),
}
