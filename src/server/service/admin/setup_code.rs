//! One-time code for creating the first admin account.
//!
//! When the server starts without any admin, a random code is generated, logged
//! together with the setup URL, and kept in memory. `POST /api/auth/setup` must
//! present it before it expires. A code is consumed by its first successful use.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

pub const SETUP_CODE_TTL: Duration = Duration::from_secs(60);
const SETUP_CODE_LENGTH: usize = 32;
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

struct PendingCode {
    value: String,
    expires_at: Instant,
}

/// Shared holder for the pending setup code.
///
/// Cloning shares the same slot, so the copy in `AppState` and the one used at
/// startup see the same code.
#[derive(Clone)]
pub struct SetupCodeService {
    pending: Arc<RwLock<Option<PendingCode>>>,
    ttl: Duration,
}

impl SetupCodeService {
    pub fn new() -> Self {
        Self::with_ttl(SETUP_CODE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            pending: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a fresh code, replacing any pending one.
    pub async fn generate(&self) -> String {
        let mut rng = rand::rng();
        let value: String = (0..SETUP_CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect();

        *self.pending.write().await = Some(PendingCode {
            value: value.clone(),
            expires_at: Instant::now() + self.ttl,
        });

        value
    }

    /// Returns true and clears the slot when `input` matches an unexpired code.
    ///
    /// An expired code is dropped on inspection. A wrong guess leaves a live code
    /// in place.
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut pending = self.pending.write().await;

        match pending.as_ref() {
            Some(code) if Instant::now() >= code.expires_at => {
                *pending = None;
                false
            }
            Some(code) if code.value == input => {
                *pending = None;
                true
            }
            _ => false,
        }
    }

    pub async fn is_pending(&self) -> bool {
        self.pending
            .read()
            .await
            .as_ref()
            .is_some_and(|code| Instant::now() < code.expires_at)
    }
}

impl Default for SetupCodeService {
    fn default() -> Self {
        Self::new()
    }
}
