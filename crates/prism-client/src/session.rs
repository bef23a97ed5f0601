//! Per-request token holder.
//!
//! Handlers share one [`Session`] with the middleware that built it. The
//! client writes refreshed tokens back so the middleware can forward them
//! to the browser as cookies. The lock is never held across an `.await`.

use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    pub access: Option<String>,
    pub refresh: Option<String>,
}

#[derive(Debug, Default)]
struct SessionInner {
    tokens: Tokens,
    refreshed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<Mutex<SessionInner>>,
}

impl Session {
    pub fn new(access: Option<String>, refresh: Option<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                tokens: Tokens { access, refresh },
                refreshed: false,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        // A poisoned lock still holds valid strings.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn access(&self) -> Option<String> {
        self.lock().tokens.access.clone()
    }

    pub fn refresh(&self) -> Option<String> {
        self.lock().tokens.refresh.clone()
    }

    pub fn tokens(&self) -> Tokens {
        self.lock().tokens.clone()
    }

    /// Stores a new access token, and the refresh token when rotated.
    pub fn update(&self, access: String, refresh: Option<String>) {
        let mut inner = self.lock();
        inner.tokens.access = Some(access);
        if let Some(refresh) = refresh {
            inner.tokens.refresh = Some(refresh);
        }
        inner.refreshed = true;
    }

    /// True once [`Session::update`] has run for this session.
    pub fn was_refreshed(&self) -> bool {
        self.lock().refreshed
    }
}
