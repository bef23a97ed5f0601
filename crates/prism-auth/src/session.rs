//! Session state check.
//!
//! Every protected request, in the server and in the CLI, starts here. The
//! pair of tokens is classified into exactly one of four states and each
//! state maps to one action:
//!
//! | State                         | Action            | Location   |
//! |-------------------------------|-------------------|------------|
//! | `NoTokens`                    | `RedirectLogin`   | `/login`   |
//! | `AccessValid`                 | `Continue`        |            |
//! | `AccessExpiredRefreshValid`   | `RedirectRefresh` | `/refresh` |
//! | `BothExpired`                 | `RedirectLogout`  | `/logout`  |
//!
//! A token that is present but cannot be decoded counts as expired. A
//! missing access token next to a live refresh token is treated like an
//! expired one, so the user is refreshed rather than sent to login.

use chrono::Utc;
use prism_config::SessionConfig;
use serde::Serialize;
use utoipa::ToSchema;

use crate::jwt::is_token_valid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    NoTokens,
    AccessValid,
    AccessExpiredRefreshValid,
    BothExpired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionAction {
    Continue,
    RedirectLogin,
    RedirectRefresh,
    RedirectLogout,
}

fn present(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|t| !t.is_empty())
}

impl SessionState {
    /// Classifies a token pair at `now` (Unix seconds).
    pub fn classify(
        access: Option<&str>,
        refresh: Option<&str>,
        now: i64,
        leeway_secs: i64,
    ) -> Self {
        let access = present(access);
        let refresh = present(refresh);

        if access.is_none() && refresh.is_none() {
            return SessionState::NoTokens;
        }

        if access.is_some_and(|t| is_token_valid(t, now, leeway_secs)) {
            return SessionState::AccessValid;
        }

        if refresh.is_some_and(|t| is_token_valid(t, now, leeway_secs)) {
            SessionState::AccessExpiredRefreshValid
        } else {
            SessionState::BothExpired
        }
    }

    /// Classifies against the wall clock with the configured leeway.
    pub fn classify_now(access: Option<&str>, refresh: Option<&str>, config: &SessionConfig) -> Self {
        Self::classify(
            access,
            refresh,
            Utc::now().timestamp(),
            config.expiry_leeway_secs,
        )
    }

    pub fn action(self) -> SessionAction {
        match self {
            SessionState::NoTokens => SessionAction::RedirectLogin,
            SessionState::AccessValid => SessionAction::Continue,
            SessionState::AccessExpiredRefreshValid => SessionAction::RedirectRefresh,
            SessionState::BothExpired => SessionAction::RedirectLogout,
        }
    }
}

impl SessionAction {
    /// Route the user is sent to, `None` for [`SessionAction::Continue`].
    pub fn location(self) -> Option<&'static str> {
        match self {
            SessionAction::Continue => None,
            SessionAction::RedirectLogin => Some("/login"),
            SessionAction::RedirectRefresh => Some("/refresh"),
            SessionAction::RedirectLogout => Some("/logout"),
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SessionState::NoTokens => "not signed in",
            SessionState::AccessValid => "signed in",
            SessionState::AccessExpiredRefreshValid => "access expired, refresh available",
            SessionState::BothExpired => "session expired",
        };
        f.write_str(label)
    }
}
