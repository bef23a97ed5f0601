//! Session check for CLI commands.
//!
//! Runs the same state table as the web middleware, but instead of
//! redirecting it refreshes in place or tells the user to log in again.

use anyhow::{Result, anyhow, bail};
use prism_auth::{SessionAction, SessionState, decode_claims};
use prism_client::{BackendClient, ClientError, Session};
use prism_config::SessionConfig;
use prism_models::CurrentUser;
use tracing::{debug, info};

use crate::credentials::{CredentialStore, Credentials};

pub const LOGIN_HINT: &str = "run `prism-cli login` to sign in";

/// A usable session and the user its access token belongs to.
#[derive(Debug, Clone)]
pub struct ActiveSession {
    pub session: Session,
    pub user: CurrentUser,
    pub email: Option<String>,
}

impl ActiveSession {
    /// Writes tokens back if the client refreshed them during a command.
    pub fn persist(&self, store: &CredentialStore) -> Result<()> {
        if self.session.was_refreshed() {
            store.save(&Credentials::new(self.session.tokens(), self.email.clone()))?;
        }
        Ok(())
    }
}

/// Loads stored tokens and applies the session state check.
///
/// An expired access token with a live refresh token is refreshed and the
/// new pair saved. Expired sessions are cleared from disk.
pub async fn open_session(
    client: &BackendClient,
    store: &CredentialStore,
    config: &SessionConfig,
) -> Result<ActiveSession> {
    let Some(credentials) = store.load()? else {
        bail!("not signed in; {LOGIN_HINT}");
    };

    let state = SessionState::classify_now(
        credentials.access.as_deref(),
        credentials.refresh.as_deref(),
        config,
    );
    debug!(%state, "session check");

    let session = Session::new(credentials.access.clone(), credentials.refresh.clone());
    match state.action() {
        SessionAction::Continue => {}
        SessionAction::RedirectRefresh => {
            match client.refresh_session(&session).await {
                Ok(_) => {}
                Err(ClientError::SessionExpired) => {
                    store.clear()?;
                    bail!("session expired; {LOGIN_HINT}");
                }
                Err(e) => return Err(e.into()),
            }
            info!("access token refreshed");
            store.save(&Credentials::new(session.tokens(), credentials.email.clone()))?;
        }
        SessionAction::RedirectLogin => bail!("not signed in; {LOGIN_HINT}"),
        SessionAction::RedirectLogout => {
            store.clear()?;
            bail!("session expired; {LOGIN_HINT}");
        }
    }

    let user = session
        .access()
        .and_then(|token| decode_claims(&token).ok())
        .and_then(|claims| CurrentUser::from_claims(&claims))
        .ok_or_else(|| anyhow!("access token carries no user id; {LOGIN_HINT}"))?;

    Ok(ActiveSession {
        session,
        user,
        email: credentials.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use prism_client::Tokens;
    use prism_config::BackendConfig;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn token(exp_offset: i64) -> String {
        encode(
            &Header::default(),
            &json!({"exp": chrono::Utc::now().timestamp() + exp_offset, "user_id": 7}),
            &EncodingKey::from_secret(b"k"),
        )
        .unwrap()
    }

    fn store_with(dir: &TempDir, access: Option<String>, refresh: Option<String>) -> CredentialStore {
        let store = CredentialStore::new(dir.path().join("credentials.json"));
        store
            .save(&Credentials::new(Tokens { access, refresh }, None))
            .unwrap();
        store
    }

    async fn client() -> (BackendClient, MockServer) {
        let backend = MockServer::start().await;
        let client = BackendClient::new(&BackendConfig::new(backend.uri(), 5)).unwrap();
        (client, backend)
    }

    #[tokio::test]
    async fn test_valid_access_opens_without_backend() {
        let (client, _backend) = client().await;
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, Some(token(300)), None);

        let active = open_session(&client, &store, &SessionConfig::default())
            .await
            .unwrap();

        assert_eq!(active.user.user_id.get(), 7);
        assert!(!active.session.was_refreshed());
    }

    #[tokio::test]
    async fn test_missing_file_asks_for_login() {
        let (client, _backend) = client().await;
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join("credentials.json"));

        let err = open_session(&client, &store, &SessionConfig::default())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("not signed in"));
    }

    #[tokio::test]
    async fn test_expired_access_is_refreshed_and_saved() {
        let (client, backend) = client().await;
        let fresh = token(600);
        Mock::given(method("POST"))
            .and(path("/api/token/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": fresh})))
            .expect(1)
            .mount(&backend)
            .await;

        let dir = TempDir::new().unwrap();
        let refresh = token(86_400);
        let store = store_with(&dir, Some(token(-10)), Some(refresh.clone()));

        let active = open_session(&client, &store, &SessionConfig::default())
            .await
            .unwrap();

        assert_eq!(active.session.access(), Some(fresh.clone()));
        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.access, Some(fresh));
        assert_eq!(saved.refresh, Some(refresh));
    }

    #[tokio::test]
    async fn test_rejected_refresh_clears_credentials() {
        let (client, backend) = client().await;
        Mock::given(method("POST"))
            .and(path("/api/token/refresh"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Token is blacklisted"})))
            .mount(&backend)
            .await;

        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, None, Some(token(86_400)));

        let err = open_session(&client, &store, &SessionConfig::default())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("session expired"));
        assert!(store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_both_expired_clears_credentials() {
        let (client, _backend) = client().await;
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, Some(token(-10)), Some(token(-10)));

        let err = open_session(&client, &store, &SessionConfig::default())
            .await
            .unwrap_err();

        assert!(err.to_string().contains(LOGIN_HINT));
        assert!(store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_persist_saves_only_after_refresh() {
        let (client, _backend) = client().await;
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, Some(token(300)), Some(token(86_400)));
        let active = open_session(&client, &store, &SessionConfig::default())
            .await
            .unwrap();

        active.persist(&store).unwrap();
        let before = store.load().unwrap().unwrap();

        let newer = token(900);
        active.session.update(newer.clone(), None);
        active.persist(&store).unwrap();

        let after = store.load().unwrap().unwrap();
        assert_eq!(after.access, Some(newer));
        assert_eq!(after.refresh, before.refresh);
    }
}
