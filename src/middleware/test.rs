use std::sync::Arc;

use tower_sessions::{MemoryStore, Session};

use crate::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, CsrfSession},
    },
    model::discord::DiscordUser,
};

fn test_session() -> Session {
    Session::new(None, Arc::new(MemoryStore::default()), None)
}

fn test_user() -> DiscordUser {
    DiscordUser {
        id: "1001".to_string(),
        username: "vrtex".to_string(),
        discriminator: "0001".to_string(),
        avatar: None,
    }
}

/// Tests that the guard rejects a session without an access token.
#[tokio::test]
async fn guard_requires_access_token() {
    let session = test_session();

    let result = AuthGuard::new(&session).require_token().await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));
}

/// Tests that the guard returns the stored access token.
#[tokio::test]
async fn guard_returns_stored_token() {
    let session = test_session();
    AuthSession::new(&session)
        .set_access_token("token-123")
        .await
        .unwrap();

    let token = AuthGuard::new(&session).require_token().await.unwrap();
    assert_eq!(token, "token-123");
}

/// Tests the cached-profile round trip, including the profile-less state a
/// session is left in when the callback's profile fetch fails.
#[tokio::test]
async fn user_round_trips_and_may_be_absent() {
    let session = test_session();
    let auth_session = AuthSession::new(&session);

    assert!(auth_session.user().await.unwrap().is_none());

    auth_session.set_user(&test_user()).await.unwrap();
    let user = auth_session.user().await.unwrap().unwrap();
    assert_eq!(user.id, "1001");
    assert_eq!(user.username, "vrtex");
}

/// Tests that clearing the session removes token and profile alike.
#[tokio::test]
async fn clear_removes_all_session_state() {
    let session = test_session();
    let auth_session = AuthSession::new(&session);

    auth_session.set_access_token("token-123").await.unwrap();
    auth_session.set_user(&test_user()).await.unwrap();

    auth_session.clear().await;

    assert!(auth_session.access_token().await.unwrap().is_none());
    assert!(auth_session.user().await.unwrap().is_none());
}

/// Tests that the CSRF token can only be taken once.
#[tokio::test]
async fn csrf_token_is_single_use() {
    let session = test_session();
    let csrf_session = CsrfSession::new(&session);

    csrf_session.set_token("state-abc".to_string()).await.unwrap();

    assert_eq!(
        csrf_session.take_token().await.unwrap().as_deref(),
        Some("state-abc")
    );
    assert!(csrf_session.take_token().await.unwrap().is_none());
}
