use tower_sessions::{
    cookie::Key, service::SignedCookie, MemoryStore, SessionManagerLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{config::Config, data::store::JsonStore, error::AppError};

/// Installs the global tracing subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Builds the HTTP client used for all Discord API calls.
///
/// Redirects are disabled to prevent SSRF vulnerabilities; the OAuth token
/// exchange also requires a non-redirecting client.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Opens the JSON store, creating missing documents with empty content.
pub async fn init_store(config: &Config) -> Result<JsonStore, AppError> {
    let store = JsonStore::new(config.settings_path.clone(), config.members_path.clone());
    store.init().await?;

    Ok(store)
}

/// Builds the session layer: in-memory store, cookies signed with the
/// configured secret. Sessions do not survive a process restart, matching
/// their lifecycle of one authenticated browser session.
pub fn setup_session_layer(config: &Config) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store).with_signed(derive_session_key(&config.session_secret))
}

/// Builds the cookie signing key from the session secret.
///
/// `Key::from` requires at least 64 bytes of key material, so a short secret
/// is repeated until it is long enough.
fn derive_session_key(secret: &str) -> Key {
    let mut master = secret.as_bytes().to_vec();
    while master.len() < 64 {
        master.extend_from_slice(secret.as_bytes());
    }

    Key::from(&master)
}

#[cfg(test)]
mod test {
    use super::derive_session_key;

    /// Tests that a secret shorter than the 64-byte key minimum is padded
    /// into a valid key, deterministically.
    #[test]
    fn short_secret_yields_a_valid_key() {
        let key = derive_session_key("change_this_secret");

        assert!(key.master().len() >= 64);
        assert_eq!(key.master(), derive_session_key("change_this_secret").master());
    }

    /// Tests that different secrets sign with different keys.
    #[test]
    fn distinct_secrets_yield_distinct_keys() {
        let a = derive_session_key("first-secret");
        let b = derive_session_key("second-secret");

        assert_ne!(a.master(), b.master());
    }
}
