//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: the config is reference counted, `reqwest::Client` uses an `Arc`
//! internally, and `JsonStore` only carries document paths.

use std::sync::Arc;

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};

use crate::{config::Config, data::store::JsonStore};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Environment-driven application configuration.
    pub config: Arc<Config>,

    /// HTTP client for Discord API requests.
    ///
    /// Configured with redirects disabled to prevent SSRF vulnerabilities.
    pub http_client: reqwest::Client,

    /// Flat-file JSON store holding guild settings and the VRTEX+ member list.
    pub store: JsonStore,
}

impl AppState {
    pub fn new(config: Arc<Config>, http_client: reqwest::Client, store: JsonStore) -> Self {
        Self {
            config,
            http_client,
            store,
        }
    }
}
