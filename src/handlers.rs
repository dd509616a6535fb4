use crate::bitrix_client::BitrixClient;
use crate::config::Config;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration, read-only after startup.
    pub config: Config,
    /// Client for the Bitrix24 REST API.
    pub bitrix: BitrixClient,
}

/// GET /
///
/// Liveness endpoint. The body is kept byte-for-byte from the service this
/// one replaced, existing monitors match on it.
pub async fn root() -> &'static str {
    "Timeweb Cloud + Flask = \u{2764}\u{fe0f}"
}

/// GET /hello-flask
///
/// Second legacy liveness endpoint, same compatibility rule as `/`.
pub async fn hello_flask() -> &'static str {
    "Hello Flask!"
}
