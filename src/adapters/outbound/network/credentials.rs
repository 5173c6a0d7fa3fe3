use crate::ports::outbound::RequestHeaders;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

/// Environment variable holding the GitHub API user
pub const USER_VARIABLE: &str = "GH_API_USER";

/// Environment variable holding the GitHub API token
pub const TOKEN_VARIABLE: &str = "GH_API_TOKEN";

/// Reads `(user, token)` from the environment; both or neither are returned.
pub fn authorization_credentials() -> (Option<String>, Option<String>) {
    credentials_from(|name| std::env::var(name).ok())
}

/// Same as [`authorization_credentials`] with an injectable variable lookup
pub fn credentials_from<F>(lookup: F) -> (Option<String>, Option<String>)
where
    F: Fn(&str) -> Option<String>,
{
    match (lookup(USER_VARIABLE), lookup(TOKEN_VARIABLE)) {
        (Some(user), Some(token)) => {
            debug!("GitHub API credentials found for user {}", user);
            (Some(user), Some(token))
        }
        _ => {
            debug!(
                "{} or {} not set; GitHub API requests are unauthenticated",
                USER_VARIABLE, TOKEN_VARIABLE
            );
            (None, None)
        }
    }
}

/// Basic authorization header for the given credentials, if both are present
pub fn authorization_headers(user: Option<&str>, token: Option<&str>) -> Option<RequestHeaders> {
    let (user, token) = (user?, token?);
    let encoded = STANDARD.encode(format!("{}:{}", user, token));
    Some(RequestHeaders::from([(
        "Authorization".to_string(),
        format!("Basic {}", encoded),
    )]))
}
