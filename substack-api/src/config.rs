//! Client construction options.

use std::path::PathBuf;

/// Platform-wide login endpoint. Login never goes through the publication host.
pub const LOGIN_URL: &str = "https://substack.com/api/v1/login";

/// Credential file consulted when no email or password is supplied.
pub const DEFAULT_ENV_FILE: &str = ".env";

const USER_AGENT: &str = concat!("substack-api/", env!("CARGO_PKG_VERSION"));

/// Options for [`SubstackClient::with_config`](crate::SubstackClient::with_config).
///
/// The defaults talk to the real platform and read `./.env`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absolute URL of the form-login endpoint.
    pub login_url: String,
    /// Credential file read when both email and password are empty.
    pub env_file: PathBuf,
    /// `User-Agent` for the default transport. Ignored when `http` is set.
    pub user_agent: String,
    /// Pre-built transport. Timeouts, proxies, and TLS settings are
    /// configured here; the client adds nothing on top.
    pub http: Option<reqwest::blocking::Client>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            login_url: LOGIN_URL.to_owned(),
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            user_agent: USER_AGENT.to_owned(),
            http: None,
        }
    }
}

impl ClientConfig {
    pub fn login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = url.into();
        self
    }

    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = path.into();
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn http_client(mut self, http: reqwest::blocking::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub(crate) fn build_http(&self) -> reqwest::Result<reqwest::blocking::Client> {
        match &self.http {
            Some(http) => Ok(http.clone()),
            None => reqwest::blocking::Client::builder()
                .user_agent(&self.user_agent)
                .build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_platform_login() {
        let config = ClientConfig::default();
        assert_eq!(config.login_url, LOGIN_URL);
        assert_eq!(config.env_file, PathBuf::from(".env"));
        assert!(config.user_agent.starts_with("substack-api/"));
        assert!(config.http.is_none());
    }

    #[test]
    fn builder_methods_override() {
        let config = ClientConfig::default()
            .login_url("http://127.0.0.1:1/api/v1/login")
            .env_file("creds.env")
            .user_agent("test");
        assert_eq!(config.login_url, "http://127.0.0.1:1/api/v1/login");
        assert_eq!(config.env_file, PathBuf::from("creds.env"));
        assert_eq!(config.user_agent, "test");
    }
}
