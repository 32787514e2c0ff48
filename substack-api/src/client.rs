//! HTTP client for the Substack API.
//!
//! Every call follows the same path:
//!
//! 1. Join the endpoint path onto `<publication>/api/v1`
//! 2. Attach the session cookies captured at login (if any)
//! 3. Send the request on the blocking transport
//! 4. Reject statuses outside `200..300` with [`SubstackError::Api`]
//!    without looking at the body
//! 5. Decode the body into the endpoint's type; a mismatch is
//!    [`SubstackError::Decode`]
//!
//! There is no retry, backoff, or timeout handling here. Configure the
//! transport through [`ClientConfig::http_client`] if you need timeouts.
//!
//! # Login
//!
//! Login is a form POST to `https://substack.com/api/v1/login`:
//!
//! ```text
//! email=me%40example.com&password=...
//! ```
//!
//! A 2xx answer carries the session in `Set-Cookie` headers. Those cookies
//! are replayed on every later request, including requests to custom domains.

use crate::auth::{CookieJar, Credentials};
use crate::config::ClientConfig;
use crate::error::{Result, SubstackError};
use log::{debug, info, warn};
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::COOKIE;
use serde::de::DeserializeOwned;
use std::path::Path;

const API_PATH: &str = "api/v1";

/// Blocking client bound to one publication.
///
/// Holds a [`reqwest::blocking::Client`], the normalized publication API URL,
/// and a [`CookieJar`]. Endpoint methods live in the `publication`, `post`,
/// and `draft` modules as `impl SubstackClient` blocks.
///
/// The jar is only written during construction, so every endpoint method
/// takes `&self`.
#[derive(Debug, Clone)]
pub struct SubstackClient {
    http: Client,
    publication_url: String,
    cookies: CookieJar,
}

impl SubstackClient {
    /// Create a client and log in.
    ///
    /// When `email` and `password` are both empty they are read from `./.env`
    /// (`EMAIL=` / `PASSWORD=` lines). An unreadable file is logged and login
    /// proceeds with empty credentials, which the server rejects.
    ///
    /// # Errors
    ///
    /// [`SubstackError::Auth`] if the login request fails or is refused.
    pub fn new(email: &str, password: &str, publication_url: &str) -> Result<Self> {
        Self::with_config(
            Credentials::new(email, password),
            publication_url,
            ClientConfig::default(),
        )
    }

    /// Create a client with explicit [`ClientConfig`] and log in.
    ///
    /// # Errors
    ///
    /// Every failure, including a transport that cannot be built from the
    /// config, is reported as [`SubstackError::Auth`].
    pub fn with_config(
        credentials: Credentials,
        publication_url: &str,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = config
            .build_http()
            .map_err(|e| SubstackError::Auth(Box::new(e.into())))?;
        let mut client = Self::from_http(http, publication_url);
        let credentials = resolve_credentials(credentials, &config.env_file);
        client.login(&config.login_url, &credentials)?;
        Ok(client)
    }

    /// Create a client without logging in. Suitable for public endpoints.
    pub fn anonymous(publication_url: &str) -> Result<Self> {
        let http = ClientConfig::default().build_http()?;
        Ok(Self::from_http(http, publication_url))
    }

    /// Wrap an existing transport without logging in.
    pub fn from_http(http: Client, publication_url: &str) -> Self {
        Self {
            http,
            publication_url: normalize_publication_url(publication_url),
            cookies: CookieJar::default(),
        }
    }

    /// The normalized API base, e.g. `https://example.substack.com/api/v1`.
    pub fn publication_url(&self) -> &str {
        &self.publication_url
    }

    /// Cookies captured at login.
    pub fn cookies(&self) -> &CookieJar {
        &self.cookies
    }

    /// Whether login left any session cookie behind. Not validated
    /// against the server.
    pub fn is_authenticated(&self) -> bool {
        !self.cookies.is_empty()
    }

    fn login(&mut self, login_url: &str, credentials: &Credentials) -> Result<()> {
        debug!("POST {login_url}");
        let resp = self
            .http
            .post(login_url)
            .form(&[
                ("email", credentials.email.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .map_err(|e| SubstackError::Auth(Box::new(e.into())))?;
        let resp = check_status(resp).map_err(|e| SubstackError::Auth(Box::new(e)))?;

        for cookie in resp.cookies() {
            self.cookies.insert(cookie.name(), cookie.value());
        }
        debug!("session cookies issued for {}", credentials.email);
        info!("logged in ({} session cookies)", self.cookies.len());
        Ok(())
    }

    /// Build a request for `path` (relative to the API base) with the
    /// session cookies attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = urljoin(&self.publication_url, path);
        debug!("{method} {url}");
        let req = self.http.request(method, url);
        match self.cookies.cookie_header() {
            Some(cookie) => req.header(COOKIE, cookie),
            None => req,
        }
    }

    /// `GET path` and decode the JSON body.
    pub(crate) fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        send_json(self.request(Method::GET, path))
    }
}

/// Send a request and decode its JSON body.
pub(crate) fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T> {
    let resp = check_status(req.send()?)?;
    let body = resp.text()?;
    Ok(serde_json::from_str(&body)?)
}

/// Send a request, checking the status and dropping the body.
pub(crate) fn send_discard(req: RequestBuilder) -> Result<()> {
    check_status(req.send()?)?;
    Ok(())
}

fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    debug!("{} answered {status}", resp.url());
    Err(SubstackError::Api {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_owned(),
    })
}

fn resolve_credentials(credentials: Credentials, env_file: &Path) -> Credentials {
    if !credentials.is_empty() {
        return credentials;
    }
    match Credentials::from_env_file(env_file) {
        Ok(credentials) => credentials,
        Err(e) => {
            warn!("unable to load {}: {e}", env_file.display());
            Credentials::default()
        }
    }
}

/// Join `path` onto `base` with exactly one `/` between them.
pub fn urljoin(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Turn a publication URL into its API base by appending `api/v1`.
///
/// URLs that already end in `/api/v1` are returned without the trailing
/// slash, so normalizing twice is harmless.
pub fn normalize_publication_url(url: &str) -> String {
    let base = url.trim_end_matches('/');
    if base.ends_with(&format!("/{API_PATH}")) {
        base.to_owned()
    } else {
        urljoin(base, API_PATH)
    }
}
