//! Credentials, credential files, and the session cookie jar.
//!
//! Substack issues its session as ordinary `Set-Cookie` headers on the login
//! response (`substack.sid`, `substack.lli`, ...). The jar keeps those
//! name/value pairs and replays them as a single `Cookie` header on every
//! later request, regardless of which host the publication lives on.
//!
//! Credentials may come from a dotenv-style file:
//!
//! ```text
//! EMAIL=me@example.com
//! PASSWORD=hunter2
//! ```

use crate::error::Result;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Login credentials. Only used to obtain the session cookies.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// True when both the email and the password are empty.
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }

    /// Read `EMAIL` and `PASSWORD` from a `KEY=VALUE` file.
    ///
    /// Missing keys become empty strings.
    pub fn from_env_file(path: &Path) -> Result<Self> {
        let mut env = load_env(path)?;
        Ok(Self {
            email: env.remove("EMAIL").unwrap_or_default(),
            password: env.remove("PASSWORD").unwrap_or_default(),
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Load a dotenv-style file into a key/value map.
///
/// Nothing is written to the process environment; callers that want that
/// can do it themselves.
pub fn load_env(path: &Path) -> Result<HashMap<String, String>> {
    let data = fs::read_to_string(path)?;
    Ok(parse_env(&data))
}

/// Parse `KEY=VALUE` lines. Splits on the first `=`, so values may contain
/// `=`. Blank lines, `#` comments, and lines without `=` are skipped.
pub fn parse_env(data: &str) -> HashMap<String, String> {
    data.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}

/// Session cookies captured at login.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    cookies: Vec<(String, String)>,
}

impl CookieJar {
    /// Store a cookie, replacing an earlier one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.cookies.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.cookies.push((name, value)),
        }
    }

    /// Look up a cookie value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Build the `Cookie` HTTP header value, or `None` for an empty jar.
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self
            .cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        Some(pairs.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_env_splits_on_first_equals() {
        let env = parse_env("EMAIL=me@example.com\nPASSWORD=a=b=c\n");
        assert_eq!(env["EMAIL"], "me@example.com");
        assert_eq!(env["PASSWORD"], "a=b=c");
    }

    #[test]
    fn parse_env_skips_noise() {
        let env = parse_env("# comment\n\nNOEQUALS\nKEY=\r\nOTHER=1\r\n");
        assert_eq!(env.len(), 2);
        assert_eq!(env["KEY"], "");
        assert_eq!(env["OTHER"], "1");
    }

    #[test]
    fn credentials_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "EMAIL=a@b.c").unwrap();
        writeln!(file, "PASSWORD=secret").unwrap();
        let creds = Credentials::from_env_file(file.path()).unwrap();
        assert_eq!(creds, Credentials::new("a@b.c", "secret"));
    }

    #[test]
    fn credentials_file_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "EMAIL=a@b.c").unwrap();
        let creds = Credentials::from_env_file(file.path()).unwrap();
        assert_eq!(creds.email, "a@b.c");
        assert!(creds.password.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_env(&dir.path().join("nope.env")).unwrap_err();
        assert!(matches!(err, crate::SubstackError::Io(_)));
    }

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("a@b.c", "secret");
        let out = format!("{creds:?}");
        assert!(out.contains("a@b.c"));
        assert!(!out.contains("secret"));
    }

    #[test]
    fn cookie_header_joins_pairs() {
        let mut jar = CookieJar::default();
        assert_eq!(jar.cookie_header(), None);
        jar.insert("substack.sid", "abc");
        jar.insert("substack.lli", "1");
        jar.insert("substack.sid", "def");
        assert_eq!(jar.len(), 2);
        assert_eq!(jar.get("substack.sid"), Some("def"));
        assert_eq!(
            jar.cookie_header().as_deref(),
            Some("substack.sid=def; substack.lli=1")
        );
    }
}
