//! Publication metadata, users, categories, and subscriptions.
//!
//! # Endpoints
//!
//! | Method                     | Path                 | Auth   |
//! |----------------------------|----------------------|--------|
//! | `publication`              | `GET /publication`   | none   |
//! | `publication_users`        | `GET /publication/users` | cookie |
//! | `categories`               | `GET /categories`    | none   |
//! | `subscriptions`            | `GET /subscriptions` | none   |
//!
//! `publication/users` answers with a bare JSON array:
//!
//! ```json
//! [
//!   { "id": 1, "name": "Ann", "handle": "ann", "photo_url": "https://...",
//!     "bio": null, "profile_set_up_at": "2023-01-01T00:00:00.000Z" }
//! ]
//! ```
//!
//! The package-level `fetch_*` functions are the same calls made through an
//! [`anonymous`](SubstackClient::anonymous) client.

use crate::client::SubstackClient;
use crate::error::Result;
use crate::types::{Category, Publication, SubscriptionsList, User};

impl SubstackClient {
    /// Users (authors and admins) attached to the publication.
    ///
    /// Requires a logged-in client; without the session cookie the server
    /// answers 401/403, surfaced as [`SubstackError::Api`](crate::SubstackError::Api).
    pub fn publication_users(&self) -> Result<Vec<User>> {
        self.get_json("publication/users")
    }

    /// Publication metadata.
    pub fn publication(&self) -> Result<Publication> {
        self.get_json("publication")
    }

    /// The platform's category taxonomy, as seen from this publication.
    pub fn categories(&self) -> Result<Vec<Category>> {
        self.get_json("categories")
    }

    /// Subscriptions visible to the current session.
    pub fn subscriptions(&self) -> Result<SubscriptionsList> {
        self.get_json("subscriptions")
    }
}

/// Fetch publication metadata without logging in.
pub fn fetch_publication(publication_url: &str) -> Result<Publication> {
    SubstackClient::anonymous(publication_url)?.publication()
}

/// Fetch the category list without logging in.
pub fn fetch_categories(publication_url: &str) -> Result<Vec<Category>> {
    SubstackClient::anonymous(publication_url)?.categories()
}

/// Fetch subscriptions without logging in.
pub fn fetch_subscriptions(publication_url: &str) -> Result<SubscriptionsList> {
    SubstackClient::anonymous(publication_url)?.subscriptions()
}
