//! Substack publication API client library.
//!
//! Provides cookie-authenticated access to a publication's private API
//! (users, post management, drafts) and unauthenticated access to its public
//! endpoints (metadata, posts, categories, subscriptions).
//!
//! # Authentication
//!
//! [`SubstackClient::new`] logs in with email and password through the
//! platform login form and keeps the returned session cookies for later
//! calls. Passing two empty strings reads `EMAIL` and `PASSWORD` from `./.env`.
//!
//! ```no_run
//! use substack_api::SubstackClient;
//!
//! let client = SubstackClient::new("me@example.com", "hunter2", "https://example.substack.com")?;
//! for user in client.publication_users()? {
//!     println!("{} ({})", user.name, user.id);
//! }
//! # Ok::<(), substack_api::SubstackError>(())
//! ```
//!
//! Public data needs no login:
//!
//! ```no_run
//! let publication = substack_api::fetch_publication("https://example.substack.com")?;
//! println!("{}", publication.name);
//! # Ok::<(), substack_api::SubstackError>(())
//! ```
//!
//! # API endpoint mapping
//!
//! Paths are relative to `<publication>/api/v1`.
//!
//! | Method                                   | Endpoint                           | Auth   |
//! |------------------------------------------|------------------------------------|--------|
//! | [`SubstackClient::publication_users`]    | `GET /publication/users`           | cookie |
//! | [`SubstackClient::publication`]          | `GET /publication`                 | none   |
//! | [`SubstackClient::posts`]                | `GET /post_management/published`   | cookie |
//! | [`SubstackClient::drafts`]               | `GET /post_management/published`   | cookie |
//! | [`SubstackClient::public_posts`]         | `GET /posts`                       | none   |
//! | [`SubstackClient::subscriptions`]        | `GET /subscriptions`               | none   |
//! | [`SubstackClient::categories`]           | `GET /categories`                  | none   |
//! | [`SubstackClient::create_draft`]         | `POST /drafts/`                    | cookie |
//! | [`SubstackClient::update_draft`]         | `PUT /drafts/{id}`                 | cookie |
//! | [`SubstackClient::publish_draft`]        | `POST /drafts/{id}/publish`        | cookie |
//! | [`SubstackClient::delete_draft`]         | `DELETE /drafts/{id}`              | cookie |
//!
//! Calls are blocking and single-shot: no retries, no pagination beyond the
//! first 25 posts.

pub mod auth;
pub mod client;
pub mod config;
mod draft;
pub mod error;
mod post;
mod publication;
pub mod types;

pub use auth::Credentials;
pub use client::{SubstackClient, urljoin};
pub use config::ClientConfig;
pub use error::{Result, SubstackError};
pub use post::fetch_publication_posts;
pub use publication::{fetch_categories, fetch_publication, fetch_subscriptions};
