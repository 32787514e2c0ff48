//! Post listings.
//!
//! ## `posts` / `drafts` — `GET /post_management/published`
//!
//! Query: `offset=0&limit=25&order_by=post_date&order_direction=desc`
//!
//! Response:
//! ```json
//! { "posts": [ { "id": 1, "title": "...", "stats": { ... } } ],
//!   "offset": 0, "limit": 25, "total": 113 }
//! ```
//!
//! Both methods use the `published` listing. The listing filter for
//! unpublished drafts has not been confirmed against the live API, so
//! `drafts` returns the same page as `posts` for now.
//!
//! ## `public_posts` — `GET /posts`
//!
//! Needs no session.

use crate::client::{SubstackClient, send_json};
use crate::error::Result;
use crate::types::Posts;
use reqwest::Method;

const PUBLISHED_LISTING: &str = "post_management/published";

const PAGE_QUERY: [(&str, &str); 4] = [
    ("offset", "0"),
    ("limit", "25"),
    ("order_by", "post_date"),
    ("order_direction", "desc"),
];

impl SubstackClient {
    /// First 25 published posts, newest first.
    pub fn posts(&self) -> Result<Posts> {
        self.post_management(PUBLISHED_LISTING)
    }

    /// First 25 entries of the post-management listing, newest first.
    ///
    /// Currently identical to [`posts`](Self::posts).
    pub fn drafts(&self) -> Result<Posts> {
        self.post_management(PUBLISHED_LISTING)
    }

    /// Public post feed of the publication.
    pub fn public_posts(&self) -> Result<Posts> {
        self.get_json("posts")
    }

    fn post_management(&self, listing: &str) -> Result<Posts> {
        let req = self.request(Method::GET, listing).query(&PAGE_QUERY);
        send_json(req)
    }
}

/// Fetch the public post feed without logging in.
pub fn fetch_publication_posts(publication_url: &str) -> Result<Posts> {
    SubstackClient::anonymous(publication_url)?.public_posts()
}
