//! Draft management. All endpoints require a logged-in client.
//!
//! # Endpoints
//!
//! ## `create_draft` — `POST /drafts/`
//!
//! Body: the [`Post`] as JSON (unset fields omitted). The server answers with
//! the stored draft, including its new `id`.
//!
//! ## `update_draft` — `PUT /drafts/{id}`
//!
//! Body: the fields to change. Answers with the updated draft.
//!
//! ## `publish_draft` — `POST /drafts/{id}/publish`
//!
//! Body: `{"send": true, "share_automatically": false}`. `send` emails the
//! post to subscribers. The response body is ignored.
//!
//! ## `delete_draft` — `DELETE /drafts/{id}`
//!
//! The response body is ignored.
//!
//! Draft ids are percent-encoded into a single path segment, so an id
//! containing `/` or `?` cannot reach a different endpoint.

use crate::client::{SubstackClient, send_discard, send_json};
use crate::error::Result;
use crate::types::{Post, PublishRequest};
use log::info;
use reqwest::Method;

impl SubstackClient {
    /// Create a draft and return the server's copy of it.
    ///
    /// The post is sent as the request body with unset fields omitted.
    pub fn create_draft(&self, post: &Post) -> Result<Post> {
        let req = self.request(Method::POST, "drafts/").json(post);
        let created: Post = send_json(req)?;
        info!("created draft {:?}", created.id);
        Ok(created)
    }

    /// Replace the fields set in `post` on draft `draft_id`.
    pub fn update_draft(&self, draft_id: &str, post: &Post) -> Result<Post> {
        let req = self
            .request(Method::PUT, &draft_path(draft_id, ""))
            .json(post);
        send_json(req)
    }

    /// Publish draft `draft_id`, optionally emailing subscribers and
    /// sharing it on connected accounts.
    pub fn publish_draft(
        &self,
        draft_id: &str,
        send: bool,
        share_automatically: bool,
    ) -> Result<()> {
        let body = PublishRequest {
            send,
            share_automatically,
        };
        let req = self
            .request(Method::POST, &draft_path(draft_id, "/publish"))
            .json(&body);
        send_discard(req)?;
        info!("published draft {draft_id} (send={send})");
        Ok(())
    }

    /// Delete draft `draft_id`.
    pub fn delete_draft(&self, draft_id: &str) -> Result<()> {
        send_discard(self.request(Method::DELETE, &draft_path(draft_id, "")))?;
        info!("deleted draft {draft_id}");
        Ok(())
    }
}

/// `drafts/{id}{suffix}` with the id percent-encoded as one segment.
fn draft_path(draft_id: &str, suffix: &str) -> String {
    format!("drafts/{}{suffix}", urlencoding::encode(draft_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_pass_through() {
        assert_eq!(draft_path("42", ""), "drafts/42");
        assert_eq!(draft_path("42", "/publish"), "drafts/42/publish");
    }

    #[test]
    fn separators_in_ids_are_escaped() {
        assert_eq!(draft_path("1/publish", ""), "drafts/1%2Fpublish");
        assert_eq!(draft_path("7?x=1", "/publish"), "drafts/7%3Fx%3D1/publish");
        assert_eq!(draft_path("../users", ""), "drafts/..%2Fusers");
    }
}
