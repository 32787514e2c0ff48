//! Data types for Substack API responses.
//!
//! Field names match the API's `snake_case` JSON keys except for the byline
//! lists, which the API spells in camelCase (`draftBylines`,
//! `publishedBylines`).
//!
//! Substack omits or nulls many fields depending on the endpoint and the
//! caller's role. Missing keys decode to defaults; `null` decodes to `None`
//! for `Option` fields and to the type's default (`0`, `false`, `""`, empty
//! list) for everything else. Only a structurally wrong body (a string where
//! an object or list is expected, invalid JSON) fails to decode.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Decode `null` as `T::default()`. `#[serde(default)]` only covers absent keys.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Publication metadata.
///
/// Returned by [`SubstackClient::publication`](crate::SubstackClient::publication)
/// and [`fetch_publication`](crate::fetch_publication).
///
/// The `*_content` / `*_footer` fields hold rendered email templates as raw
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    /// `<subdomain>.substack.com`.
    #[serde(deserialize_with = "null_default")]
    pub subdomain: String,
    /// Display name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Custom domain, if the publication has one.
    pub custom_domain: Option<String>,
    pub logo_url: Option<String>,
    pub logo_url_wide: Option<String>,
    pub cover_photo_url: Option<String>,
    pub copyright: Option<String>,
    /// Sender name on outgoing emails.
    pub email_from_name: Option<String>,
    pub subscribe_content: Option<String>,
    pub subscribe_footer: Option<String>,
    pub welcome_email_content: Option<String>,
}

/// A subscriber or author profile.
///
/// Returned by [`SubstackClient::publication_users`](crate::SubstackClient::publication_users)
/// and embedded in [`Post`] byline lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub handle: Option<String>,
    pub previous_name: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    /// ISO 8601 timestamp; `None` until the user finishes their profile.
    pub profile_set_up_at: Option<String>,
}

/// Engagement statistics attached to a [`Post`].
///
/// Rates and the estimated value are fractional on the wire, so they are
/// `f64`; everything else is a count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostStats {
    #[serde(deserialize_with = "null_default")]
    pub views: u64,
    #[serde(deserialize_with = "null_default")]
    pub opens: u64,
    #[serde(deserialize_with = "null_default")]
    pub opened: u64,
    #[serde(deserialize_with = "null_default")]
    pub open_rate: f64,
    #[serde(deserialize_with = "null_default")]
    pub clicked: u64,
    #[serde(deserialize_with = "null_default")]
    pub clicks: u64,
    #[serde(deserialize_with = "null_default")]
    pub sent: u64,
    #[serde(deserialize_with = "null_default")]
    pub delivered: u64,
    #[serde(deserialize_with = "null_default")]
    pub downloads: u64,
    #[serde(deserialize_with = "null_default")]
    pub downloads_day7: u64,
    #[serde(deserialize_with = "null_default")]
    pub downloads_day30: u64,
    #[serde(deserialize_with = "null_default")]
    pub downloads_day90: u64,
    #[serde(deserialize_with = "null_default")]
    pub podcast_preview_downloads: u64,
    #[serde(deserialize_with = "null_default")]
    pub podcast_preview_downloads_day30: u64,
    #[serde(deserialize_with = "null_default")]
    pub video_viewers: u64,
    #[serde(deserialize_with = "null_default")]
    pub video_views: u64,
    #[serde(deserialize_with = "null_default")]
    pub video_minutes_watched: u64,
    #[serde(deserialize_with = "null_default")]
    pub signups_within_1_day: u64,
    #[serde(deserialize_with = "null_default")]
    pub disables_within_1_day: u64,
    #[serde(deserialize_with = "null_default")]
    pub subscriptions_within_1_day: u64,
    #[serde(deserialize_with = "null_default")]
    pub unsubscribes_within_1_day: u64,
    #[serde(deserialize_with = "null_default")]
    pub signups: u64,
    #[serde(deserialize_with = "null_default")]
    pub subscribes: u64,
    #[serde(deserialize_with = "null_default")]
    pub shares: u64,
    #[serde(deserialize_with = "null_default")]
    pub estimated_value: f64,
    #[serde(deserialize_with = "null_default")]
    pub click_through_rate: f64,
    #[serde(deserialize_with = "null_default")]
    pub engagement_rate: f64,
}

/// A draft or published post.
///
/// Used both as a response type and as the request body for
/// [`create_draft`](crate::SubstackClient::create_draft) and
/// [`update_draft`](crate::SubstackClient::update_draft). `None` fields and
/// empty lists are left out of the request body so partial updates only
/// touch what is set. The server-maintained counters are never sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_v2: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_id: Option<u64>,
    /// `newsletter`, `podcast`, `thread`, ...
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub post_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_sent_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_subtitle: Option<String>,
    /// Editor document as a JSON-encoded string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_updated_at: Option<String>,
    /// `everyone`, `only_paid`, `founding`, `only_free`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_send_email: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_comment_permissions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_comment_sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_send_free_preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_upload_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_section_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_section_pinned: Option<bool>,
    /// Reaction emoji → count.
    #[serde(skip_serializing_if = "HashMap::is_empty", deserialize_with = "null_default")]
    pub reactions: HashMap<String, u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_default")]
    pub top_exclusions: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_default")]
    pub pins: Vec<Value>,
    #[serde(
        rename = "draftBylines",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_default"
    )]
    pub draft_bylines: Vec<User>,
    #[serde(
        rename = "publishedBylines",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_default"
    )]
    pub published_bylines: Vec<User>,
    #[serde(skip_serializing, deserialize_with = "null_default")]
    pub reaction_count: u64,
    #[serde(skip_serializing, deserialize_with = "null_default")]
    pub comment_count: u64,
    #[serde(skip_serializing, deserialize_with = "null_default")]
    pub child_comment_count: u64,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_default")]
    pub bylines: Vec<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<PostStats>,
}

impl Post {
    /// A new draft with only `draft_title` set.
    pub fn draft(title: impl Into<String>) -> Self {
        Self {
            draft_title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// One page of posts.
///
/// `offset`, `limit`, and `total` describe the window the server answered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Posts {
    #[serde(deserialize_with = "null_default")]
    pub posts: Vec<Post>,
    #[serde(deserialize_with = "null_default")]
    pub offset: u64,
    #[serde(deserialize_with = "null_default")]
    pub limit: u64,
    #[serde(deserialize_with = "null_default")]
    pub total: u64,
}

/// A publication topic category.
///
/// Returned by [`fetch_categories`](crate::fetch_categories).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub canonical_name: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub active: bool,
    #[serde(deserialize_with = "null_default")]
    pub rank: i64,
    /// `None` for top-level categories.
    pub parent_tag_id: Option<u64>,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    pub emoji: Option<String>,
    pub leaderboard_description: Option<String>,
}

/// A subscriber's membership in a publication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub user_id: u64,
    #[serde(deserialize_with = "null_default")]
    pub publication_id: u64,
    pub expiry: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub email_disabled: bool,
    #[serde(deserialize_with = "null_default")]
    pub digest_enabled: bool,
    /// `subscribed`, `free_signup`, `paid`, ...
    pub membership_state: Option<String>,
    #[serde(rename = "type")]
    pub subscription_type: Option<String>,
    pub gift_user_id: Option<u64>,
    pub created_at: Option<String>,
    pub gifted_at: Option<String>,
    pub paused: Option<Value>,
    #[serde(deserialize_with = "null_default")]
    pub is_group_parent: bool,
    pub visibility: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub is_founding: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_favorite: bool,
    pub podcast_rss_token: Option<String>,
    pub email_settings: Option<Value>,
    pub section_podcasts_enabled: Option<Value>,
}

/// Wrapper returned by the subscriptions endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionsList {
    #[serde(deserialize_with = "null_default")]
    pub subscriptions: Vec<Subscription>,
}

/// Body of the publish call: `{"send":..,"share_automatically":..}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct PublishRequest {
    pub send: bool,
    pub share_automatically: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_decodes_bylines_and_stats() {
        let post: Post = serde_json::from_str(
            r#"{
                "id": 7,
                "type": "newsletter",
                "title": "Hello",
                "section_id": null,
                "reactions": { "❤": 3 },
                "draftBylines": [{ "id": 1, "name": "Ann", "handle": "ann" }],
                "publishedBylines": [],
                "stats": { "views": 10, "open_rate": 0.5, "shares": 2 }
            }"#,
        )
        .unwrap();
        assert_eq!(post.id, Some(7));
        assert_eq!(post.post_type.as_deref(), Some("newsletter"));
        assert_eq!(post.reactions["❤"], 3);
        assert_eq!(post.draft_bylines[0].handle.as_deref(), Some("ann"));
        let stats = post.stats.unwrap();
        assert_eq!(stats.views, 10);
        assert!((stats.open_rate - 0.5).abs() < f64::EPSILON);
        assert_eq!(stats.clicks, 0);
    }

    #[test]
    fn draft_serializes_only_set_fields() {
        let mut post = Post::draft("Title");
        post.draft_body = Some("{}".into());
        let body = serde_json::to_value(&post).unwrap();
        assert_eq!(body["draft_title"], "Title");
        assert_eq!(body["draft_body"], "{}");
        assert!(body.get("id").is_none());
        assert!(body.get("draftBylines").is_none());
        assert!(body.get("stats").is_none());
    }

    #[test]
    fn draft_body_has_no_unset_flags() {
        let body = serde_json::to_value(Post::draft("Renamed")).unwrap();
        assert_eq!(body, serde_json::json!({ "draft_title": "Renamed" }));
    }

    #[test]
    fn counters_are_never_sent() {
        let post = Post {
            reaction_count: 3,
            comment_count: 2,
            child_comment_count: 1,
            is_section_pinned: Some(true),
            ..Post::default()
        };
        let body = serde_json::to_value(&post).unwrap();
        assert_eq!(body, serde_json::json!({ "is_section_pinned": true }));
    }

    #[test]
    fn null_scalars_decode_to_defaults() {
        let page: Posts = serde_json::from_str(
            r#"{
                "posts": [{
                    "id": 1,
                    "is_published": null,
                    "reaction_count": null,
                    "reactions": null,
                    "draftBylines": null,
                    "stats": { "views": null, "open_rate": null, "shares": 4 }
                }],
                "offset": 0, "limit": 25, "total": null
            }"#,
        )
        .unwrap();
        assert_eq!(page.total, 0);
        let post = &page.posts[0];
        assert_eq!(post.is_published, None);
        assert_eq!(post.reaction_count, 0);
        assert!(post.reactions.is_empty());
        assert!(post.draft_bylines.is_empty());
        let stats = post.stats.as_ref().unwrap();
        assert_eq!(stats.views, 0);
        assert_eq!(stats.shares, 4);

        let users: Vec<User> = serde_json::from_str(r#"[{ "id": 1, "name": null }]"#).unwrap();
        assert_eq!(users[0].id, 1);
        assert!(users[0].name.is_empty());

        let cats: Vec<Category> =
            serde_json::from_str(r#"[{ "id": 2, "active": null, "rank": null, "slug": null }]"#)
                .unwrap();
        assert!(!cats[0].active);
        assert_eq!(cats[0].rank, 0);
    }

    #[test]
    fn publication_tolerates_nulls() {
        let publication: Publication = serde_json::from_str(
            r#"{ "name": "Pub", "subdomain": null, "custom_domain": null, "extra": 1 }"#,
        )
        .unwrap();
        assert_eq!(publication.name, "Pub");
        assert!(publication.subdomain.is_empty());
        assert!(publication.custom_domain.is_none());
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(serde_json::from_str::<Posts>(r#"{ "posts": "nope" }"#).is_err());
        assert!(serde_json::from_str::<Vec<Category>>(r#"{ "id": 1 }"#).is_err());
    }

    #[test]
    fn publish_request_field_order() {
        let body = serde_json::to_string(&PublishRequest {
            send: true,
            share_automatically: false,
        })
        .unwrap();
        assert_eq!(body, r#"{"send":true,"share_automatically":false}"#);
    }
}
