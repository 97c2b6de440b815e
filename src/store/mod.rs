use crate::domain::Post;
use anyhow::Result;
use async_trait::async_trait;

pub mod http;

// the external CMS is the sole source of truth for posts; this seam keeps the
// rest of the system unaware of its wire format and lets tests swap in an
// in-memory store
#[async_trait]
pub trait ContentStore: Send + Sync {
    // enumerate every known post slug, used to pre-render pages at startup
    async fn list_post_slugs(&self) -> Result<Vec<String>>;

    // fetch a single post; Ok(None) when the store has no such document
    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>>;
}
