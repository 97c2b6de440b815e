use crate::config::BitacoraConfig;
use crate::domain::Post;
use crate::readtime;
use crate::render;
use crate::services::content::page_cache::{CachedPage, PageCache};
use crate::store::ContentStore;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

// what a request for a slug resolves to right now
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    // a rendered page, possibly stale and refreshing in the background
    Ready(String),
    // the slug is unknown and a fetch is in flight; show the loading state
    Pending,
    // the store has no such document
    NotFound,
}

pub struct ContentService {
    store: Box<dyn ContentStore>,
    config: Arc<BitacoraConfig>,
    // our in-memory cache of rendered pages, indexed by slug
    cache: RwLock<PageCache>,
    // slugs with a refresh task in flight, so concurrent requests don't stampede
    pending: Mutex<HashSet<String>>,
}

impl ContentService {
    pub fn new(store: Box<dyn ContentStore>, config: Arc<BitacoraConfig>) -> Self {
        Self {
            store,
            config,
            cache: RwLock::new(PageCache::new()),
            pending: Mutex::new(HashSet::new()),
        }
    }

    /// Pre-renders every post the store knows about, so the slugs enumerated
    /// at startup are served from cache from the first request on.
    pub async fn warm(&self) -> Result<()> {
        let slugs = self
            .store
            .list_post_slugs()
            .await
            .context("Failed to list post slugs for cache warm-up")?;

        for slug in &slugs {
            if let Err(e) = self.fetch_and_cache(slug).await {
                eprintln!("ContentService: failed to warm '{}': {}", slug, e);
            }
        }

        println!("ContentService: cache warmed with {} posts.", slugs.len());

        Ok(())
    }

    /// Resolves a slug to whatever can be served right now.
    ///
    /// Cache hits are always served immediately; a hit older than the
    /// revalidation window additionally kicks off a background re-render.
    /// Unknown slugs answer `Pending` while a background fetch populates the
    /// cache, and slugs the store reported absent answer `NotFound` until the
    /// revalidation window lets them be retried.
    pub async fn get_page(self: &Arc<Self>, slug: &str) -> PageView {
        let revalidate = self.revalidate_window();

        let cached = {
            let cache = self.cache.read().await;
            cache
                .pages_by_slug
                .get(slug)
                .map(|page| (page.html.clone(), page.rendered_at.elapsed() >= revalidate))
        };

        if let Some((html, stale)) = cached {
            if stale {
                self.spawn_refresh(slug);
            }
            return PageView::Ready(html);
        }

        let recently_missing = {
            let cache = self.cache.read().await;
            cache
                .missing_since
                .get(slug)
                .map_or(false, |since| since.elapsed() < revalidate)
        };

        if recently_missing {
            return PageView::NotFound;
        }

        self.spawn_refresh(slug);

        PageView::Pending
    }

    /// Fetches one post from the store, renders it, and records the outcome
    /// in the cache. Used by both the warm-up pass and background refreshes.
    pub async fn fetch_and_cache(&self, slug: &str) -> Result<PageView> {
        match self
            .store
            .get_post_by_slug(slug)
            .await
            .with_context(|| format!("Failed to fetch post '{}'", slug))?
        {
            Some(post) => {
                let html = render_post(&post);

                let mut cache = self.cache.write().await;
                cache.missing_since.remove(slug);
                cache.pages_by_slug.insert(
                    slug.to_string(),
                    CachedPage {
                        html: html.clone(),
                        rendered_at: Instant::now(),
                    },
                );

                println!("ContentService: rendered and cached '{}'.", post);

                Ok(PageView::Ready(html))
            }
            None => {
                let mut cache = self.cache.write().await;
                cache.pages_by_slug.remove(slug);
                cache
                    .missing_since
                    .insert(slug.to_string(), Instant::now());

                Ok(PageView::NotFound)
            }
        }
    }

    // fire-and-forget refresh of one slug, de-duplicated by the pending set
    fn spawn_refresh(self: &Arc<Self>, slug: &str) {
        {
            let mut pending = self.pending.lock().unwrap();
            if !pending.insert(slug.to_string()) {
                return;
            }
        }

        let service = Arc::clone(self);
        let slug = slug.to_string();

        tokio::spawn(async move {
            if let Err(e) = service.fetch_and_cache(&slug).await {
                eprintln!("ContentService: background refresh of '{}' failed: {}", slug, e);
            }

            service.pending.lock().unwrap().remove(&slug);
        });
    }

    fn revalidate_window(&self) -> Duration {
        Duration::from_secs(self.config.revalidate_secs)
    }
}

fn render_post(post: &Post) -> String {
    let read_minutes = readtime::estimate_minutes(&post.content);
    render::post_page(post, read_minutes).into_string()
}
