use std::collections::HashMap;
use std::time::Instant;

// exists to serve rendered pages straight from memory rather than hitting the
// content API on every request
pub struct PageCache {
    pub pages_by_slug: HashMap<String, CachedPage>,
    // slugs the store reported absent, so repeat requests 404 without refetching
    pub missing_since: HashMap<String, Instant>,
}

#[derive(Clone)]
pub struct CachedPage {
    pub html: String,
    pub rendered_at: Instant,
}

impl PageCache {
    pub fn new() -> Self {
        Self {
            pages_by_slug: HashMap::new(),
            missing_since: HashMap::new(),
        }
    }
}
