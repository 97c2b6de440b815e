pub mod content;
pub mod page_cache;

pub use self::content::{ContentService, PageView};
pub use self::page_cache::{CachedPage, PageCache};
