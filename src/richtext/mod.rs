pub mod model;
pub mod render;

pub use self::model::{BlockKind, LinkData, RichTextBlock, Span};
pub use self::render::{as_html, as_text};
