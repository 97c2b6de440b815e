pub mod post;

pub use self::post::{ContentSection, Post};
