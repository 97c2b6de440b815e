use crate::richtext::RichTextBlock;
use chrono::{DateTime, FixedOffset};
use derive_more::derive::Display;

#[derive(Debug, Clone, PartialEq, Display)]
#[display("{}", slug)]
pub struct Post {
    pub slug: String,
    pub first_publication_date: Option<DateTime<FixedOffset>>,
    pub title: String,
    pub banner_url: String,
    pub author: String,
    // ordering mirrors the document's reading order as returned by the store
    pub content: Vec<ContentSection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentSection {
    pub heading: String,
    pub body: Vec<RichTextBlock>,
}
