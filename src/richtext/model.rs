use serde::{Deserialize, Serialize};

// one block of the CMS rich text wire format: a typed run of text plus
// formatting spans addressed by character offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub spans: Vec<Span>,
}

impl RichTextBlock {
    pub fn paragraph(text: &str) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: text.to_string(),
            spans: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Paragraph,
    Preformatted,
    ListItem,
    OListItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Span {
    Strong { start: usize, end: usize },
    Em { start: usize, end: usize },
    Hyperlink { start: usize, end: usize, data: LinkData },
}

impl Span {
    pub fn bounds(&self) -> (usize, usize) {
        match self {
            Span::Strong { start, end }
            | Span::Em { start, end }
            | Span::Hyperlink { start, end, .. } => (*start, *end),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkData {
    pub url: String,
}
