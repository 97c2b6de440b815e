use crate::richtext::model::{BlockKind, RichTextBlock, Span};
use maud::Escaper;
use std::cmp::Reverse;
use std::fmt::Write as _;

// flattens the blocks into plain text, one line per block
// this is the shape the reading-time estimator consumes
pub fn as_text(blocks: &[RichTextBlock]) -> String {
    blocks
        .iter()
        .map(|block| block.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

// converts the blocks to an HTML fragment: paragraphs, preformatted runs,
// and consecutive list items grouped into a single <ul>/<ol>
pub fn as_html(blocks: &[RichTextBlock]) -> String {
    let mut out = String::new();
    let mut open_list: Option<BlockKind> = None;

    for block in blocks {
        let list_kind = match block.kind {
            BlockKind::ListItem | BlockKind::OListItem => Some(block.kind),
            _ => None,
        };

        // close/open list wrappers whenever the run of list items changes
        if open_list != list_kind {
            if let Some(kind) = open_list.take() {
                out.push_str(list_close(kind));
            }
            if let Some(kind) = list_kind {
                out.push_str(list_open(kind));
                open_list = Some(kind);
            }
        }

        let inner = spans_to_html(&block.text, &block.spans);
        match block.kind {
            BlockKind::Paragraph => {
                out.push_str("<p>");
                out.push_str(&inner);
                out.push_str("</p>");
            }
            BlockKind::Preformatted => {
                out.push_str("<pre>");
                out.push_str(&inner);
                out.push_str("</pre>");
            }
            BlockKind::ListItem | BlockKind::OListItem => {
                out.push_str("<li>");
                out.push_str(&inner);
                out.push_str("</li>");
            }
        }
    }

    if let Some(kind) = open_list {
        out.push_str(list_close(kind));
    }

    out
}

fn list_open(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::OListItem => "<ol>",
        _ => "<ul>",
    }
}

fn list_close(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::OListItem => "</ol>",
        _ => "</ul>",
    }
}

// applies formatting spans to a block's text by character offset,
// escaping everything that isn't one of our own tags
// spans are assumed well-nested; out-of-range offsets clamp to the text length
fn spans_to_html(text: &str, spans: &[Span]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    // a span whose clamped range is empty wraps nothing; dropping it up front
    // keeps the sweep from opening a tag it would never close
    let mut ordered: Vec<&Span> = spans
        .iter()
        .filter(|span| {
            let (start, end) = span.bounds();
            start.min(len) < end.min(len)
        })
        .collect();
    ordered.sort_by_key(|span| {
        let (start, end) = span.bounds();
        // outermost span first when several open at the same offset
        (start.min(len), Reverse(end.min(len)))
    });

    let mut out = String::new();
    let mut stack: Vec<&Span> = Vec::new();
    let mut upcoming = ordered.into_iter().peekable();
    let mut buf = [0u8; 4];

    for i in 0..=len {
        while stack
            .last()
            .map_or(false, |span| span.bounds().1.min(len) <= i)
        {
            let span = stack.pop().unwrap();
            out.push_str(close_tag(span));
        }

        while upcoming
            .peek()
            .map_or(false, |span| span.bounds().0.min(len) <= i)
        {
            let span = upcoming.next().unwrap();
            push_open_tag(&mut out, span);
            stack.push(span);
        }

        if let Some(ch) = chars.get(i) {
            escape_into(&mut out, ch.encode_utf8(&mut buf));
        }
    }

    out
}

fn push_open_tag(out: &mut String, span: &Span) {
    match span {
        Span::Strong { .. } => out.push_str("<strong>"),
        Span::Em { .. } => out.push_str("<em>"),
        Span::Hyperlink { data, .. } => {
            out.push_str("<a href=\"");
            escape_into(out, &data.url);
            out.push_str("\">");
        }
    }
}

fn close_tag(span: &Span) -> &'static str {
    match span {
        Span::Strong { .. } => "</strong>",
        Span::Em { .. } => "</em>",
        Span::Hyperlink { .. } => "</a>",
    }
}

fn escape_into(out: &mut String, raw: &str) {
    let _ = Escaper::new(out).write_str(raw);
}
