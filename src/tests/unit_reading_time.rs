use crate::domain::ContentSection;
use crate::readtime::estimate_minutes;
use crate::richtext::RichTextBlock;

// builds a section with the given word counts in heading and body
fn section(heading_words: usize, body_words: usize) -> ContentSection {
    ContentSection {
        heading: "palavra ".repeat(heading_words).trim_end().to_string(),
        body: vec![RichTextBlock::paragraph(
            "palavra ".repeat(body_words).trim_end(),
        )],
    }
}

#[test]
fn test_empty_content_is_zero_minutes() {
    assert_eq!(estimate_minutes(&[]), 0);
}

// one section of exactly 200 words reads in exactly one minute
#[test]
fn test_exact_minute_boundary() {
    assert_eq!(estimate_minutes(&[section(1, 199)]), 1);
}

#[test]
fn test_partial_minute_rounds_up() {
    assert_eq!(estimate_minutes(&[section(2, 8)]), 1);
}

// the running total is rounded up after every section, so partial minutes
// never carry over into the next section
#[test]
fn test_ceiling_is_applied_per_section() {
    // each section is 100 words = 0.5 min; the per-section ceiling makes
    // this 2 minutes, not ceil(1.0) = 1
    assert_eq!(estimate_minutes(&[section(1, 99), section(1, 99)]), 2);

    // and a third half-minute section lands on 3
    assert_eq!(
        estimate_minutes(&[section(1, 99), section(1, 99), section(1, 99)]),
        3
    );
}

// body words are counted across all blocks of a section
#[test]
fn test_body_words_span_blocks() {
    let section = ContentSection {
        heading: "Titulo".to_string(),
        body: vec![
            RichTextBlock::paragraph("um dois tres"),
            RichTextBlock::paragraph("quatro cinco"),
        ],
    };

    // 1 + 5 = 6 words, well under a minute, still rounds up to 1
    assert_eq!(estimate_minutes(&[section]), 1);
}

// blank headings and bodies contribute no words at all
#[test]
fn test_whitespace_only_section_is_zero() {
    let section = ContentSection {
        heading: "   ".to_string(),
        body: vec![RichTextBlock::paragraph("  \t ")],
    };

    assert_eq!(estimate_minutes(&[section]), 0);
}

#[test]
fn test_long_post_accumulates() {
    // 4 sections of 450 words each: 2.25 -> 3, 5.25 -> 6, 8.25 -> 9, 11.25 -> 12
    let sections: Vec<ContentSection> = (0..4).map(|_| section(10, 440)).collect();
    assert_eq!(estimate_minutes(&sections), 12);
}
