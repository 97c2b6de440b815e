use crate::domain::ContentSection;
use crate::richtext;

const WORDS_PER_MINUTE: f64 = 200.0;

/// Estimates the reading time of a post in whole minutes.
///
/// Each section contributes its heading's and body's word counts at 200
/// words per minute; the running total is rounded up after every section,
/// so partial minutes never carry across section boundaries.
pub fn estimate_minutes(sections: &[ContentSection]) -> u32 {
    let mut acc = 0.0_f64;

    for section in sections {
        acc += word_count(&section.heading) as f64 / WORDS_PER_MINUTE;
        acc += word_count(&richtext::as_text(&section.body)) as f64 / WORDS_PER_MINUTE;
        acc = acc.ceil();
    }

    acc as u32
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
