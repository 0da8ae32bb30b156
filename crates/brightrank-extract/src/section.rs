//! Section scanning over `## Heading` delimited text.

pub const OVERALL_SCORE: &str = "Overall Score";
pub const VISIBILITY_CHANGE: &str = "Visibility Change";
pub const TOTAL_MENTIONS: &str = "Total Mentions";
pub const SENTIMENT_BREAKDOWN: &str = "Sentiment Breakdown";
pub const MENTIONS: &str = "Mentions";
pub const SENTIMENT_TREND: &str = "Sentiment Trend";
pub const PLATFORM_BREAKDOWN: &str = "Platform Breakdown";

/// Every heading the extractor reads, in the order the template lists them.
pub const HEADINGS: [&str; 7] = [
    OVERALL_SCORE,
    VISIBILITY_CHANGE,
    TOTAL_MENTIONS,
    SENTIMENT_BREAKDOWN,
    MENTIONS,
    SENTIMENT_TREND,
    PLATFORM_BREAKDOWN,
];

const HEADING_PREFIX: &str = "## ";

/// Return the body of the first section titled `heading`.
///
/// The body runs from the line after `## <heading>` up to, but not
/// including, the next line starting with `## `, or to the end of `raw`.
/// The heading comparison ignores ASCII case and surrounding whitespace.
/// Returns `None` when no such heading exists.
#[must_use]
pub fn section<'a>(raw: &'a str, heading: &str) -> Option<&'a str> {
    let mut offset = 0;
    let mut body_start = None;

    for line in raw.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let text = line.trim_end_matches(['\n', '\r']);

        match body_start {
            None => {
                if is_heading(text, heading) {
                    body_start = Some(offset);
                }
            }
            Some(start) => {
                if text.starts_with(HEADING_PREFIX) {
                    return Some(&raw[start..line_start]);
                }
            }
        }
    }

    body_start.map(|start| &raw[start..])
}

fn is_heading(line: &str, heading: &str) -> bool {
    line.strip_prefix(HEADING_PREFIX)
        .is_some_and(|title| title.trim().eq_ignore_ascii_case(heading.trim()))
}
