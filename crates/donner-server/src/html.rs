//! Markup stripping for Caltrans pages.

use std::sync::OnceLock;

use regex::Regex;

struct MarkupPatterns {
    script: Regex,
    style: Regex,
    tag: Regex,
    whitespace: Regex,
}

fn patterns() -> &'static MarkupPatterns {
    static PATTERNS: OnceLock<MarkupPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| MarkupPatterns {
        script: Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid script regex"),
        style: Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("valid style regex"),
        tag: Regex::new(r"<[^>]+>").expect("valid tag regex"),
        whitespace: Regex::new(r"\s+").expect("valid whitespace regex"),
    })
}

/// Entities decoded after tag removal, in this order.
const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Reduce an HTML page to single-spaced plain text.
///
/// Script and style blocks go first so their contents never reach the
/// engine; entities are decoded after tags so `&lt;b&gt;` stays text.
pub fn strip_html(html: &str) -> String {
    let p = patterns();
    let text = p.script.replace_all(html, " ");
    let text = p.style.replace_all(&text, " ");
    let mut text = p.tag.replace_all(&text, " ").into_owned();
    for (entity, replacement) in ENTITIES {
        if text.contains(entity) {
            text = text.replace(entity, replacement);
        }
    }
    p.whitespace.replace_all(&text, " ").trim().to_string()
}
