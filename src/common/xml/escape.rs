use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use slideforge::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Escape text destined for an `<a:t>` run.
///
/// Control characters that XML 1.0 cannot carry are dropped; tabs survive.
/// Everything else, including non-BMP characters, passes through unchanged.
///
/// ```
/// use slideforge::common::xml::escape_text;
/// assert_eq!(escape_text("Dämpfung\u{0007} & 🌍"), "Dämpfung &amp; 🌍");
/// ```
pub fn escape_text(s: &str) -> String {
    if s.chars().any(is_forbidden_char) {
        let cleaned: String = s.chars().filter(|c| !is_forbidden_char(*c)).collect();
        escape_xml(&cleaned)
    } else {
        escape_xml(s)
    }
}

#[inline]
fn is_forbidden_char(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}
