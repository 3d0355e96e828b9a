// ABOUTME: Content sanitizer that turns scorecard cell markup into display text.
// ABOUTME: Strips wrapper and link tags, collapses whitespace, and decodes HTML entities.

use once_cell::sync::Lazy;
use regex::Regex;

static DECORATIVE_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?(?:span|strong|em|b|i)(?:\s[^>]*)?/?>").unwrap());
static LINK_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?a(?:\s[^>]*)?>").unwrap());
static ANY_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strips presentational markup from a fragment, returning clean display text.
///
/// Wrapper tags (`span`, `strong`, `em`, ...) and hyperlinks are unwrapped so
/// their inner text survives, every other tag is dropped, whitespace runs are
/// collapsed to one space and the result is trimmed.
///
/// The output never contains a `<...>` sequence, so sanitizing twice is the
/// same as sanitizing once. Entities are left alone; see [`decode_entities`].
pub fn sanitize(fragment: &str) -> String {
    if fragment.is_empty() {
        return String::new();
    }

    let unwrapped = DECORATIVE_TAG_RE.replace_all(fragment, "");
    let unlinked = LINK_TAG_RE.replace_all(&unwrapped, "");
    let stripped = ANY_TAG_RE.replace_all(&unlinked, "");

    collapse_whitespace(&stripped)
}

/// Collapses whitespace runs to a single space and trims both ends.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RE.replace_all(s.trim(), " ").trim().to_string()
}

/// Decodes the HTML entities that show up in scorecard cells.
///
/// Single pass, so `&amp;lt;` decodes to `&lt;` and not `<`.
/// Unknown or malformed entities are kept verbatim.
pub fn decode_entities(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        result.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        // Entities are short; anything longer is a bare ampersand.
        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&tail[1..semi]).map(|ch| (ch, semi)));

        match decoded {
            Some((ch, semi)) => {
                result.push(ch);
                rest = &tail[semi + 1..];
            }
            None => {
                result.push('&');
                rest = &tail[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// Decodes the body of one entity (the part between `&` and `;`).
fn decode_entity(body: &str) -> Option<char> {
    let named = match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => None,
    };
    if named.is_some() {
        return named;
    }

    let num = body.strip_prefix('#')?;
    let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => num.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}
