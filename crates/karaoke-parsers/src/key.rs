//! Pitch-transposition ("key") tags embedded in karaoke titles.

use std::sync::LazyLock;

use regex::Regex;

// "Key: +2", "キー－3", "KEY 4"
static KEY_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Key|キー)\s*[:：]?\s*([+＋\-−–—ー－]?[0-9０-９]+)").unwrap()
});

// "+2Key", "ー3 キー"
static KEY_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([+＋\-−–—ー－]?[0-9０-９]+)\s*(?:Key|キー)").unwrap()
});

// Catalog titles already carry the canonical form ("+3KEY").
static CANONICAL_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([+-]?\d+KEY)").unwrap());

static EMPTY_BRACKETS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[\(【［（]\s*[\]\)】］）]").unwrap());

/// Find a key tag in either prefix or suffix form, remove every occurrence of
/// that form from the title and return the tag as `<sign><digits>KEY`.
pub fn extract_key_tag(title: &str) -> (String, Option<String>) {
    let (re, raw) = if let Some(caps) = KEY_PREFIX_RE.captures(title) {
        (&*KEY_PREFIX_RE, caps[1].to_string())
    } else if let Some(caps) = KEY_SUFFIX_RE.captures(title) {
        (&*KEY_SUFFIX_RE, caps[1].to_string())
    } else {
        return (title.to_string(), None);
    };

    let stripped = re.replace_all(title, "");
    let stripped = EMPTY_BRACKETS_RE.replace_all(&stripped, "").into_owned();
    (stripped, Some(format_key(&raw)))
}

/// Same as [`extract_key_tag`] for titles that already use `+3KEY` spelling.
pub fn extract_canonical_key_tag(title: &str) -> (String, Option<String>) {
    let Some(caps) = CANONICAL_KEY_RE.captures(title) else {
        return (title.to_string(), None);
    };
    let key = caps[1].to_string();
    let stripped = CANONICAL_KEY_RE.replace_all(title, "").into_owned();
    (stripped, Some(key))
}

pub fn format_key(raw: &str) -> String {
    let mut key: String = raw.trim().chars().map(fold_key_char).collect();
    key.push_str("KEY");
    key
}

fn fold_key_char(c: char) -> char {
    match c {
        '＋' => '+',
        '−' | '–' | '—' | 'ー' | '－' => '-',
        '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c),
        _ => c,
    }
}
