use unicode_normalization::UnicodeNormalization;

/// Fold the ideographic space and trim. Used for every user-facing field.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.replace('\u{3000}', " ").trim().to_string()
}

/// NFKC-fold, lowercase and drop punctuation so titles can be compared by
/// substring containment. Never shown to users.
pub fn normalize_for_comparison(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !is_ignored_for_comparison(*c))
        .collect()
}

fn is_ignored_for_comparison(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '!' | '！'
                | '?'
                | '？'
                | '、'
                | '。'
                | '.'
                | ','
                | '・'
                | '･'
                | '~'
                | '～'
                | '-'
                | '−'
                | '‐'
                | '–'
                | '—'
                | '_'
                | '＿'
                | '「'
                | '」'
                | '『'
                | '』'
                | '('
                | ')'
                | '（'
                | '）'
                | '【'
                | '】'
                | '['
                | ']'
                | '/'
                | '／'
        )
}
