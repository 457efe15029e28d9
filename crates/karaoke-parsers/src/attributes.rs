use crate::keywords::{is_trusted_channel, NO_GUIDE_KEYWORDS, OFF_VOCAL_KEYWORDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub is_no_guide: bool,
    pub has_vocal: bool,
}

/// Infer guide/vocal flags from the title and publishing channel alone.
pub fn determine_attributes(title: &str, channel: &str) -> Attributes {
    let title_lower = title.to_lowercase();
    let is_no_guide = NO_GUIDE_KEYWORDS.iter().any(|k| title_lower.contains(k));

    let has_vocal = !(is_trusted_channel(channel)
        || OFF_VOCAL_KEYWORDS.iter().any(|k| title_lower.contains(k)));

    Attributes {
        is_no_guide,
        has_vocal,
    }
}
