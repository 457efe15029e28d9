//! Static lookup tables shared by the classifier, the parser and the search
//! pipeline.

/// Publishers whose uploads are treated as vocal-free regardless of title.
pub const TRUSTED_KARAOKE_CHANNELS: &[&str] = &[
    "カラオケ歌っちゃ王",
    "歌っちゃ王",
    "JOYSOUND CHANNEL",
    "JOYSOUND",
    "カラオケDAM公式チャンネル",
    "Karaoke",
    "J-POP Karaoke",
    "GARAOKE",
    "TJ KARAOKE",
    "カラオケまねきねこ",
    "Victor Entertainment",
    "Sony Music",
    "UNIVERSAL MUSIC",
    "ニコカラチャンネル",
    "On-boc",
    "EdKara",
];

/// Lowercase title markers meaning the track carries no vocal.
pub const OFF_VOCAL_KEYWORDS: &[&str] = &[
    "instrumental",
    "off vocal",
    "backing track",
    "karaoke",
    "インスト",
    "オフボーカル",
    "カラオケ",
    "ガイド",
];

/// Lowercase title markers meaning the guide melody is absent.
pub const NO_GUIDE_KEYWORDS: &[&str] = &[
    "ガイドなし",
    "ガイド無し",
    "no guide",
    "ガイドメロディなし",
    "ガイドメロディ無し",
];

/// Lowercase title markers for results that are not karaoke tracks at all.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "歌ってみ",
    "×(修正版あり)",
    "bgm",
    "orgel",
    "オルゴール",
    "medley",
    "メドレー",
    "reaction",
    "リアクション",
    "切り抜き",
];

/// Appended to every user query before it is sent upstream.
pub const QUERY_QUALIFIER: &str = "カラオケ";

pub fn is_trusted_channel(channel: &str) -> bool {
    TRUSTED_KARAOKE_CHANNELS
        .iter()
        .any(|trusted| channel.contains(trusted))
}

pub fn has_negative_keyword(raw_title: &str) -> bool {
    let lower = raw_title.to_lowercase();
    NEGATIVE_KEYWORDS.iter().any(|k| lower.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trusted_channel_is_substring_and_case_sensitive() {
        assert!(is_trusted_channel("カラオケ歌っちゃ王"));
        assert!(is_trusted_channel("EdKara Karaoke Channel"));
        assert!(!is_trusted_channel("joysound channel"));
        assert!(!is_trusted_channel("YouTube Music"));
    }

    #[test]
    fn negative_keywords_match_lowercased_title() {
        assert!(has_negative_keyword("【歌ってみた】夜に駆ける"));
        assert!(has_negative_keyword("Lemon (Orgel ver.)"));
        assert!(has_negative_keyword("初見リアクション"));
        assert!(has_negative_keyword("配信の切り抜き"));
        assert!(has_negative_keyword("アニソン MEDLEY"));
        assert!(!has_negative_keyword("Lemon / 米津玄師 [カラオケ]"));
    }
}
