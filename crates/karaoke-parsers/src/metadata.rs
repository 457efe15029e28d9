//! Recovers a clean (title, artist, key) triple from upstream result titles.
//!
//! Karaoke uploads follow per-publisher title conventions. Each convention is
//! a [`TitleGrammar`]; the grammars are tried in [`GRAMMARS`] order and the
//! first one whose predicate holds does the extraction. Several predicates
//! overlap (a NicoKara upload is also a video), so the order is significant.

use std::sync::LazyLock;

use models::ResultType;
use regex::Regex;

use crate::key::{extract_canonical_key_tag, extract_key_tag};
use crate::normalize::clean_text;

const JOYSOUND_CHANNEL: &str = "JOYSOUND CHANNEL";
const CHORUS_PRACTICE_TAG: &str = "【合唱練習用】";
const CHORUS_PRACTICE_ARTIST: &str = "合唱練習用";

static GUIDE_KARAOKE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[\(]ガイド.*?(?:無し|なし)カラオケ[\]\)]").unwrap());

static LENTICULAR_SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"【.*?】").unwrap());

static NICO_SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"【(?:ニコカラ|カラオケ).*?】").unwrap());

static NICO_NOISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)[【\[\(]?(?:off\s*vocal|オフボーカル|karaoke|カラオケ|instrumental|インスト|guide|ガイド).*?[】\]\)]?",
    )
    .unwrap()
});

static NICO_ARTIST_BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*?)\s*《(.*?)》").unwrap());

const NICO_BRACKET_NOISE: &[&str] = &[
    "off vocal",
    "offvocal",
    "key",
    "キー",
    "guide",
    "ガイド",
    "karaoke",
    "カラオケ",
];

static CORNER_QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"「(.*?)」").unwrap());

static ORIGINAL_ARTIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\[\(【［（](?:原曲歌手|オリジナルアーティスト|オリジナル歌手)[:：](.*?)[\]\)】］）]")
        .unwrap()
});

static EDKARA_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:練習用)?(?:Karaoke|カラオケ)[♬♪]*\s*").unwrap());

static EDKARA_PERFORMED_BY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[\(\[【](?:Originally Performed by|Original Artist)[:\s]+(.*?)[\]\)】]")
        .unwrap()
});

static ANY_BRACKETED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[\(【].*?[\]\)】]").unwrap());

static EDKARA_ARTIST_CUTOFF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:【|\[|\(|Instrumental|Off Vocal)").unwrap());

static KARAOKE_MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Karaoke[♬♪]*").unwrap());

static MANEKINEKO_PERFORMED_BY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[Originally Performed By (.*?)\]").unwrap());

static TRAILING_BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMetadata {
    pub title: String,
    pub artist: String,
    pub key: Option<String>,
}

/// Inputs every grammar sees.
#[derive(Debug, Clone, Copy)]
struct TitleSource<'a> {
    original_title: &'a str,
    artist_hint: &'a str,
    channel: &'a str,
    result_type: ResultType,
}

impl TitleSource<'_> {
    fn is_video(&self) -> bool {
        self.result_type == ResultType::Video
    }

    fn is_song(&self) -> bool {
        self.result_type == ResultType::Song
    }
}

/// Raw extraction output before the user-facing cleanup.
struct Extracted {
    title: String,
    artist: String,
    key: Option<String>,
}

impl Extracted {
    fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            key: None,
        }
    }

    fn with_key(mut self, key: Option<String>) -> Self {
        self.key = key;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TitleGrammar {
    NicoKara,
    JoysoundChorus,
    Joysound,
    UtacchaohVideo,
    EdKara,
    GenericVideo,
    ManekinekoSong,
    UtacchaohSong,
    KaraokeCatalogSong,
    Passthrough,
}

const GRAMMARS: &[TitleGrammar] = &[
    TitleGrammar::NicoKara,
    TitleGrammar::JoysoundChorus,
    TitleGrammar::Joysound,
    TitleGrammar::UtacchaohVideo,
    TitleGrammar::EdKara,
    TitleGrammar::GenericVideo,
    TitleGrammar::ManekinekoSong,
    TitleGrammar::UtacchaohSong,
    TitleGrammar::KaraokeCatalogSong,
    TitleGrammar::Passthrough,
];

impl TitleGrammar {
    fn matches(self, src: &TitleSource<'_>) -> bool {
        match self {
            Self::NicoKara => {
                src.original_title.contains("ニコカラ") || src.channel.contains("ニコカラ")
            }
            Self::JoysoundChorus => {
                src.is_video()
                    && src.channel == JOYSOUND_CHANNEL
                    && src.original_title.contains(CHORUS_PRACTICE_TAG)
            }
            Self::Joysound => src.is_video() && src.channel == JOYSOUND_CHANNEL,
            Self::UtacchaohVideo => src.is_video() && src.channel.contains("歌っちゃ王"),
            Self::EdKara => src.is_video() && src.channel.contains("EdKara"),
            Self::GenericVideo => src.is_video(),
            Self::ManekinekoSong => {
                src.is_song()
                    && (src.artist_hint.contains("まねきねこ")
                        || src.artist_hint.contains("Manekineko"))
            }
            Self::UtacchaohSong => src.is_song() && src.artist_hint.contains("歌っちゃ王"),
            Self::KaraokeCatalogSong => {
                src.is_song()
                    && (src.artist_hint.contains("カラオケ") || src.artist_hint.contains("Karaoke"))
            }
            Self::Passthrough => true,
        }
    }

    fn extract(self, src: &TitleSource<'_>) -> Extracted {
        match self {
            Self::NicoKara => parse_nicokara(src.original_title),
            Self::JoysoundChorus => parse_joysound_chorus(src.original_title),
            Self::Joysound => parse_joysound(src.original_title),
            Self::UtacchaohVideo => parse_utacchaoh_video(src.original_title),
            Self::EdKara => parse_edkara(src.original_title),
            Self::GenericVideo => parse_generic_video(src.original_title, src.channel),
            Self::ManekinekoSong => parse_manekineko_song(src.original_title, src.artist_hint),
            Self::UtacchaohSong => parse_utacchaoh_song(src.original_title, src.artist_hint),
            Self::KaraokeCatalogSong => {
                parse_karaoke_catalog_song(src.original_title, src.artist_hint)
            }
            Self::Passthrough => Extracted::new(src.original_title, src.artist_hint),
        }
    }
}

/// Parse an upstream title into display metadata. Never fails: titles no
/// grammar understands come back unchanged with the upstream artist.
pub fn parse_metadata(
    original_title: &str,
    artist_hint: &str,
    channel: &str,
    result_type: ResultType,
) -> ParsedMetadata {
    let src = TitleSource {
        original_title,
        artist_hint,
        channel,
        result_type,
    };

    let grammar = GRAMMARS
        .iter()
        .copied()
        .find(|grammar| grammar.matches(&src))
        .unwrap_or(TitleGrammar::Passthrough);

    let extracted = grammar.extract(&src);
    ParsedMetadata {
        title: clean_text(&extracted.title),
        artist: clean_text(&extracted.artist),
        key: extracted.key,
    }
}

fn strip_karaoke_badges(text: &str) -> String {
    let text = text
        .replace("（カラオケ）", "")
        .replace("(Karaoke)", "")
        .replace("(Official)", "");
    GUIDE_KARAOKE_TAG_RE.replace_all(&text, "").into_owned()
}

fn split_first_slash(text: &str) -> Option<(&str, &str)> {
    text.split_once('/')
}

/// Pull a bracketed "original singer" tag out of the title.
fn extract_original_artist(title: &str) -> (String, Option<String>) {
    let Some(caps) = ORIGINAL_ARTIST_RE.captures(title) else {
        return (title.to_string(), None);
    };
    let artist = caps[1].trim().to_string();
    let stripped = ORIGINAL_ARTIST_RE.replace_all(title, "").into_owned();
    (stripped, Some(artist))
}

fn parse_nicokara(original_title: &str) -> Extracted {
    let bracketed = NICO_ARTIST_BRACKET_RE
        .captures(original_title)
        .filter(|caps| {
            let inner = caps[2].to_lowercase();
            !NICO_BRACKET_NOISE.iter().any(|noise| inner.contains(noise))
        })
        .map(|caps| (caps[1].to_string(), caps[2].to_string()));

    let (title, artist) = if let Some(pair) = bracketed {
        pair
    } else if let Some((title, artist)) = original_title.split_once(['/', '／']) {
        (title.to_string(), artist.to_string())
    } else {
        (original_title.to_string(), String::new())
    };

    Extracted::new(nico_clean(&title), nico_clean(&artist))
}

fn nico_clean(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = NICO_SECTION_RE.replace_all(text, "");
    let text = NICO_NOISE_RE.replace_all(&text, "");
    text.replace("ニコカラ", "").trim().to_string()
}

fn parse_joysound_chorus(original_title: &str) -> Extracted {
    let title = match CORNER_QUOTE_RE.captures(original_title) {
        Some(caps) => caps[1].to_string(),
        None => original_title
            .replace(CHORUS_PRACTICE_TAG, "")
            .trim()
            .to_string(),
    };
    Extracted::new(title, CHORUS_PRACTICE_ARTIST)
}

fn parse_joysound(original_title: &str) -> Extracted {
    let temp = original_title
        .replace("【karaoke】", "")
        .replace("【JOYSOUND】", "");
    let temp = temp.trim();

    match split_first_slash(temp) {
        Some((title, artist)) => Extracted::new(
            trailing_parenthesized(title.trim()),
            trailing_parenthesized(artist.trim()),
        ),
        None => Extracted::new(temp, ""),
    }
}

/// "Yoru ni Kakeru(夜に駆ける)" -> "夜に駆ける"
fn trailing_parenthesized(text: &str) -> &str {
    if !text.ends_with(')') {
        return text;
    }
    match text.rfind('(') {
        Some(open) => &text[open + 1..text.len() - 1],
        None => text,
    }
}

fn parse_utacchaoh_video(original_title: &str) -> Extracted {
    let temp = LENTICULAR_SECTION_RE.replace_all(original_title, "");
    let temp = strip_karaoke_badges(temp.trim());
    let (temp, key) = extract_key_tag(&temp);

    let (temp, artist) = extract_original_artist(&temp);
    if let Some(artist) = artist {
        return Extracted::new(temp.trim(), artist).with_key(key);
    }

    let split = temp.split_once(" / ").or_else(|| temp.split_once('/'));
    match split {
        Some((title, artist)) => {
            Extracted::new(title.trim(), artist.replace("[カラオケ]", "").trim()).with_key(key)
        }
        None => Extracted::new(temp.trim(), "").with_key(key),
    }
}

fn parse_edkara(original_title: &str) -> Extracted {
    let temp = EDKARA_PREFIX_RE.replace(original_title, "");
    let temp = temp.trim();

    if let Some(caps) = EDKARA_PERFORMED_BY_RE.captures(temp) {
        let artist = caps[1].trim().to_string();
        let start = caps.get(0).map_or(0, |m| m.start());
        let title = ANY_BRACKETED_RE.replace_all(&temp[..start], "");
        return Extracted::new(title.trim(), artist);
    }

    if let Some((title, candidate)) = temp.split_once(" - ") {
        let candidate = candidate.trim();
        let candidate = match EDKARA_ARTIST_CUTOFF_RE.find(candidate) {
            Some(m) => &candidate[..m.start()],
            None => candidate,
        };
        let artist = KARAOKE_MARK_RE.replace_all(candidate, "");
        return Extracted::new(title.trim(), artist.trim());
    }

    if let Some((title, artist)) = split_first_slash(temp) {
        return Extracted::new(title.trim(), artist.trim());
    }

    let title = LENTICULAR_SECTION_RE.replace_all(temp, "");
    Extracted::new(title.trim(), "")
}

fn parse_generic_video(original_title: &str, channel: &str) -> Extracted {
    let clean = strip_karaoke_badges(original_title);

    if let Some((title, artist)) = split_first_slash(&clean) {
        return Extracted::new(title, artist.replace("[カラオケ]", "").trim());
    }
    if let Some((title, artist)) = clean.split_once(" - ") {
        return Extracted::new(title, artist);
    }

    let is_label_channel = ["Official", "Music", "Records"]
        .iter()
        .any(|label| channel.contains(label));
    let artist = if is_label_channel { channel } else { "" };
    Extracted::new(clean.as_str(), artist)
}

fn parse_manekineko_song(original_title: &str, artist_hint: &str) -> Extracted {
    let (temp, key) = extract_canonical_key_tag(original_title);

    let (temp, artist) = if let Some(caps) = MANEKINEKO_PERFORMED_BY_RE.captures(&temp) {
        let artist = caps[1].trim().to_string();
        let stripped = MANEKINEKO_PERFORMED_BY_RE.replace_all(&temp, "").into_owned();
        (stripped, artist)
    } else if let Some(caps) = TRAILING_BRACKET_RE.captures(&temp) {
        let artist = caps[1].trim().to_string();
        let stripped = TRAILING_BRACKET_RE.replace_all(&temp, "").into_owned();
        (stripped, artist)
    } else {
        (temp, artist_hint.to_string())
    };

    let title = temp.replace("（カラオケ）", "").replace("(カラオケ)", "");
    Extracted::new(title.trim(), artist).with_key(key)
}

fn parse_utacchaoh_song(original_title: &str, artist_hint: &str) -> Extracted {
    let (temp, key) = extract_key_tag(original_title);
    let (temp, artist) = extract_original_artist(&temp);
    let temp = temp.replace("（カラオケ）", "").replace("(カラオケ)", "");
    let title = GUIDE_KARAOKE_TAG_RE.replace_all(&temp, "");

    Extracted::new(title.trim(), artist.unwrap_or_else(|| artist_hint.to_string())).with_key(key)
}

fn parse_karaoke_catalog_song(original_title: &str, artist_hint: &str) -> Extracted {
    match split_first_slash(original_title) {
        Some((title, artist)) => Extracted::new(title, artist.replace("【カラオケ音源】", "").trim()),
        None => Extracted::new(original_title, artist_hint),
    }
}
