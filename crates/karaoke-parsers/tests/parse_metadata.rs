use karaoke_parsers::{parse_metadata, ParsedMetadata};
use models::ResultType;

fn parsed(title: &str, artist: &str, key: Option<&str>) -> ParsedMetadata {
    ParsedMetadata {
        title: title.to_string(),
        artist: artist.to_string(),
        key: key.map(str::to_string),
    }
}

fn video(title: &str, channel: &str) -> ParsedMetadata {
    parse_metadata(title, channel, channel, ResultType::Video)
}

fn song(title: &str, hint: &str) -> ParsedMetadata {
    parse_metadata(title, hint, hint, ResultType::Song)
}

#[test]
fn nicokara_angle_brackets_hold_artist() {
    assert_eq!(
        video("夜に駆ける《YOASOBI》【ニコカラ】", "someone"),
        parsed("夜に駆ける", "YOASOBI", None)
    );
}

#[test]
fn nicokara_noisy_brackets_fall_back_to_slash() {
    assert_eq!(
        video("曲名《キー+2》/歌手 ニコカラ", "someone"),
        parsed("曲名《キー+2》", "歌手", None)
    );
    assert_eq!(
        video("【ニコカラ】曲名／歌手", "someone"),
        parsed("曲名", "歌手", None)
    );
}

#[test]
fn nicokara_without_separator_keeps_whole_title() {
    assert_eq!(
        video("ニコカラ 曲名 off vocal", "someone"),
        parsed("曲名", "", None)
    );
}

#[test]
fn nicokara_channel_applies_to_song_results() {
    assert_eq!(
        song("曲名／歌手", "ニコカラチャンネル"),
        parsed("曲名", "歌手", None)
    );
}

#[test]
fn joysound_chorus_practice() {
    assert_eq!(
        video("【合唱練習用】「旅立ちの日に」ソプラノ", "JOYSOUND CHANNEL"),
        parsed("旅立ちの日に", "合唱練習用", None)
    );
    assert_eq!(
        video("【合唱練習用】大地讃頌 アルト", "JOYSOUND CHANNEL"),
        parsed("大地讃頌 アルト", "合唱練習用", None)
    );
}

#[test]
fn joysound_prefers_parenthesized_japanese() {
    assert_eq!(
        video(
            "【JOYSOUND】Yoru ni Kakeru(夜に駆ける) / YOASOBI",
            "JOYSOUND CHANNEL"
        ),
        parsed("夜に駆ける", "YOASOBI", None)
    );
    assert_eq!(
        video("Lemon / Kenshi Yonezu(米津玄師)【karaoke】", "JOYSOUND CHANNEL"),
        parsed("Lemon", "米津玄師", None)
    );
    assert_eq!(
        video("【JOYSOUND】紅蓮華", "JOYSOUND CHANNEL"),
        parsed("紅蓮華", "", None)
    );
}

#[test]
fn utacchaoh_video_with_key_and_slash() {
    assert_eq!(
        video(
            "【ガイドなし】夜に駆ける / YOASOBI [カラオケ] キー-2",
            "カラオケ歌っちゃ王"
        ),
        parsed("夜に駆ける", "YOASOBI", Some("-2KEY"))
    );
}

#[test]
fn utacchaoh_video_with_original_artist_tag() {
    assert_eq!(
        video("夜に駆ける(＋３キー)(原曲歌手:YOASOBI)", "カラオケ歌っちゃ王"),
        parsed("夜に駆ける", "YOASOBI", Some("+3KEY"))
    );
}

#[test]
fn edkara_hyphen_split_truncates_artist() {
    assert_eq!(
        video(
            "Karaoke♬ Lemon - Kenshi Yonezu 【No Guide Melody】 Instrumental",
            "EdKara"
        ),
        parsed("Lemon", "Kenshi Yonezu", None)
    );
}

#[test]
fn edkara_originally_performed_by() {
    assert_eq!(
        video(
            "カラオケ♬ Pretender (Originally Performed by Official髭男dism) [Instrumental]",
            "EdKara"
        ),
        parsed("Pretender", "Official髭男dism", None)
    );
}

#[test]
fn edkara_slash_and_bare_title() {
    assert_eq!(
        video("Karaoke 夜に駆ける/YOASOBI", "EdKara"),
        parsed("夜に駆ける", "YOASOBI", None)
    );
    assert_eq!(
        video("Karaoke 夜に駆ける【歌詞付き】", "EdKara"),
        parsed("夜に駆ける", "", None)
    );
}

#[test]
fn generic_video_slash_split() {
    assert_eq!(
        video("残酷な天使のテーゼ/高橋洋子 [カラオケ]", "some uploader"),
        parsed("残酷な天使のテーゼ", "高橋洋子", None)
    );
}

#[test]
fn generic_video_hyphen_split() {
    assert_eq!(
        video("Lemon - 米津玄師 (Karaoke)", "some uploader"),
        parsed("Lemon", "米津玄師", None)
    );
}

#[test]
fn generic_video_label_channel_becomes_artist() {
    assert_eq!(
        video("紅蓮華（カラオケ）", "LiSA Official"),
        parsed("紅蓮華", "LiSA Official", None)
    );
    assert_eq!(
        video("紅蓮華（カラオケ）", "some uploader"),
        parsed("紅蓮華", "", None)
    );
}

#[test]
fn generic_video_drops_guide_tag() {
    assert_eq!(
        video("夜に駆ける[ガイドメロディなしカラオケ]", "some uploader"),
        parsed("夜に駆ける", "", None)
    );
}

#[test]
fn manekineko_song_with_key_and_performed_by() {
    assert_eq!(
        song(
            "Lemon（カラオケ）+2KEY [Originally Performed By 米津玄師]",
            "カラオケまねきねこ"
        ),
        parsed("Lemon", "米津玄師", Some("+2KEY"))
    );
}

#[test]
fn manekineko_song_trailing_bracket_artist() {
    assert_eq!(
        song("夜に駆ける (カラオケ) [YOASOBI]", "カラオケまねきねこ"),
        parsed("夜に駆ける", "YOASOBI", None)
    );
    assert_eq!(
        song("夜に駆ける", "カラオケまねきねこ"),
        parsed("夜に駆ける", "カラオケまねきねこ", None)
    );
}

#[test]
fn utacchaoh_song_key_and_original_artist() {
    assert_eq!(
        song("テスト（カラオケ）[Key:+2][原曲歌手:サンプル]", "カラオケ歌っちゃ王"),
        parsed("テスト", "サンプル", Some("+2KEY"))
    );
    assert_eq!(
        song("夜に駆ける ー1キー", "カラオケ歌っちゃ王"),
        parsed("夜に駆ける", "カラオケ歌っちゃ王", Some("-1KEY"))
    );
}

#[test]
fn key_glyph_variants_normalize() {
    let hint = "歌っちゃ王";
    assert_eq!(song("曲 Key:+3", hint).key.as_deref(), Some("+3KEY"));
    assert_eq!(song("曲 ＋３Key", hint).key.as_deref(), Some("+3KEY"));
    assert_eq!(song("曲 ー3Key", hint).key.as_deref(), Some("-3KEY"));
    assert_eq!(song("曲 －3キー", hint).key.as_deref(), Some("-3KEY"));
}

#[test]
fn karaoke_catalog_song_splits_on_slash() {
    assert_eq!(
        song("夜に駆ける/YOASOBI【カラオケ音源】", "J-POP Karaoke"),
        parsed("夜に駆ける", "YOASOBI", None)
    );
    assert_eq!(
        song("夜に駆ける", "J-POP Karaoke"),
        parsed("夜に駆ける", "J-POP Karaoke", None)
    );
}

#[test]
fn unknown_song_passes_through() {
    assert_eq!(
        song("夜に駆ける / YOASOBI", "YOASOBI"),
        parsed("夜に駆ける / YOASOBI", "YOASOBI", None)
    );
    assert_eq!(
        parse_metadata("\u{3000}夜に駆ける ", "", "YouTube Music", ResultType::Song),
        parsed("夜に駆ける", "", None)
    );
}

#[test]
fn malformed_titles_never_panic() {
    let titles = [
        "",
        "/",
        "《》",
        "【",
        "Key:",
        "キー",
        " - ",
        "[Originally Performed By",
        "(原曲歌手:",
        "ニコカラ《",
    ];
    let channels = [
        "JOYSOUND CHANNEL",
        "カラオケ歌っちゃ王",
        "EdKara",
        "ニコカラ",
        "YouTube Music",
    ];
    for title in titles {
        for channel in channels {
            for kind in [ResultType::Song, ResultType::Video] {
                let first = parse_metadata(title, channel, channel, kind);
                let second = parse_metadata(title, channel, channel, kind);
                assert_eq!(first, second);
            }
        }
        let _ = song(title, "カラオケまねきねこ");
        let _ = song(title, "Karaoke");
    }
}
