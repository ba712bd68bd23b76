//! 통합 테스트 - 토큰 필터 동작

use std::sync::Arc;
use std::thread;

use hangul_filter::core::unicode::{
    compose_syllable, decompose_syllable, HANGUL_SYLLABLE_BASE, HANGUL_SYLLABLE_LAST,
};
use hangul_filter::{
    chosung, decompose, eng_to_han, han_to_eng, Analyzer, AnalyzerConfig, FilterKind,
    TokenizerKind,
};

/// 공백 토크나이저 + 필터 하나로 분석 후 공백으로 연결
fn analyze(filter: FilterKind, text: &str) -> String {
    Analyzer::new(TokenizerKind::Whitespace)
        .with_filter(filter)
        .analyze(text)
        .join(" ")
}

#[test]
fn test_codec_roundtrip() {
    for code in HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST {
        let c = char::from_u32(code).unwrap();
        let (cho, jung, jong) = decompose_syllable(c).unwrap();
        assert_eq!(compose_syllable(cho, jung, jong), Some(c));
    }
}

#[test]
fn test_chosung_filter() {
    assert_eq!(analyze(FilterKind::Chosung, "오픈 서치"), "ㅇㅍ ㅅㅊ");
    assert_eq!(analyze(FilterKind::Chosung, "오픈 search"), "ㅇㅍ search");
    assert_eq!(analyze(FilterKind::Chosung, "([]오픈!@#서치"), "([]ㅇㅍ!@#ㅅㅊ");
    assert_eq!(analyze(FilterKind::Chosung, "값지다"), "ㄱㅈㄷ");
    assert_eq!(analyze(FilterKind::Chosung, "앉다"), "ㅇㄷ");
}

#[test]
fn test_jamo_filter() {
    assert_eq!(analyze(FilterKind::JamoDecompose, "오픈 서치"), "ㅇㅗㅍㅡㄴ ㅅㅓㅊㅣ");
    assert_eq!(analyze(FilterKind::JamoDecompose, "오픈 search"), "ㅇㅗㅍㅡㄴ search");
    assert_eq!(
        analyze(FilterKind::JamoDecompose, "오픈!@# 서치(*&^$%"),
        "ㅇㅗㅍㅡㄴ!@# ㅅㅓㅊㅣ(*&^$%"
    );
    assert_eq!(analyze(FilterKind::JamoDecompose, "오ㅍㅡㄴ ㅅㅓ치"), "ㅇㅗㅍㅡㄴ ㅅㅓㅊㅣ");
    assert_eq!(analyze(FilterKind::JamoDecompose, "값지다"), "ㄱㅏㅂㅅㅈㅣㄷㅏ");
    assert_eq!(analyze(FilterKind::JamoDecompose, "앉다"), "ㅇㅏㄴㅈㄷㅏ");
}

#[test]
fn test_engtohan_filter() {
    assert_eq!(analyze(FilterKind::EngToHan, "dhvms tjcl"), "오픈 서치");
    assert_eq!(analyze(FilterKind::EngToHan, "dhvms 서치"), "오픈 서치");
    assert_eq!(analyze(FilterKind::EngToHan, "dhvms!@# tjcl(*&^$%"), "오픈!@# 서치(*&^$%");
    assert_eq!(analyze(FilterKind::EngToHan, "rkqtwlek"), "값지다");
    assert_eq!(analyze(FilterKind::EngToHan, "dkswek"), "앉다");
}

#[test]
fn test_hantoeng_filter() {
    assert_eq!(analyze(FilterKind::HanToEng, "ㅐㅔ둔ㄷㅁㄱ초"), "opensearch");
    assert_eq!(analyze(FilterKind::HanToEng, "믐캐ㅜ.채ㅡ"), "amazon.com");
    assert_eq!(
        analyze(FilterKind::HanToEng, "ㅐㅔ둔ㄷㅁㄱ초!@#$%^&&**(("),
        "opensearch!@#$%^&&**(("
    );
    assert_eq!(analyze(FilterKind::HanToEng, "ㄴ잭ㅇ"), "sword");
}

#[test]
fn test_keyword_tokenizer_keeps_spaces() {
    let analyzer = Analyzer::new(TokenizerKind::Keyword).with_filter(FilterKind::EngToHan);
    assert_eq!(analyzer.analyze("dhvms tjcl"), vec!["오픈 서치"]);
    assert!(analyzer.analyze("").is_empty());
}

#[test]
fn test_analyzer_from_json_config() {
    let config =
        AnalyzerConfig::from_json(r#"{"tokenizer": "whitespace", "filter": ["custom_engtohan", "custom_jamo"]}"#)
            .unwrap();
    let analyzer = Analyzer::from_config(&config);
    assert_eq!(analyzer.analyze("rkqt dkswek"), vec!["ㄱㅏㅂㅅ", "ㅇㅏㄴㅈㄷㅏ"]);
}

#[test]
fn test_chosung_length_and_idempotence() {
    for input in ["오픈 서치", "abc", "", "값지다!", "ㄱㄴㄷ 가나다"] {
        let once = chosung(input);
        assert_eq!(once.chars().count(), input.chars().count());
        assert_eq!(chosung(&once), once);
        let decomposed = decompose(input);
        assert_eq!(decompose(&decomposed), decomposed);
    }
}

#[test]
fn test_inverse_pair() {
    assert_eq!(han_to_eng(&eng_to_han("dhvms tjcl")), "dhvms tjcl");
    assert_eq!(eng_to_han(&han_to_eng("오픈 서치")), "오픈 서치");
    assert_eq!(eng_to_han(&han_to_eng("ㅘ ㅢ")), "ㅘ ㅢ");
}

#[test]
fn test_shared_analyzer_across_threads() {
    let analyzer = Arc::new(
        Analyzer::new(TokenizerKind::Whitespace)
            .with_filter(FilterKind::EngToHan)
            .with_filter(FilterKind::Chosung),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = Arc::clone(&analyzer);
            thread::spawn(move || {
                (0..100)
                    .map(|_| analyzer.analyze("dhvms tjcl").join(" "))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for result in handle.join().unwrap() {
            assert_eq!(result, "ㅇㅍ ㅅㅊ");
        }
    }
}
