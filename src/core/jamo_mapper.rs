//! 두벌식 자판 영문 키 <-> 한글 자모 매핑
//!
//! 하나의 상수 테이블에서 정방향(키 -> 자모)과 역방향(자모 -> 키) 맵을
//! 한 번만 만들어 공유합니다. 두 키로 입력되는 복합 자모(ㅘ, ㄳ 등)도
//! 두 키 시퀀스로 함께 기록합니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::unicode::{choseong_index, jongseong_index, jungseong_index};

/// 두벌식 자판 테이블: (키 시퀀스, 호환용 자모)
#[rustfmt::skip]
pub static KEYBOARD_TABLE: &[(&str, char)] = &[
    // 자음
    ("r", 'ㄱ'), ("R", 'ㄲ'), ("s", 'ㄴ'), ("e", 'ㄷ'), ("E", 'ㄸ'),
    ("f", 'ㄹ'), ("a", 'ㅁ'), ("q", 'ㅂ'), ("Q", 'ㅃ'), ("t", 'ㅅ'),
    ("T", 'ㅆ'), ("d", 'ㅇ'), ("w", 'ㅈ'), ("W", 'ㅉ'), ("c", 'ㅊ'),
    ("z", 'ㅋ'), ("x", 'ㅌ'), ("v", 'ㅍ'), ("g", 'ㅎ'),
    // 모음
    ("k", 'ㅏ'), ("o", 'ㅐ'), ("i", 'ㅑ'), ("O", 'ㅒ'), ("j", 'ㅓ'),
    ("p", 'ㅔ'), ("u", 'ㅕ'), ("P", 'ㅖ'), ("h", 'ㅗ'), ("y", 'ㅛ'),
    ("n", 'ㅜ'), ("b", 'ㅠ'), ("m", 'ㅡ'), ("l", 'ㅣ'),
    // 복합 모음 (두 키)
    ("hk", 'ㅘ'), ("ho", 'ㅙ'), ("hl", 'ㅚ'), ("nj", 'ㅝ'), ("np", 'ㅞ'),
    ("nl", 'ㅟ'), ("ml", 'ㅢ'),
    // 겹받침 (두 키)
    ("rt", 'ㄳ'), ("sw", 'ㄵ'), ("sg", 'ㄶ'), ("fr", 'ㄺ'), ("fa", 'ㄻ'),
    ("fq", 'ㄼ'), ("ft", 'ㄽ'), ("fx", 'ㄾ'), ("fv", 'ㄿ'), ("fg", 'ㅀ'),
    ("qt", 'ㅄ'),
];

lazy_static! {
    /// 키 시퀀스 -> 자모
    static ref KEY_TO_JAMO: HashMap<&'static str, char> =
        KEYBOARD_TABLE.iter().copied().collect();

    /// 자모 -> 키 시퀀스
    static ref JAMO_TO_KEYS: HashMap<char, &'static str> =
        KEYBOARD_TABLE.iter().map(|&(keys, jamo)| (jamo, keys)).collect();
}

/// 자모 유형 (음절 안에서 차지할 수 있는 자리)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    /// 자음 (cho_index: 초성 인덱스, jong_index: 종성 인덱스, None이면 종성 불가)
    Consonant {
        cho_index: u32,
        jong_index: Option<u32>,
    },
    /// 모음 (jung_index: 중성 인덱스)
    Vowel { jung_index: u32 },
}

impl Jamo {
    /// 호환용 자모 문자에서 자리 정보 생성
    /// 초성이 될 수 없는 겹받침과 자모가 아닌 문자는 None
    pub fn from_compat(jamo: char) -> Option<Self> {
        if let Some(jung_index) = jungseong_index(jamo) {
            return Some(Jamo::Vowel { jung_index });
        }
        let cho_index = choseong_index(jamo)?;
        Some(Jamo::Consonant {
            cho_index,
            jong_index: jongseong_index(jamo),
        })
    }
}

/// 키 시퀀스에 대응하는 자모 문자
pub fn jamo_for_keys(keys: &str) -> Option<char> {
    KEY_TO_JAMO.get(keys).copied()
}

/// 자모 문자에 대응하는 키 시퀀스
pub fn keys_for_jamo(jamo: char) -> Option<&'static str> {
    JAMO_TO_KEYS.get(&jamo).copied()
}

/// 영문 키 하나를 자모로 변환 (대소문자 구분)
/// 매핑에 없는 문자(숫자, 특수문자 등)는 None 반환
pub fn map_to_jamo(c: char) -> Option<Jamo> {
    let mut buf = [0u8; 4];
    let jamo = jamo_for_keys(c.encode_utf8(&mut buf))?;
    Jamo::from_compat(jamo)
}
