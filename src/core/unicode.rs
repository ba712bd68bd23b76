//! 유니코드 한글 음절 조합/분해 (Hangul Codec)
//!
//! 완성형 한글 음절(U+AC00 ~ U+D7A3)과 초성/중성/종성 사이의 변환을
//! 고정된 오프셋 연산과 상수 테이블로 처리합니다.
//! 자모 문자는 모두 호환용 자모(U+3131 ~ U+3163)를 사용합니다.

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 인덱스 순서의 호환용 자모
pub const CHOSEONG_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 인덱스 순서의 호환용 자모
pub const JUNGSEONG_JAMO: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 인덱스 순서의 호환용 자모 (0 = 종성 없음)
pub const JONGSEONG_JAMO: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// 복합 모음: (첫 모음, 둘째 모음, 결과)
pub const COMPOUND_VOWELS: [(char, char, char); 7] = [
    ('ㅗ', 'ㅏ', 'ㅘ'),
    ('ㅗ', 'ㅐ', 'ㅙ'),
    ('ㅗ', 'ㅣ', 'ㅚ'),
    ('ㅜ', 'ㅓ', 'ㅝ'),
    ('ㅜ', 'ㅔ', 'ㅞ'),
    ('ㅜ', 'ㅣ', 'ㅟ'),
    ('ㅡ', 'ㅣ', 'ㅢ'),
];

/// 복합 종성 (겹받침): (첫 자음, 둘째 자음, 결과)
pub const COMPOUND_FINALS: [(char, char, char); 11] = [
    ('ㄱ', 'ㅅ', 'ㄳ'),
    ('ㄴ', 'ㅈ', 'ㄵ'),
    ('ㄴ', 'ㅎ', 'ㄶ'),
    ('ㄹ', 'ㄱ', 'ㄺ'),
    ('ㄹ', 'ㅁ', 'ㄻ'),
    ('ㄹ', 'ㅂ', 'ㄼ'),
    ('ㄹ', 'ㅅ', 'ㄽ'),
    ('ㄹ', 'ㅌ', 'ㄾ'),
    ('ㄹ', 'ㅍ', 'ㄿ'),
    ('ㄹ', 'ㅎ', 'ㅀ'),
    ('ㅂ', 'ㅅ', 'ㅄ'),
];

/// 완성형 한글 음절인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스), 음절 범위 밖이면 None
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    let jungseong = (offset % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT;
    let jongseong = offset % JONGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 완성형 한글을 호환용 자모 (초성, 중성, 종성)으로 분해
pub fn decompose_to_jamo(c: char) -> Option<(char, char, Option<char>)> {
    let (cho, jung, jong) = decompose_syllable(c)?;
    Some((
        choseong_to_jamo_char(cho)?,
        jungseong_to_jamo_char(jung)?,
        jongseong_to_jamo_char(jong),
    ))
}

/// 호환용 자모로 완성형 한글 생성
/// 자모가 해당 자리에 올 수 없으면 None
pub fn compose_from_jamo(lead: char, vowel: char, trail: Option<char>) -> Option<char> {
    let jong = match trail {
        Some(t) => jongseong_index(t)?,
        None => 0,
    };
    compose_syllable(choseong_index(lead)?, jungseong_index(vowel)?, jong)
}

/// 호환용 자모의 초성 인덱스
pub fn choseong_index(jamo: char) -> Option<u32> {
    CHOSEONG_JAMO.iter().position(|&j| j == jamo).map(|i| i as u32)
}

/// 호환용 자모의 중성 인덱스
pub fn jungseong_index(jamo: char) -> Option<u32> {
    JUNGSEONG_JAMO.iter().position(|&j| j == jamo).map(|i| i as u32)
}

/// 호환용 자모의 종성 인덱스 (종성이 될 수 없는 ㄸ, ㅃ, ㅉ은 None)
pub fn jongseong_index(jamo: char) -> Option<u32> {
    JONGSEONG_JAMO.iter().position(|&j| j == Some(jamo)).map(|i| i as u32)
}

/// 초성 인덱스의 호환용 자모
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 중성 인덱스의 호환용 자모
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    JUNGSEONG_JAMO.get(jung as usize).copied()
}

/// 종성 인덱스의 호환용 자모 (0 또는 범위 밖이면 None)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    JONGSEONG_JAMO.get(jong as usize).copied().flatten()
}

/// 두 중성을 복합 모음으로 조합
/// 반환: 복합 모음 인덱스 (실패 시 None)
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    let a = jungseong_to_jamo_char(first)?;
    let b = jungseong_to_jamo_char(second)?;
    COMPOUND_VOWELS
        .iter()
        .find(|&&(x, y, _)| x == a && y == b)
        .and_then(|&(_, _, combined)| jungseong_index(combined))
}

/// 두 종성을 복합 종성으로 조합
/// 반환: 복합 종성 인덱스 (실패 시 None)
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    let a = jongseong_to_jamo_char(first)?;
    let b = jongseong_to_jamo_char(second)?;
    COMPOUND_FINALS
        .iter()
        .find(|&&(x, y, _)| x == a && y == b)
        .and_then(|&(_, _, combined)| jongseong_index(combined))
}

/// 복합 종성을 분리
/// 반환: (남는 종성 인덱스, 다음 글자의 초성 인덱스)
pub fn split_jongseong(jong: u32) -> Option<(u32, u32)> {
    let (first, second) = split_compound_jamo(jongseong_to_jamo_char(jong)?)?;
    Some((jongseong_index(first)?, choseong_index(second)?))
}

/// 단일 종성을 초성 인덱스로 변환
/// 종성이 다음 글자의 초성으로 이동할 때 사용, 복합 종성은 None
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    choseong_index(jongseong_to_jamo_char(jong)?)
}

/// 복합 자모(겹받침, 이중 모음)를 구성 자모 둘로 분리
pub fn split_compound_jamo(jamo: char) -> Option<(char, char)> {
    COMPOUND_FINALS
        .iter()
        .chain(COMPOUND_VOWELS.iter())
        .find(|&&(_, _, combined)| combined == jamo)
        .map(|&(first, second, _)| (first, second))
}
