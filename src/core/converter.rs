//! 두벌식 자판 기준 영문 <-> 한글 변환기
//!
//! 한/영 전환을 잊고 입력한 문자열을 원래 의도한 문자로 되돌립니다.

use crate::core::hangul_fsm::HangulFsm;
use crate::core::jamo_mapper::{keys_for_jamo, map_to_jamo};
use crate::core::unicode::decompose_to_jamo;

/// 영문 키 입력을 한글로 변환 (engToHan)
///
/// 영문은 소문자로 정규화한 뒤 자판 키로 해석합니다.
/// 매핑 없는 문자(숫자, 특수문자, 한글 등)는 조합 중인 글자를 확정한 뒤 그대로 출력합니다.
///
/// ```
/// use hangul_filter::eng_to_han;
/// assert_eq!(eng_to_han("dhvms tjcl"), "오픈 서치");
/// assert_eq!(eng_to_han("rkqtwlek"), "값지다");
/// ```
pub fn eng_to_han(input: &str) -> String {
    let mut fsm = HangulFsm::with_capacity(input.len());

    for c in input.chars() {
        match map_to_jamo(c.to_ascii_lowercase()) {
            Some(jamo) => fsm.feed(jamo),
            None => fsm.feed_passthrough(c),
        }
    }

    fsm.finish()
}

/// 한글을 두벌식 영문 키 시퀀스로 변환 (hanToEng)
///
/// 완성형 음절은 자모로 분해한 뒤 키로 바꾸고, 단독 자모도 키로 바꿉니다.
/// 복합 자모는 두 키, 쌍자음은 Shift 키(대문자)가 됩니다.
///
/// ```
/// use hangul_filter::han_to_eng;
/// assert_eq!(han_to_eng("ㅐㅔ둔ㄷㅁㄱ초"), "opensearch");
/// ```
pub fn han_to_eng(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        match decompose_to_jamo(c) {
            Some((lead, vowel, trail)) => {
                push_keys(lead, &mut result);
                push_keys(vowel, &mut result);
                if let Some(trail) = trail {
                    push_keys(trail, &mut result);
                }
            }
            None => push_keys(c, &mut result),
        }
    }

    result
}

/// 자모의 키 시퀀스를 추가, 자판에 없는 문자는 그대로
fn push_keys(c: char, result: &mut String) {
    match keys_for_jamo(c) {
        Some(keys) => result.push_str(keys),
        None => result.push(c),
    }
}
