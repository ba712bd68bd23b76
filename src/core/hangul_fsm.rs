//! 한글 조합 유한 상태 기계 (FSM)
//!
//! 자모를 하나씩 받아 탐욕적으로 음절을 조합합니다. 종성 뒤에 모음이 오면
//! 그 종성(겹받침이면 뒤쪽 자음)을 다음 글자의 초성으로 넘깁니다.

use crate::core::jamo_mapper::Jamo;
use crate::core::unicode::{
    choseong_to_jamo_char, combine_jongseong, combine_jungseong, compose_syllable,
    jongseong_to_choseong, jungseong_to_jamo_char, split_jongseong,
};

/// 조합 중인 음절
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// 아무것도 없음
    Empty,
    /// 초성만 입력됨
    Choseong(u32),
    /// 중성만 입력됨
    Jungseong(u32),
    /// 초성+중성
    ChoseongJungseong(u32, u32),
    /// 초성+중성+종성
    ChoseongJungseongJongseong(u32, u32, u32),
}

/// 한글 조합 FSM
#[derive(Debug)]
pub struct HangulFsm {
    pending: Pending,
    /// 출력 버퍼
    output: String,
}

impl HangulFsm {
    /// 새 FSM 생성
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 출력 버퍼 크기를 지정하여 생성
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: Pending::Empty,
            output: String::with_capacity(capacity),
        }
    }

    /// 자모를 입력하여 상태 전이
    pub fn feed(&mut self, jamo: Jamo) {
        self.pending = match jamo {
            Jamo::Consonant {
                cho_index,
                jong_index,
            } => self.feed_consonant(cho_index, jong_index),
            Jamo::Vowel { jung_index } => self.feed_vowel(jung_index),
        };
    }

    /// 자음 입력 처리, 다음 상태 반환
    fn feed_consonant(&mut self, cho: u32, jong: Option<u32>) -> Pending {
        match self.pending {
            Pending::Empty => Pending::Choseong(cho),
            Pending::Choseong(prev) => {
                // 모음 없이 이어진 자음은 단독 자모로 출력
                self.push_choseong(prev);
                Pending::Choseong(cho)
            }
            Pending::Jungseong(vowel) => {
                self.push_jungseong(vowel);
                Pending::Choseong(cho)
            }
            Pending::ChoseongJungseong(lead, vowel) => match jong {
                Some(trail) => Pending::ChoseongJungseongJongseong(lead, vowel, trail),
                None => {
                    // 종성 불가 자음 (ㄸ, ㅃ, ㅉ)
                    self.push_syllable(lead, vowel, 0);
                    Pending::Choseong(cho)
                }
            },
            Pending::ChoseongJungseongJongseong(lead, vowel, trail) => {
                match jong.and_then(|j| combine_jongseong(trail, j)) {
                    Some(combined) => Pending::ChoseongJungseongJongseong(lead, vowel, combined),
                    None => {
                        self.push_syllable(lead, vowel, trail);
                        Pending::Choseong(cho)
                    }
                }
            }
        }
    }

    /// 모음 입력 처리, 다음 상태 반환
    fn feed_vowel(&mut self, jung: u32) -> Pending {
        match self.pending {
            Pending::Empty => Pending::Jungseong(jung),
            Pending::Choseong(lead) => Pending::ChoseongJungseong(lead, jung),
            Pending::Jungseong(vowel) => match combine_jungseong(vowel, jung) {
                Some(combined) => Pending::Jungseong(combined),
                None => {
                    self.push_jungseong(vowel);
                    Pending::Jungseong(jung)
                }
            },
            Pending::ChoseongJungseong(lead, vowel) => match combine_jungseong(vowel, jung) {
                Some(combined) => Pending::ChoseongJungseong(lead, combined),
                None => {
                    self.push_syllable(lead, vowel, 0);
                    Pending::Jungseong(jung)
                }
            },
            Pending::ChoseongJungseongJongseong(lead, vowel, trail) => {
                if let Some((remaining, next_lead)) = split_jongseong(trail) {
                    // 겹받침: 앞 자음은 종성으로 남고 뒤 자음이 다음 초성
                    self.push_syllable(lead, vowel, remaining);
                    Pending::ChoseongJungseong(next_lead, jung)
                } else if let Some(next_lead) = jongseong_to_choseong(trail) {
                    self.push_syllable(lead, vowel, 0);
                    Pending::ChoseongJungseong(next_lead, jung)
                } else {
                    self.push_syllable(lead, vowel, trail);
                    Pending::Jungseong(jung)
                }
            }
        }
    }

    /// 현재 조합 중인 글자를 출력 버퍼에 추가
    fn flush_current(&mut self) {
        match self.pending {
            Pending::Empty => {}
            Pending::Choseong(lead) => self.push_choseong(lead),
            Pending::Jungseong(vowel) => self.push_jungseong(vowel),
            Pending::ChoseongJungseong(lead, vowel) => self.push_syllable(lead, vowel, 0),
            Pending::ChoseongJungseongJongseong(lead, vowel, trail) => {
                self.push_syllable(lead, vowel, trail)
            }
        }
        self.pending = Pending::Empty;
    }

    fn push_choseong(&mut self, cho: u32) {
        if let Some(c) = choseong_to_jamo_char(cho) {
            self.output.push(c);
        }
    }

    fn push_jungseong(&mut self, jung: u32) {
        if let Some(c) = jungseong_to_jamo_char(jung) {
            self.output.push(c);
        }
    }

    fn push_syllable(&mut self, cho: u32, jung: u32, jong: u32) {
        if let Some(c) = compose_syllable(cho, jung, jong) {
            self.output.push(c);
        }
    }

    /// 변환 불가 문자 처리 (숫자, 특수문자 등)
    pub fn feed_passthrough(&mut self, c: char) {
        self.flush_current();
        self.output.push(c);
    }

    /// FSM 종료 및 최종 결과 반환
    pub fn finish(mut self) -> String {
        self.flush_current();
        self.output
    }
}

impl Default for HangulFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::jamo_mapper::map_to_jamo;

    fn compose(input: &str) -> String {
        let mut fsm = HangulFsm::new();
        for c in input.chars() {
            match map_to_jamo(c) {
                Some(jamo) => fsm.feed(jamo),
                None => fsm.feed_passthrough(c),
            }
        }
        fsm.finish()
    }

    #[test]
    fn test_basic_syllable() {
        assert_eq!(compose("rk"), "가");
        assert_eq!(compose("sk"), "나");
    }

    #[test]
    fn test_with_jongseong() {
        assert_eq!(compose("rkr"), "각");
        assert_eq!(compose("gks"), "한");
    }

    #[test]
    fn test_jongseong_to_next_choseong() {
        assert_eq!(compose("rksk"), "가나");
        assert_eq!(compose("dkswl"), "안지");
    }

    #[test]
    fn test_compound_jongseong_split_on_vowel() {
        // ㄳ 뒤에 모음: ㄱ은 남고 ㅅ이 다음 초성
        assert_eq!(compose("rkrtk"), "각사");
        // ㄵ 뒤에 자음: 겹받침 확정
        assert_eq!(compose("dkswek"), "앉다");
    }

    #[test]
    fn test_compound_vowel() {
        assert_eq!(compose("dhk"), "와");
        assert_eq!(compose("dnj"), "워");
        assert_eq!(compose("dml"), "의");
        // 조합 불가 모음은 단독 출력
        assert_eq!(compose("rkk"), "가ㅏ");
    }

    #[test]
    fn test_standalone_compound_vowel() {
        assert_eq!(compose("hk"), "ㅘ");
        assert_eq!(compose("ml"), "ㅢ");
        // 음절 뒤에 남은 모음도 다음 모음과 합쳐짐
        assert_eq!(compose("rkhk"), "가ㅘ");
        // 자음이나 변환 불가 문자가 오면 단독 모음 확정
        assert_eq!(compose("hkr"), "ㅘㄱ");
        assert_eq!(compose("hk1"), "ㅘ1");
    }

    #[test]
    fn test_non_final_consonant() {
        // ㄸ은 종성이 될 수 없으므로 새 음절
        assert_eq!(compose("rkEk"), "가따");
        assert_eq!(compose("rkE"), "가ㄸ");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(compose("123"), "123");
        assert_eq!(compose("rk!sk"), "가!나");
        assert_eq!(compose("rks sk"), "간 나");
    }

    #[test]
    fn test_partial_syllables() {
        assert_eq!(compose("r"), "ㄱ");
        assert_eq!(compose("rs"), "ㄱㄴ");
        assert_eq!(compose("k"), "ㅏ");
        assert_eq!(compose("kh"), "ㅏㅗ");
    }

    #[test]
    fn test_empty() {
        assert_eq!(compose(""), "");
    }
}
