//! 초성 추출 및 자모 분해
//!
//! 완성형 음절만 변환하고 그 밖의 문자(영문, 숫자, 기호, 이미 분리된 자모)는
//! 그대로 둡니다. 출력 자모는 모두 호환용 자모라서 다시 적용해도 결과가 같습니다.

use crate::core::unicode::{decompose_to_jamo, split_compound_jamo};

/// 겹받침 처리 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClusterMode {
    /// 겹받침을 구성 자음 둘로 분리 (ㅄ -> ㅂㅅ)
    #[default]
    Split,
    /// 겹받침을 하나의 자모로 유지
    Keep,
}

/// 각 음절을 초성으로 치환
///
/// 입력과 출력의 문자 수는 항상 같습니다.
///
/// ```
/// use hangul_filter::chosung;
/// assert_eq!(chosung("오픈 서치"), "ㅇㅍ ㅅㅊ");
/// ```
pub fn chosung(input: &str) -> String {
    input
        .chars()
        .map(|c| decompose_to_jamo(c).map_or(c, |(lead, _, _)| lead))
        .collect()
}

/// 각 음절을 초성+중성+종성 자모로 분해 (겹받침 분리)
///
/// ```
/// use hangul_filter::decompose;
/// assert_eq!(decompose("값지다"), "ㄱㅏㅂㅅㅈㅣㄷㅏ");
/// ```
pub fn decompose(input: &str) -> String {
    decompose_with(input, ClusterMode::Split)
}

/// 겹받침 처리 방식을 지정하여 자모 분해
pub fn decompose_with(input: &str, mode: ClusterMode) -> String {
    let mut result = String::with_capacity(input.len() * 3);

    for c in input.chars() {
        let Some((lead, vowel, trail)) = decompose_to_jamo(c) else {
            result.push(c);
            continue;
        };

        result.push(lead);
        result.push(vowel);

        match (trail, mode) {
            (None, _) => {}
            (Some(trail), ClusterMode::Keep) => result.push(trail),
            (Some(trail), ClusterMode::Split) => match split_compound_jamo(trail) {
                Some((first, second)) => {
                    result.push(first);
                    result.push(second);
                }
                None => result.push(trail),
            },
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chosung() {
        assert_eq!(chosung("오픈 서치"), "ㅇㅍ ㅅㅊ");
        assert_eq!(chosung("오픈 search"), "ㅇㅍ search");
        assert_eq!(chosung("([]오픈!@#서치"), "([]ㅇㅍ!@#ㅅㅊ");
        assert_eq!(chosung("값지다"), "ㄱㅈㄷ");
        assert_eq!(chosung("앉다"), "ㅇㄷ");
    }

    #[test]
    fn test_chosung_keeps_jamo() {
        assert_eq!(chosung("오ㅍㅡㄴ ㅅㅓ치"), "ㅇㅍㅡㄴ ㅅㅓㅊ");
    }

    #[test]
    fn test_chosung_preserves_length() {
        for input in ["", "가", "오픈 서치", "abc가나다123", "ㄱㅏ힣!"] {
            assert_eq!(chosung(input).chars().count(), input.chars().count());
        }
    }

    #[test]
    fn test_decompose() {
        assert_eq!(decompose("오픈 서치"), "ㅇㅗㅍㅡㄴ ㅅㅓㅊㅣ");
        assert_eq!(decompose("오픈 search"), "ㅇㅗㅍㅡㄴ search");
        assert_eq!(decompose("오픈!@# 서치(*&^$%"), "ㅇㅗㅍㅡㄴ!@# ㅅㅓㅊㅣ(*&^$%");
        assert_eq!(decompose("오ㅍㅡㄴ ㅅㅓ치"), "ㅇㅗㅍㅡㄴ ㅅㅓㅊㅣ");
    }

    #[test]
    fn test_decompose_clusters() {
        assert_eq!(decompose("값지다"), "ㄱㅏㅂㅅㅈㅣㄷㅏ");
        assert_eq!(decompose("앉다"), "ㅇㅏㄴㅈㄷㅏ");
        // 이중 모음은 분리하지 않음
        assert_eq!(decompose("완"), "ㅇㅘㄴ");
    }

    #[test]
    fn test_decompose_keep_clusters() {
        assert_eq!(decompose_with("값지다", ClusterMode::Keep), "ㄱㅏㅄㅈㅣㄷㅏ");
        assert_eq!(decompose_with("앉다", ClusterMode::Keep), "ㅇㅏㄵㄷㅏ");
    }

    #[test]
    fn test_idempotent() {
        for input in ["오픈 서치", "값지다", "mixed 한글 123"] {
            let once = chosung(input);
            assert_eq!(chosung(&once), once);

            let once = decompose(input);
            assert_eq!(decompose(&once), once);
        }
    }
}
