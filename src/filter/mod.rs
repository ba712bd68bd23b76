//! 분석 파이프라인용 토큰 필터
//!
//! 각 필터는 토큰 하나를 받아 변환된 토큰 하나(또는 없음)를 돌려줍니다.
//! 필터 이름은 검색 엔진 분석기 설정에서 쓰는 이름과 같습니다.

mod analyzer;
mod tokenizer;

pub use analyzer::{Analyzer, TokenStream};
pub use tokenizer::{TokenizerKind, Tokens};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::core::converter::{eng_to_han, han_to_eng};
use crate::core::jamo::{chosung, decompose};

/// 토큰 단위 문자열 변환
///
/// 변환 테이블은 모두 불변이므로 구현체는 스레드 간에 공유할 수 있어야 합니다.
pub trait TextTransform: Send + Sync {
    /// 등록 이름
    fn name(&self) -> &str;

    /// 토큰 변환, None이면 토큰을 버림
    fn transform(&self, token: &str) -> Option<String>;
}

/// 기본 제공 필터
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    /// 초성 추출
    #[serde(rename = "custom_chosung")]
    Chosung,
    /// 자모 분해
    #[serde(rename = "custom_jamo")]
    JamoDecompose,
    /// 영문 키 -> 한글
    #[serde(rename = "custom_engtohan")]
    EngToHan,
    /// 한글 -> 영문 키
    #[serde(rename = "custom_hantoeng")]
    HanToEng,
}

impl FilterKind {
    /// 등록된 모든 필터
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Chosung,
        FilterKind::JamoDecompose,
        FilterKind::EngToHan,
        FilterKind::HanToEng,
    ];

    /// 설정에서 사용하는 이름
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Chosung => "custom_chosung",
            FilterKind::JamoDecompose => "custom_jamo",
            FilterKind::EngToHan => "custom_engtohan",
            FilterKind::HanToEng => "custom_hantoeng",
        }
    }

    /// 문자열 전체에 변환 적용
    pub fn apply(&self, text: &str) -> String {
        match self {
            FilterKind::Chosung => chosung(text),
            FilterKind::JamoDecompose => decompose(text),
            FilterKind::EngToHan => eng_to_han(text),
            FilterKind::HanToEng => han_to_eng(text),
        }
    }
}

impl TextTransform for FilterKind {
    fn name(&self) -> &str {
        FilterKind::name(self)
    }

    fn transform(&self, token: &str) -> Option<String> {
        let result = self.apply(token);
        if result.is_empty() {
            None
        } else {
            Some(result)
        }
    }
}

impl FromStr for FilterKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConfigError::UnknownFilter(s.to_string()))
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
