//! 한글 자모 분해 및 두벌식 한/영 변환 토큰 필터
//!
//! 검색어의 오타, 초성 검색, 한/영 전환 실수를 흡수하기 위한 변환을 제공합니다.
//!
//! - [`chosung`]: 음절을 초성으로 (`"오픈 서치"` -> `"ㅇㅍ ㅅㅊ"`)
//! - [`decompose`]: 음절을 자모로 (`"값지다"` -> `"ㄱㅏㅂㅅㅈㅣㄷㅏ"`)
//! - [`eng_to_han`]: 영문 키 입력을 한글로 (`"dhvms tjcl"` -> `"오픈 서치"`)
//! - [`han_to_eng`]: 한글 입력을 영문 키로 (`"ㅐㅔ둔ㄷㅁㄱ초"` -> `"opensearch"`)
//!
//! ```
//! use hangul_filter::{Analyzer, FilterKind, TokenizerKind};
//!
//! let analyzer = Analyzer::new(TokenizerKind::Whitespace).with_filter(FilterKind::EngToHan);
//! assert_eq!(analyzer.analyze("dhvms tjcl"), vec!["오픈", "서치"]);
//! ```

pub mod config;
pub mod core;
pub mod filter;

pub use crate::config::{AnalyzerConfig, ConfigError};
pub use crate::core::converter::{eng_to_han, han_to_eng};
pub use crate::core::jamo::{chosung, decompose, decompose_with, ClusterMode};
pub use crate::filter::{Analyzer, FilterKind, TextTransform, TokenizerKind};
