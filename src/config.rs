//! 분석기 설정 로드/저장 (JSON)
//!
//! ```json
//! { "tokenizer": "whitespace", "filter": ["custom_engtohan"] }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::filter::{FilterKind, TokenizerKind};

/// 설정 로드/파싱 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    IoError(std::io::Error),
    /// JSON 파싱/직렬화 실패
    ParseError(String),
    /// 등록되지 않은 필터 이름
    UnknownFilter(String),
    /// 등록되지 않은 토크나이저 이름
    UnknownTokenizer(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::ParseError(s) => write!(f, "설정 JSON 파싱 오류: {}", s),
            ConfigError::UnknownFilter(s) => write!(f, "알 수 없는 필터: {}", s),
            ConfigError::UnknownTokenizer(s) => write!(f, "알 수 없는 토크나이저: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

/// 분석기 설정: 토크나이저 + 필터 체인
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// 토큰 분리 방식 (기본: keyword, 입력 전체가 하나의 토큰)
    #[serde(default)]
    pub tokenizer: TokenizerKind,
    /// 순서대로 적용할 필터
    #[serde(default)]
    pub filter: Vec<FilterKind>,
}

impl AnalyzerConfig {
    /// JSON 문자열에서 설정 로드
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 사람이 읽기 좋은 JSON으로 직렬화
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// 설정 파일 로드
pub fn load_config(path: impl AsRef<Path>) -> Result<AnalyzerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    AnalyzerConfig::from_json(&content)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_or_default(path: impl AsRef<Path>) -> AnalyzerConfig {
    let path = path.as_ref();
    load_config(path).unwrap_or_else(|e| {
        log::warn!("설정 로드 실패, 기본값 사용 ({}): {}", path.display(), e);
        AnalyzerConfig::default()
    })
}

/// 설정 파일 저장
pub fn save_config(config: &AnalyzerConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, config.to_json_pretty()?)?;
    Ok(())
}
