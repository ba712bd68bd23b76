//! 토큰 분리

use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// 토크나이저 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// 입력 전체를 하나의 토큰으로
    #[default]
    Keyword,
    /// 공백 기준 분리
    Whitespace,
}

impl TokenizerKind {
    /// 설정에서 사용하는 이름
    pub fn name(&self) -> &'static str {
        match self {
            TokenizerKind::Keyword => "keyword",
            TokenizerKind::Whitespace => "whitespace",
        }
    }

    /// 텍스트를 토큰으로 분리 (빈 토큰은 만들지 않음)
    pub fn tokenize<'a>(&self, text: &'a str) -> Tokens<'a> {
        match self {
            TokenizerKind::Keyword => Tokens::Keyword((!text.is_empty()).then_some(text)),
            TokenizerKind::Whitespace => Tokens::Whitespace(text.split_whitespace()),
        }
    }
}

impl FromStr for TokenizerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keyword" => Ok(TokenizerKind::Keyword),
            "whitespace" => Ok(TokenizerKind::Whitespace),
            _ => Err(ConfigError::UnknownTokenizer(s.to_string())),
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 토큰 반복자
#[derive(Debug)]
pub enum Tokens<'a> {
    Keyword(Option<&'a str>),
    Whitespace(SplitWhitespace<'a>),
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Tokens::Keyword(token) => token.take(),
            Tokens::Whitespace(tokens) => tokens.next(),
        }
    }
}
