//! 토크나이저 + 필터 체인

use std::fmt;

use crate::config::AnalyzerConfig;

use super::tokenizer::{TokenizerKind, Tokens};
use super::TextTransform;

/// 분석기
///
/// 토크나이저가 나눈 토큰에 필터를 순서대로 적용합니다.
/// 필터가 None을 돌려주면 해당 토큰은 버려지고 뒤의 필터는 건너뜁니다.
pub struct Analyzer {
    tokenizer: TokenizerKind,
    filters: Vec<Box<dyn TextTransform>>,
}

impl Analyzer {
    /// 필터 없는 분석기 생성
    pub fn new(tokenizer: TokenizerKind) -> Self {
        Self {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// 설정에서 분석기 생성
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        let analyzer = config
            .filter
            .iter()
            .fold(Self::new(config.tokenizer), |analyzer, &kind| {
                analyzer.with_filter(kind)
            });
        log::debug!("분석기 생성: {:?}", analyzer);
        analyzer
    }

    /// 필터 체인 끝에 필터 추가
    pub fn with_filter(mut self, filter: impl TextTransform + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn tokenizer(&self) -> TokenizerKind {
        self.tokenizer
    }

    /// 필터 이름 목록 (적용 순서)
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// 토큰을 하나씩 꺼내는 스트림
    pub fn token_stream<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        TokenStream {
            analyzer: self,
            tokens: self.tokenizer.tokenize(text),
        }
    }

    /// 전체 토큰 분석
    pub fn analyze(&self, text: &str) -> Vec<String> {
        self.token_stream(text).collect()
    }

    fn apply_filters(&self, token: &str) -> Option<String> {
        let mut current = token.to_string();
        for filter in &self.filters {
            let next = filter.transform(&current);
            log::trace!("{}: {:?} -> {:?}", filter.name(), current, next);
            current = next?;
        }
        Some(current)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(TokenizerKind::default())
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("tokenizer", &self.tokenizer)
            .field("filters", &self.filter_names())
            .finish()
    }
}

/// 필터가 적용된 토큰 스트림
pub struct TokenStream<'a> {
    analyzer: &'a Analyzer,
    tokens: Tokens<'a>,
}

impl Iterator for TokenStream<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = self.tokens.next()?;
            if let Some(filtered) = self.analyzer.apply_filters(token) {
                return Some(filtered);
            }
        }
    }
}
