//! 한글 자모 처리 핵심 로직

pub mod converter;
pub mod hangul_fsm;
pub mod jamo;
pub mod jamo_mapper;
pub mod unicode;
