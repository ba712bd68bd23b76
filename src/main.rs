//! hangul-filter - 토큰 필터 체인을 텍스트에 적용하는 CLI

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hangul_filter::config::load_config;
use hangul_filter::{Analyzer, AnalyzerConfig, FilterKind, TokenizerKind};

#[derive(Parser, Debug)]
#[command(
    name = "hangul-filter",
    version,
    about = "Apply Hangul chosung/jamo/keyboard-layout token filters to text."
)]
struct Cli {
    /// 적용할 필터 (여러 번 지정 가능, 지정 순서대로 적용)
    #[arg(short, long = "filter", value_name = "NAME")]
    filters: Vec<FilterKind>,

    /// 토크나이저 (keyword | whitespace)
    #[arg(short, long, value_name = "NAME")]
    tokenizer: Option<TokenizerKind>,

    /// 분석기 설정 JSON 파일 (명령행 옵션이 우선)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 등록된 필터 이름 출력
    #[arg(long)]
    list: bool,

    /// 최종 분석기 설정을 JSON으로 출력
    #[arg(long)]
    print_config: bool,

    /// 분석할 텍스트 (없으면 표준 입력을 줄 단위로 처리)
    text: Vec<String>,
}

fn main() -> ExitCode {
    // 로깅 초기화 (기본 warn, RUST_LOG로 조정)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if cli.list {
        for kind in FilterKind::ALL {
            println!("{}", kind);
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(tokenizer) = cli.tokenizer {
        config.tokenizer = tokenizer;
    }
    if !cli.filters.is_empty() {
        config.filter = cli.filters;
    }

    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let analyzer = Analyzer::from_config(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.text.is_empty() {
        writeln!(out, "{}", analyzer.analyze(&cli.text.join(" ")).join(" "))?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        writeln!(out, "{}", analyzer.analyze(&line).join(" "))?;
    }
    Ok(())
}
