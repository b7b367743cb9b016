use clap::Parser;

use esaf_financial_model::{app, config, evaluator, i18n, report};

/// eSAF 생산 시나리오별 비용/매출/이익을 계산하는 CLI.
#[derive(Debug, Parser)]
#[command(name = "esaf_financial_model_cli")]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 대화 없이 저장된 파라미터로 한 번 평가하고 종료한다.
    #[arg(long)]
    batch: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new(&lang);
    if cli.batch {
        let results = evaluator::evaluate_catalog(&cfg.params, &cfg.capex);
        println!("{}", tr.t(i18n::keys::RUN_TABLE_TITLE));
        print!("{}", report::result_table(&results));
        println!("{}", tr.t(i18n::keys::RUN_PAYBACK_TITLE));
        print!("{}", report::payback_table(&results));
        return Ok(());
    }
    app::run(&mut cfg, &tr)?;
    Ok(())
}
