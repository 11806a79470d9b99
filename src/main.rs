use clap::Parser;
use std::io;
use tutor_payout::utils::error::{ErrorCategory, ErrorSeverity};
use tutor_payout::utils::logger;
use tutor_payout::{
    load_policy, CliConfig, ConsoleIntake, JsonReportWriter, OutputFormat, PayoutEngine,
    PayoutError, TextReportWriter,
};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(),
    }

    tracing::debug!("CLI config: {:?}", config);

    // 載入並驗證政策
    let policy = match load_policy(config.policy.as_deref()) {
        Ok(policy) => policy,
        Err(e) => {
            tracing::error!("❌ Policy could not be loaded: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let engine = PayoutEngine::new(policy);
    let pricing = engine.policy().pricing.clone();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let result = match config.format {
        OutputFormat::Text => {
            let mut intake = ConsoleIntake::new(stdin.lock(), stdout.lock(), pricing);
            let mut writer = TextReportWriter::new(io::stdout(), config.details);
            engine.run(&mut intake, &mut writer)
        }
        OutputFormat::Json => {
            // 提示訊息改寫到 stderr，讓 stdout 只有 JSON
            let mut intake = ConsoleIntake::new(stdin.lock(), io::stderr(), pricing);
            let mut writer = JsonReportWriter::new(stdout.lock());
            engine.run(&mut intake, &mut writer)
        }
    };

    if let Err(e) = result {
        exit_with(e);
    }
}

fn exit_with(e: PayoutError) -> ! {
    tracing::error!(
        "❌ Payout run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    // Computation failures were already shown by the report writer
    if e.category() != ErrorCategory::Computation {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    }

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
